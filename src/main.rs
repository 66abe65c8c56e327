use anyhow::Result;
use clap::Parser;
use school::cli::{Cli, Command};
use school::display;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise pick a level from the verbose flag.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "school=debug".to_string()
        } else {
            "school=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut manager = school::create_default_manager(cli.database.as_deref())?;

    match cli.resolved_command() {
        Command::Run { fresh, format } => manager.run(fresh, format.format)?,
        Command::Setup => manager.create_tables()?,
        Command::Seed { fresh } => {
            manager.seed(fresh)?;
        }
        Command::Clear => {
            manager.clear_tables()?;
        }
        Command::Query { report, format } => match report {
            Some(report) => manager.show_report(report, format.format)?,
            None => manager.show_reports(format.format)?,
        },
        Command::ShowTables { format } => {
            let dump = manager.dump_tables()?;
            display::show_tables(&dump, format.format)?;
        }
        Command::Counts { format } => {
            let counts = manager.count_rows()?;
            display::show("Row counts", &counts, format.format)?;
        }
    }

    manager.close();

    Ok(())
}
