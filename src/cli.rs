//! This module contains the command-line interface [`Cli`] parser for building, seeding and
//! querying the school database.

use clap::{Args, Parser, Subcommand};

use crate::display::OutputFormat;

/// The command line configuration struct, where the command-line interface parser is automatically
/// derived by [`clap::Parser`].
#[derive(Parser, Debug)]
#[command(version, about = "Builds, seeds and reports on the school database")]
pub struct Cli {
    /// Database to use instead of the configured one.
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Log debug output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to do. Without a command the full pipeline runs.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct FormatArg {
    /// Output format for reports.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the tables, seed them and print every report.
    Run {
        /// Clear existing rows before seeding.
        #[arg(long)]
        fresh: bool,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Create any missing tables.
    Setup,

    /// Create any missing tables and insert the sample data.
    Seed {
        /// Clear existing rows before seeding.
        #[arg(long)]
        fresh: bool,
    },

    /// Delete every row from every table.
    Clear,

    /// Print one report (1 to 5), or all of them.
    Query {
        report: Option<usize>,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Print the full contents of every table.
    ShowTables {
        #[command(flatten)]
        format: FormatArg,
    },

    /// Print the number of rows in each table.
    Counts {
        #[command(flatten)]
        format: FormatArg,
    },
}

impl Cli {
    /// The command to run, defaulting to the full pipeline.
    pub fn resolved_command(&self) -> Command {
        match &self.command {
            Some(command) => command.clone(),
            None => Command::Run {
                fresh: false,
                format: FormatArg::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_runs_pipeline() {
        let cli = Cli::try_parse_from(["school"]).unwrap();

        assert!(matches!(
            cli.resolved_command(),
            Command::Run {
                fresh: false,
                format: FormatArg {
                    format: OutputFormat::Table
                }
            }
        ));
    }

    #[test]
    fn test_query_with_report_and_format() {
        let cli =
            Cli::try_parse_from(["school", "--database", "x.db", "query", "4", "--format", "csv"])
                .unwrap();

        assert_eq!(cli.database.as_deref(), Some("x.db"));
        assert!(matches!(
            cli.resolved_command(),
            Command::Query {
                report: Some(4),
                format: FormatArg {
                    format: OutputFormat::Csv
                }
            }
        ));
    }

    #[test]
    fn test_seed_fresh() {
        let cli = Cli::try_parse_from(["school", "-v", "seed", "--fresh"]).unwrap();

        assert!(cli.verbose);
        assert!(matches!(cli.resolved_command(), Command::Seed { fresh: true }));
    }

    #[test]
    fn test_counts_accepts_format() {
        let cli = Cli::try_parse_from(["school", "counts", "--format", "csv"]).unwrap();

        assert!(matches!(
            cli.resolved_command(),
            Command::Counts {
                format: FormatArg {
                    format: OutputFormat::Csv
                }
            }
        ));
    }
}
