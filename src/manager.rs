use crate::display::{self, OutputFormat};
use crate::queries::{self, RowCount, TableDump};
use crate::{builder, seed};
use anyhow::{Context, Result};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::result::QueryResult;

/// The five reports, in the order the pipeline prints them.
pub const REPORT_LABELS: [&str; 5] = [
    "Event attendance",
    "Declared majors",
    "Event hosts",
    "Major departments",
    "Student departments",
];

/// The manager for creating, seeding and reporting on the school database. It owns the single
/// connection used for the lifetime of the process.
pub struct SchoolManager {
    db: SqliteConnection,
}

impl SchoolManager {
    /// Creates a new `SchoolManager` by connecting to the `sqlite3` database at `database_url`.
    /// Foreign-key enforcement is switched on for the connection, since SQLite leaves it off.
    pub fn connect(database_url: &str) -> Result<Self> {
        let mut connection = SqliteConnection::establish(database_url)
            .with_context(|| format!("Error connecting to {database_url}"))?;

        connection.batch_execute("PRAGMA foreign_keys = ON;")?;

        tracing::debug!("connected to {database_url}");

        Ok(Self { db: connection })
    }

    /// Borrows the underlying connection.
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.db
    }

    /// Creates any tables that are missing.
    pub fn create_tables(&mut self) -> QueryResult<()> {
        builder::create_tables(&mut self.db)
    }

    /// Removes every row from every table.
    pub fn clear_tables(&mut self) -> QueryResult<usize> {
        seed::clear_tables(&mut self.db)
    }

    pub fn dump_tables(&mut self) -> QueryResult<TableDump> {
        queries::dump_tables(&mut self.db)
    }

    pub fn count_rows(&mut self) -> QueryResult<Vec<RowCount>> {
        queries::count_rows(&mut self.db)
    }

    /// Runs one report (1 to 5) and prints it.
    pub fn show_report(&mut self, report: usize, format: OutputFormat) -> Result<()> {
        show_report(&mut self.db, report, format)
    }

    /// Runs and prints all five reports in order.
    pub fn show_reports(&mut self, format: OutputFormat) -> Result<()> {
        show_reports(&mut self.db, format)
    }

    /// Creates missing tables and seeds them in one transaction, optionally clearing them first.
    pub fn seed(&mut self, fresh: bool) -> QueryResult<usize> {
        self.db.transaction(|conn| {
            builder::create_tables(conn)?;

            if fresh {
                seed::clear_tables(conn)?;
            }

            seed::fill_tables(conn)
        })
    }

    /// The whole pipeline: create the schema, seed it, then print the five reports. Everything
    /// happens in one transaction that commits at the end, so a failure leaves the file as it was.
    ///
    /// With `fresh`, the tables are cleared before seeding so the pipeline can be rerun against an
    /// existing database.
    pub fn run(&mut self, fresh: bool, format: OutputFormat) -> Result<()> {
        self.db.transaction(|conn| {
            builder::create_tables(conn)?;

            if fresh {
                seed::clear_tables(conn)?;
            }

            seed::fill_tables(conn)?;

            show_reports(conn, format)
        })?;

        tracing::info!("committed");

        Ok(())
    }

    /// Closes the connection.
    pub fn close(self) {
        drop(self.db);
        tracing::debug!("connection closed");
    }
}

fn show_report(conn: &mut SqliteConnection, report: usize, format: OutputFormat) -> Result<()> {
    let label = report
        .checked_sub(1)
        .and_then(|index| REPORT_LABELS.get(index))
        .with_context(|| format!("there is no report {report}, expected 1 to 5"))?;

    tracing::debug!("running report {report}: {label}");

    match report {
        1 => display::show(label, &queries::event_attendees(conn)?, format),
        2 => display::show(label, &queries::declared_majors(conn)?, format),
        3 => display::show(label, &queries::event_host_names(conn)?, format),
        4 => display::show(label, &queries::major_departments(conn)?, format),
        _ => display::show(label, &queries::student_departments(conn)?, format),
    }
}

fn show_reports(conn: &mut SqliteConnection, format: OutputFormat) -> Result<()> {
    for report in 1..=REPORT_LABELS.len() {
        show_report(conn, report, format)?;
    }

    Ok(())
}
