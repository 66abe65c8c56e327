//! Creates the school schema.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::result::QueryResult;

/// DDL for every table, in dependency order.
pub const SCHEMA_SQL: &str = include_str!("schema.sql");

/// The SQL names of the tables created by [`create_tables`].
pub const TABLE_NAMES: [&str; 7] = [
    "Department",
    "Student",
    "Major",
    "MajorRecord",
    "Event",
    "EventHost",
    "EventAttendance",
];

/// Creates any of the seven tables that do not exist yet. Running this against a database that
/// already holds the schema is a no-op.
pub fn create_tables(conn: &mut SqliteConnection) -> QueryResult<()> {
    tracing::info!("creating schema ({} tables)", TABLE_NAMES.len());
    conn.batch_execute(SCHEMA_SQL)
}
