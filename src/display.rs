use crate::queries::TableDump;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

/// How reports are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// A box-drawn table.
    #[default]
    Table,
    /// Comma-separated values with a header row.
    Csv,
}

/// Renders rows as a table, one column per field.
pub fn render_table<T: Tabled>(rows: &[T]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Renders rows as CSV. The header row is written even when there are no rows.
pub fn render_csv<T: Tabled + Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    writer.write_record(T::headers().iter().map(|header| header.as_bytes()))?;
    for row in rows {
        writer.serialize(row)?;
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}

pub fn render<T: Tabled + Serialize>(rows: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Csv => render_csv(rows),
    }
}

/// Pretty prints a labeled result set.
pub fn show<T: Tabled + Serialize>(label: &str, rows: &[T], format: OutputFormat) -> Result<()> {
    let rendered = render(rows, format)?;

    match format {
        OutputFormat::Table => println!("{label}:\n{rendered}"),
        OutputFormat::Csv => print!("# {label}\n{rendered}"),
    }

    Ok(())
}

/// Pretty prints every table in the dump, labeled with its SQL table name.
pub fn show_tables(dump: &TableDump, format: OutputFormat) -> Result<()> {
    // `dep_id` is nullable, which `Tabled` cannot display directly.
    #[derive(Tabled, Serialize)]
    struct MajorRow {
        major_id: String,
        name: String,
        dep_id: String,
    }

    let majors: Vec<MajorRow> = dump
        .majors
        .iter()
        .map(|major| MajorRow {
            major_id: major.major_id.clone(),
            name: major.name.clone(),
            dep_id: major
                .dep_id
                .map_or_else(|| "NULL".to_string(), |id| id.to_string()),
        })
        .collect();

    show("Department", &dump.departments, format)?;
    show("Student", &dump.students, format)?;
    show("Major", &majors, format)?;
    show("Event", &dump.events, format)?;
    show("MajorRecord", &dump.major_records, format)?;
    show("EventHost", &dump.event_hosts, format)?;
    show("EventAttendance", &dump.event_attendance, format)?;

    Ok(())
}
