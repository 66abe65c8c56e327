//! The five fixed join reports, plus full-table reads and row counts.

use crate::models::{Department, Event, EventAttendance, EventHost, Major, MajorRecord, Student};
use crate::schema::{
    departments, event_attendance, event_hosts, events, major_records, majors, students,
};
use diesel::prelude::*;
use diesel::result::QueryResult;
use serde::Serialize;
use tabled::Tabled;

/// Who attended which event.
#[derive(Queryable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EventAttendee {
    pub event_name: String,
    pub first_name: String,
    pub last_name: String,
}

/// A declared major, with the student and major spelled out.
#[derive(Queryable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeclaredMajor {
    pub first_name: String,
    pub last_name: String,
    pub major_name: String,
}

#[derive(Queryable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EventHostName {
    pub event_name: String,
    pub host_name: String,
}

#[derive(Queryable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MajorDepartment {
    pub major_code: String,
    pub major_name: String,
    pub dep_name: String,
}

/// A student and the department of a major they declared. A student with several majors appears
/// once per major.
#[derive(Queryable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StudentDepartment {
    pub first_name: String,
    pub last_name: String,
    pub dep_name: String,
}

/// 1. Event attendance with event and student names.
pub fn event_attendees(conn: &mut SqliteConnection) -> QueryResult<Vec<EventAttendee>> {
    event_attendance::table
        .inner_join(events::table)
        .inner_join(students::table)
        .select((events::name, students::first_name, students::last_name))
        .load(conn)
}

/// 2. Declared majors with student and major names.
pub fn declared_majors(conn: &mut SqliteConnection) -> QueryResult<Vec<DeclaredMajor>> {
    major_records::table
        .inner_join(students::table)
        .inner_join(majors::table)
        .select((students::first_name, students::last_name, majors::name))
        .load(conn)
}

/// 3. Events with the names of their hosting departments.
pub fn event_host_names(conn: &mut SqliteConnection) -> QueryResult<Vec<EventHostName>> {
    event_hosts::table
        .inner_join(events::table)
        .inner_join(departments::table)
        .select((events::name, departments::name))
        .load(conn)
}

/// 4. Majors with the department they belong to. Majors whose department was deleted drop out.
pub fn major_departments(conn: &mut SqliteConnection) -> QueryResult<Vec<MajorDepartment>> {
    majors::table
        .inner_join(departments::table)
        .select((majors::major_id, majors::name, departments::name))
        .load(conn)
}

/// 5. Students with the departments of their declared majors.
pub fn student_departments(conn: &mut SqliteConnection) -> QueryResult<Vec<StudentDepartment>> {
    major_records::table
        .inner_join(students::table)
        .inner_join(majors::table.inner_join(departments::table))
        .select((students::first_name, students::last_name, departments::name))
        .load(conn)
}

/// Every row of every table.
#[derive(Debug, Default)]
pub struct TableDump {
    pub departments: Vec<Department>,
    pub students: Vec<Student>,
    pub majors: Vec<Major>,
    pub major_records: Vec<MajorRecord>,
    pub events: Vec<Event>,
    pub event_hosts: Vec<EventHost>,
    pub event_attendance: Vec<EventAttendance>,
}

pub fn dump_tables(conn: &mut SqliteConnection) -> QueryResult<TableDump> {
    Ok(TableDump {
        departments: departments::table
            .select(Department::as_select())
            .load(conn)?,
        students: students::table.select(Student::as_select()).load(conn)?,
        majors: majors::table.select(Major::as_select()).load(conn)?,
        major_records: major_records::table
            .select(MajorRecord::as_select())
            .load(conn)?,
        events: events::table.select(Event::as_select()).load(conn)?,
        event_hosts: event_hosts::table
            .select(EventHost::as_select())
            .load(conn)?,
        event_attendance: event_attendance::table
            .select(EventAttendance::as_select())
            .load(conn)?,
    })
}

/// Number of rows in one table.
#[derive(Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RowCount {
    pub table: &'static str,
    pub rows: i64,
}

/// Returns the row count of every table, in creation order.
pub fn count_rows(conn: &mut SqliteConnection) -> QueryResult<Vec<RowCount>> {
    let counts = [
        ("Department", departments::table.count().get_result::<i64>(conn)?),
        ("Student", students::table.count().get_result::<i64>(conn)?),
        ("Major", majors::table.count().get_result::<i64>(conn)?),
        ("MajorRecord", major_records::table.count().get_result::<i64>(conn)?),
        ("Event", events::table.count().get_result::<i64>(conn)?),
        ("EventHost", event_hosts::table.count().get_result::<i64>(conn)?),
        (
            "EventAttendance",
            event_attendance::table.count().get_result::<i64>(conn)?,
        ),
    ];

    Ok(counts
        .into_iter()
        .map(|(table, rows)| RowCount { table, rows })
        .collect())
}
