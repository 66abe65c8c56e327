use crate::schema::{
    departments, event_attendance, event_hosts, events, major_records, majors, students,
};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Serialize;
use tabled::Tabled;

#[derive(Queryable, Selectable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Department {
    pub dep_id: i32,
    pub name: String,
    pub chair_name: String,
    pub faculty_count: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = departments)]
pub struct NewDepartment<'a> {
    pub name: &'a str,
    pub chair_name: &'a str,
    pub faculty_count: i32,
}

#[derive(Queryable, Selectable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Student {
    pub stud_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub initial: String,
}

impl Student {
    /// The "First Last" name used to refer to a student in seed data.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = students)]
pub struct NewStudent<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub initial: &'a str,
}

/// A major. Unlike the other entities its key is a three-letter code chosen by hand, so the same
/// struct is used for inserting and reading.
#[derive(Queryable, Selectable, Insertable, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = majors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Major {
    pub major_id: String,
    pub name: String,
    /// `None` once the owning department has been deleted.
    pub dep_id: Option<i32>,
}

#[derive(Queryable, Selectable, Insertable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = major_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MajorRecord {
    pub major_id: String,
    pub stud_id: i32,
}

#[derive(Queryable, Selectable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Event {
    pub event_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = events)]
pub struct NewEvent<'a> {
    pub name: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Queryable, Selectable, Insertable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = event_hosts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EventHost {
    pub event_id: i32,
    pub dep_id: i32,
}

#[derive(Queryable, Selectable, Insertable, Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = event_attendance)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EventAttendance {
    pub event_id: i32,
    pub stud_id: i32,
}
