//! The fixed sample dataset, and the bulk clear that empties every table before a reseed.
//!
//! Departments, students and events get their identifiers from SQLite. Join rows are built by
//! looking those identifiers up by natural key (department name, student full name, event name)
//! from the rows returned by the parent inserts, so the seed does not depend on insertion order.

use crate::models::{
    Department, Event, EventAttendance, EventHost, Major, MajorRecord, NewDepartment, NewEvent,
    NewStudent, Student,
};
use crate::schema;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::{Error, QueryResult};
use std::collections::HashMap;

/// `(name, chair name, faculty count)`.
pub const DEPARTMENTS: [(&str, &str, i32); 5] = [
    ("Department of Biology", "John Doe", 100),
    ("Department of Computer Science", "Dark Bark", 205),
    ("Department of Engineering", "Eng Ineer", 50),
    ("Department of Mathematics", "Math Metician", 14),
    ("Department of Chemistry", "Walter White", 235),
];

/// `(code, name, owning department name)`.
pub const MAJORS: [(&str, &str, &str); 5] = [
    ("BIO", "Biology", "Department of Biology"),
    ("CSC", "Computer Science", "Department of Computer Science"),
    ("ECE", "Electrical Engineering", "Department of Engineering"),
    ("MTH", "Mathematics", "Department of Mathematics"),
    ("CHM", "Chemistry", "Department of Chemistry"),
];

/// `(first name, last name, initial)`.
pub const STUDENTS: [(&str, &str, &str); 5] = [
    ("Jin", "Curia", "JC"),
    ("Red", "Blue", "RB"),
    ("Green", "Black", "GB"),
    ("John", "Johnson", "JJ"),
    ("Rat", "Ratson", "RR"),
];

/// `(major code, student full name)`.
pub const MAJOR_RECORDS: [(&str, &str); 5] = [
    ("BIO", "Jin Curia"),
    ("CSC", "Red Blue"),
    ("CSC", "Green Black"),
    ("ECE", "John Johnson"),
    ("MTH", "Rat Ratson"),
];

/// `(name, start date, end date)`.
pub const EVENTS: [(&str, NaiveDate, NaiveDate); 5] = [
    ("Christmas Party", ymd(2021, 12, 25), ymd(2021, 12, 26)),
    ("Halloween Party", ymd(2022, 11, 29), ymd(2022, 11, 30)),
    ("February Jam", ymd(2022, 2, 4), ymd(2022, 2, 5)),
    ("June Jam", ymd(2022, 6, 1), ymd(2022, 6, 2)),
    ("August Party", ymd(2022, 8, 1), ymd(2022, 8, 2)),
];

/// `(event name, host department name)`.
pub const EVENT_HOSTS: [(&str, &str); 5] = [
    ("Christmas Party", "Department of Biology"),
    ("Halloween Party", "Department of Biology"),
    ("February Jam", "Department of Engineering"),
    ("June Jam", "Department of Mathematics"),
    ("August Party", "Department of Chemistry"),
];

/// `(event name, attendee full name)`.
pub const EVENT_ATTENDANCE: [(&str, &str); 5] = [
    ("Christmas Party", "Jin Curia"),
    ("Halloween Party", "Red Blue"),
    ("February Jam", "Green Black"),
    ("June Jam", "John Johnson"),
    ("August Party", "Rat Ratson"),
];

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

/// Looks up an identifier returned by a parent insert.
fn lookup(ids: &HashMap<String, i32>, key: &str) -> QueryResult<i32> {
    ids.get(key)
        .copied()
        .ok_or_else(|| Error::QueryBuilderError(format!("seed row refers to unknown `{key}`").into()))
}

/// Inserts the sample dataset. The tables are expected to be empty; a row that violates a check,
/// foreign key or uniqueness constraint aborts the seed with the engine's error.
///
/// Returns the total number of rows inserted.
pub fn fill_tables(conn: &mut SqliteConnection) -> QueryResult<usize> {
    let new_departments: Vec<NewDepartment> = DEPARTMENTS
        .iter()
        .map(|&(name, chair_name, faculty_count)| NewDepartment {
            name,
            chair_name,
            faculty_count,
        })
        .collect();

    let departments = diesel::insert_into(schema::departments::table)
        .values(&new_departments)
        .returning(Department::as_returning())
        .get_results(conn)?;

    let department_ids: HashMap<String, i32> = departments
        .into_iter()
        .map(|department| (department.name, department.dep_id))
        .collect();

    let new_majors = MAJORS
        .iter()
        .map(|&(code, name, department)| {
            Ok(Major {
                major_id: code.to_string(),
                name: name.to_string(),
                dep_id: Some(lookup(&department_ids, department)?),
            })
        })
        .collect::<QueryResult<Vec<Major>>>()?;

    let majors_inserted = diesel::insert_into(schema::majors::table)
        .values(&new_majors)
        .execute(conn)?;

    let new_students: Vec<NewStudent> = STUDENTS
        .iter()
        .map(|&(first_name, last_name, initial)| NewStudent {
            first_name,
            last_name,
            initial,
        })
        .collect();

    let students = diesel::insert_into(schema::students::table)
        .values(&new_students)
        .returning(Student::as_returning())
        .get_results(conn)?;

    let student_ids: HashMap<String, i32> = students
        .iter()
        .map(|student| (student.full_name(), student.stud_id))
        .collect();

    let records = MAJOR_RECORDS
        .iter()
        .map(|&(major_id, student)| {
            Ok(MajorRecord {
                major_id: major_id.to_string(),
                stud_id: lookup(&student_ids, student)?,
            })
        })
        .collect::<QueryResult<Vec<MajorRecord>>>()?;

    let records_inserted = diesel::insert_into(schema::major_records::table)
        .values(&records)
        .execute(conn)?;

    let new_events: Vec<NewEvent> = EVENTS
        .iter()
        .map(|&(name, start_date, end_date)| NewEvent {
            name,
            start_date,
            end_date,
        })
        .collect();

    let events = diesel::insert_into(schema::events::table)
        .values(&new_events)
        .returning(Event::as_returning())
        .get_results(conn)?;

    let event_ids: HashMap<String, i32> = events
        .into_iter()
        .map(|event| (event.name, event.event_id))
        .collect();

    let hosts = EVENT_HOSTS
        .iter()
        .map(|&(event, department)| {
            Ok(EventHost {
                event_id: lookup(&event_ids, event)?,
                dep_id: lookup(&department_ids, department)?,
            })
        })
        .collect::<QueryResult<Vec<EventHost>>>()?;

    let hosts_inserted = diesel::insert_into(schema::event_hosts::table)
        .values(&hosts)
        .execute(conn)?;

    let attendance = EVENT_ATTENDANCE
        .iter()
        .map(|&(event, student)| {
            Ok(EventAttendance {
                event_id: lookup(&event_ids, event)?,
                stud_id: lookup(&student_ids, student)?,
            })
        })
        .collect::<QueryResult<Vec<EventAttendance>>>()?;

    let attendance_inserted = diesel::insert_into(schema::event_attendance::table)
        .values(&attendance)
        .execute(conn)?;

    let total = department_ids.len()
        + majors_inserted
        + student_ids.len()
        + records_inserted
        + event_ids.len()
        + hosts_inserted
        + attendance_inserted;

    tracing::info!("seeded {total} rows");

    Ok(total)
}

/// Deletes every row from every table, parents first. Every foreign key either cascades or sets
/// null, so no delete is rejected.
///
/// Returns the number of rows deleted directly (cascaded deletes are not counted).
pub fn clear_tables(conn: &mut SqliteConnection) -> QueryResult<usize> {
    let deleted = diesel::delete(schema::departments::table).execute(conn)?
        + diesel::delete(schema::students::table).execute(conn)?
        + diesel::delete(schema::majors::table).execute(conn)?
        + diesel::delete(schema::major_records::table).execute(conn)?
        + diesel::delete(schema::events::table).execute(conn)?
        + diesel::delete(schema::event_hosts::table).execute(conn)?
        + diesel::delete(schema::event_attendance::table).execute(conn)?;

    tracing::info!("cleared {deleted} rows");

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::create_tables;
    use diesel::connection::SimpleConnection;

    fn seeded_connection() -> SqliteConnection {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        conn.batch_execute("PRAGMA foreign_keys = ON;").unwrap();
        create_tables(&mut conn).unwrap();
        fill_tables(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_fill_tables_inserts_five_rows_each() {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        conn.batch_execute("PRAGMA foreign_keys = ON;").unwrap();
        create_tables(&mut conn).unwrap();

        assert_eq!(fill_tables(&mut conn).unwrap(), 35);
    }

    #[test]
    fn test_every_major_has_a_department() {
        let mut conn = seeded_connection();

        let majors = schema::majors::table
            .select(Major::as_select())
            .load(&mut conn)
            .unwrap();
        assert_eq!(majors.len(), 5);

        for major in majors {
            let dep_id = major.dep_id.expect("seeded majors all have a department");
            let found: i64 = schema::departments::table
                .filter(schema::departments::dep_id.eq(dep_id))
                .count()
                .get_result(&mut conn)
                .unwrap();
            assert_eq!(found, 1, "major {} points at a missing department", major.major_id);
        }
    }

    #[test]
    fn test_seed_twice_violates_uniqueness() {
        let mut conn = seeded_connection();
        assert!(fill_tables(&mut conn).is_err());
    }

    #[test]
    fn test_clear_then_reseed() {
        let mut conn = seeded_connection();

        clear_tables(&mut conn).unwrap();
        let remaining: i64 = schema::event_attendance::table
            .count()
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(remaining, 0);

        assert_eq!(fill_tables(&mut conn).unwrap(), 35);
    }

    #[test]
    fn test_lookup_unknown_key() {
        let ids = HashMap::from([("Jin Curia".to_string(), 1)]);
        assert_eq!(lookup(&ids, "Jin Curia").unwrap(), 1);
        assert!(lookup(&ids, "Nobody").is_err());
    }
}
