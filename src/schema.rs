// Mirrors the DDL in `schema.sql`. The SQL tables use singular CamelCase names, so each one
// carries an explicit `sql_name`.

diesel::table! {
    #[sql_name = "Department"]
    departments (dep_id) {
        dep_id -> Integer,
        name -> Text,
        chair_name -> Text,
        faculty_count -> Integer,
    }
}

diesel::table! {
    #[sql_name = "Student"]
    students (stud_id) {
        stud_id -> Integer,
        first_name -> Text,
        last_name -> Text,
        initial -> Text,
    }
}

diesel::table! {
    #[sql_name = "Major"]
    majors (major_id) {
        major_id -> Text,
        name -> Text,
        dep_id -> Nullable<Integer>,
    }
}

diesel::table! {
    #[sql_name = "MajorRecord"]
    major_records (major_id, stud_id) {
        major_id -> Text,
        stud_id -> Integer,
    }
}

diesel::table! {
    #[sql_name = "Event"]
    events (event_id) {
        event_id -> Integer,
        name -> Text,
        start_date -> Date,
        end_date -> Date,
    }
}

diesel::table! {
    #[sql_name = "EventHost"]
    event_hosts (event_id, dep_id) {
        event_id -> Integer,
        dep_id -> Integer,
    }
}

diesel::table! {
    #[sql_name = "EventAttendance"]
    event_attendance (event_id, stud_id) {
        event_id -> Integer,
        stud_id -> Integer,
    }
}

diesel::joinable!(majors -> departments (dep_id));
diesel::joinable!(major_records -> majors (major_id));
diesel::joinable!(major_records -> students (stud_id));
diesel::joinable!(event_hosts -> events (event_id));
diesel::joinable!(event_hosts -> departments (dep_id));
diesel::joinable!(event_attendance -> events (event_id));
diesel::joinable!(event_attendance -> students (stud_id));

diesel::allow_tables_to_appear_in_same_query!(
    departments,
    students,
    majors,
    major_records,
    events,
    event_hosts,
    event_attendance,
);
