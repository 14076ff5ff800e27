//! Store behavior against a fuller fixture: several courses, renamed and
//! duplicated student roles, mixed account states.

use blockframe_core::{CourseId, DataStore, SqliteStore, UserId};
use rstest::rstest;
use rusqlite::Connection;

const SCHEMA: &str = "
    CREATE TABLE course (
        id INTEGER PRIMARY KEY,
        shortname TEXT NOT NULL,
        category INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE context (id INTEGER PRIMARY KEY, instanceid INTEGER NOT NULL);
    CREATE TABLE role (id INTEGER PRIMARY KEY, shortname TEXT NOT NULL, archetype TEXT NOT NULL);
    CREATE TABLE role_assignments (
        id INTEGER PRIMARY KEY,
        contextid INTEGER NOT NULL,
        roleid INTEGER NOT NULL,
        userid INTEGER NOT NULL
    );
    CREATE TABLE user (
        id INTEGER PRIMARY KEY,
        firstname TEXT NOT NULL,
        lastname TEXT NOT NULL,
        suspended INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE user_lastaccess (
        id INTEGER PRIMARY KEY,
        userid INTEGER NOT NULL,
        courseid INTEGER NOT NULL,
        timeaccess INTEGER NOT NULL
    );
    CREATE TABLE block_instances (
        id INTEGER PRIMARY KEY,
        blockname TEXT NOT NULL,
        parentcontextid INTEGER NOT NULL
    );
    CREATE TABLE course_categories (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
";

/// Two courses. CS101 carries three students (one via a renamed student
/// role, one suspended), a teacher, and a guest-less enrollment spread.
/// HIST201 carries a single student who also teaches CS101.
const FIXTURE: &str = "
    INSERT INTO course_categories VALUES (1, 'Computing');
    INSERT INTO course_categories VALUES (2, 'Humanities');
    INSERT INTO course VALUES (2, 'CS101', 1);
    INSERT INTO course VALUES (3, 'HIST201', 2);
    INSERT INTO context VALUES (20, 2);
    INSERT INTO context VALUES (30, 3);

    INSERT INTO role VALUES (5, 'student', 'student');
    INSERT INTO role VALUES (9, 'learner', 'student');
    INSERT INTO role VALUES (3, 'teacher', 'editingteacher');

    INSERT INTO user VALUES (100, 'Alice', 'Smith', 0);
    INSERT INTO user VALUES (101, 'Bob', 'Jones', 0);
    INSERT INTO user VALUES (102, 'Carol', 'Adams', 1);
    INSERT INTO user VALUES (103, 'Dan', 'Brown', 0);

    INSERT INTO role_assignments VALUES (1, 20, 5, 100);
    INSERT INTO role_assignments VALUES (2, 20, 9, 101);
    INSERT INTO role_assignments VALUES (3, 20, 5, 102);
    INSERT INTO role_assignments VALUES (4, 20, 3, 103);
    INSERT INTO role_assignments VALUES (5, 30, 5, 103);

    INSERT INTO user_lastaccess VALUES (1, 100, 2, 1700000000);
";

fn fixture_store() -> SqliteStore {
    let conn = Connection::open_in_memory().expect("open");
    conn.execute_batch(SCHEMA).expect("schema");
    conn.execute_batch(FIXTURE).expect("fixture");
    SqliteStore::from_connection(conn)
}

#[test]
fn cs101_students_cover_both_student_roles_and_keep_suspended() {
    let store = fixture_store();
    let students = store.enrolled_students(CourseId(2)).expect("query");
    let ids: Vec<i64> = students.iter().map(|s| s.id.0).collect();
    // Adams (suspended), Jones via the renamed role, Smith; teacher absent.
    assert_eq!(ids, vec![102, 101, 100]);
}

#[test]
fn enrollment_is_scoped_to_the_requested_course() {
    let store = fixture_store();
    let students = store.enrolled_students(CourseId(3)).expect("query");
    let ids: Vec<i64> = students.iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![103], "teaching CS101 must not leak into HIST201");
}

#[rstest]
#[case(2, 100, true)] // visited CS101
#[case(2, 101, false)] // never visited
#[case(3, 103, false)] // enrolled but never visited
fn last_access_reflects_access_rows(
    #[case] course: i64,
    #[case] user: i64,
    #[case] present: bool,
) {
    let store = fixture_store();
    let at = store
        .last_course_access(CourseId(course), UserId(user))
        .expect("query");
    assert_eq!(at.is_some(), present);
}

#[test]
fn unknown_course_has_no_students() {
    let store = fixture_store();
    let students = store.enrolled_students(CourseId(99)).expect("query");
    assert!(students.is_empty());
}
