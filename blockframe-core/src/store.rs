//! SQLite-backed course data store.
//!
//! # Schema ownership
//!
//! The tables queried here (`course`, `context`, `role`,
//! `role_assignments`, `user`, `user_lastaccess`, `block_instances`,
//! `course_categories`) belong to the hosting framework; this layer only
//! reads them. Tests create a minimal fixture schema of their own.
//!
//! # API pattern
//!
//! [`DataStore`] is the seam the render layer programs against;
//! [`SqliteStore`] is the shipped implementation. Hosts that manage their
//! own connection hand it over via [`SqliteStore::from_connection`].

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::error::StoreError;
use crate::types::{BlockId, BlockSummaryRecord, CourseId, EnrolledStudent, RoleId, UserId};

// ---------------------------------------------------------------------------
// DataStore seam
// ---------------------------------------------------------------------------

/// Everything the view layer reads from the relational store.
///
/// All methods are synchronous, read-only, and propagate store failures
/// unchanged; absent optional data is `None`, never an error.
pub trait DataStore {
    /// Every user holding a student-archetype role in `course`.
    fn enrolled_students(&self, course: CourseId) -> Result<Vec<EnrolledStudent>, StoreError>;

    /// When `user` last accessed `course`.
    ///
    /// `None` when no access row exists; the user may never have visited
    /// the course, which is not an error.
    fn last_course_access(
        &self,
        course: CourseId,
        user: UserId,
    ) -> Result<Option<DateTime<Utc>>, StoreError>;

    /// One record per placed instance of the block type `block_name`,
    /// with its course short name and category name resolved.
    fn block_summaries(&self, block_name: &str) -> Result<Vec<BlockSummaryRecord>, StoreError>;
}

// ---------------------------------------------------------------------------
// SqliteStore
// ---------------------------------------------------------------------------

/// [`DataStore`] over a rusqlite connection.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the course database at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let conn =
            Connection::open(&path).map_err(|source| StoreError::Open { path, source })?;
        Ok(SqliteStore { conn })
    }

    /// Wrap a connection the host already holds.
    pub fn from_connection(conn: Connection) -> Self {
        SqliteStore { conn }
    }

    /// In-memory store; used by tests and demo hosts.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(SqliteStore { conn: Connection::open_in_memory()? })
    }

    /// Role ids whose archetype is `student`, in id order.
    ///
    /// Installations rename and duplicate student roles, so the whole
    /// archetype set is resolved rather than a fixed role id.
    fn student_role_ids(&self) -> Result<Vec<RoleId>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM role WHERE archetype = 'student' ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, i64>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids.into_iter().map(RoleId).collect())
    }
}

impl DataStore for SqliteStore {
    fn enrolled_students(&self, course: CourseId) -> Result<Vec<EnrolledStudent>, StoreError> {
        let roles = self.student_role_ids()?;
        if roles.is_empty() {
            log::debug!("no student-archetype roles defined; course {course} has no students");
            return Ok(Vec::new());
        }

        // Known limitation: deleted and suspended accounts are not
        // filtered out of the result.
        let placeholders = vec!["?"; roles.len()].join(", ");
        let sql = format!(
            "SELECT u.id, u.firstname, u.lastname \
             FROM course c \
             JOIN context x ON c.id = x.instanceid \
             JOIN role_assignments r ON r.contextid = x.id \
             JOIN user u ON u.id = r.userid \
             WHERE c.id = ? AND r.roleid IN ({placeholders}) \
             ORDER BY u.lastname, u.firstname, u.id"
        );

        let mut values: Vec<Value> = Vec::with_capacity(roles.len() + 1);
        values.push(Value::Integer(course.0));
        values.extend(roles.iter().map(|role| Value::Integer(role.0)));

        let mut stmt = self.conn.prepare(&sql)?;
        let students = stmt
            .query_map(params_from_iter(values), |row| {
                Ok(EnrolledStudent {
                    id: UserId(row.get(0)?),
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("course {course}: {} enrolled students", students.len());
        Ok(students)
    }

    fn last_course_access(
        &self,
        course: CourseId,
        user: UserId,
    ) -> Result<Option<DateTime<Utc>>, StoreError> {
        let seconds: Option<i64> = self
            .conn
            .query_row(
                "SELECT timeaccess FROM user_lastaccess WHERE courseid = ?1 AND userid = ?2",
                params![course.0, user.0],
                |row| row.get(0),
            )
            .optional()?;
        Ok(seconds.and_then(|secs| {
            let at = DateTime::from_timestamp(secs, 0);
            if at.is_none() {
                log::debug!("user {user} course {course}: unrepresentable timeaccess {secs}");
            }
            at
        }))
    }

    fn block_summaries(&self, block_name: &str) -> Result<Vec<BlockSummaryRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT bi.id, bi.blockname, c.shortname, cc.name \
             FROM block_instances bi \
             JOIN context x ON bi.parentcontextid = x.id \
             JOIN course c ON c.id = x.instanceid \
             JOIN course_categories cc ON cc.id = c.category \
             WHERE bi.blockname = ?1 \
             ORDER BY bi.id",
        )?;
        let records = stmt
            .query_map([block_name], |row| {
                Ok(BlockSummaryRecord {
                    id: BlockId(row.get(0)?),
                    block_name: row.get(1)?,
                    course_short_name: row.get(2)?,
                    category_name: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("{} placed instances of block '{block_name}'", records.len());
        Ok(records)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
