//! Domain types for the blockframe view layer.
//!
//! Identifiers are `i64` newtypes; never raw integers in signatures.
//! Everything here is ephemeral request data, created and discarded within
//! a single page render.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Id newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed identifier for a placed block instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub i64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for BlockId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A strongly-typed identifier for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub i64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for CourseId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A strongly-typed identifier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A strongly-typed identifier for a role definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub i64);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for RoleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Request context
// ---------------------------------------------------------------------------

/// The current user as seen by one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl RequestUser {
    /// `"{first} {last}"` with a single separating space, or `None` when
    /// both halves are empty (guest access, not-logged-in site pages).
    /// The space is kept even when one half is empty.
    pub fn full_name(&self) -> Option<String> {
        if self.first_name.is_empty() && self.last_name.is_empty() {
            None
        } else {
            Some(format!("{} {}", self.first_name, self.last_name))
        }
    }
}

/// Everything a block render needs to know about where it is running.
///
/// `site_id` is the id of the site front-page course; lookups that are
/// meaningless there (last course access) are guarded against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockViewContext {
    pub block_id: BlockId,
    pub course_id: CourseId,
    pub user: RequestUser,
    pub site_id: CourseId,
}

// ---------------------------------------------------------------------------
// Store projections
// ---------------------------------------------------------------------------

/// Read-only projection of a user holding a student role in a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledStudent {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

/// One placed block instance with its course and category resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummaryRecord {
    pub id: BlockId,
    pub block_name: String,
    pub course_short_name: String,
    pub category_name: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
