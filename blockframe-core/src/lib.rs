//! Blockframe core library — domain types, course data store, collaborator
//! seams.
//!
//! Public API surface:
//! - [`types`] — id newtypes, request context, store projections
//! - [`error`] — [`StoreError`]
//! - [`store`] — [`DataStore`] seam and the rusqlite-backed [`SqliteStore`]
//! - [`capability`] — block capabilities and the checker seam
//! - [`strings`] — localized string keys and the lookup seam

pub mod capability;
pub mod error;
pub mod store;
pub mod strings;
pub mod types;

pub use capability::{Capabilities, Capability, CapabilityChecker};
pub use error::StoreError;
pub use store::{DataStore, SqliteStore};
pub use strings::{EnglishStrings, Localizer, StringKey};
pub use types::{
    BlockId, BlockSummaryRecord, BlockViewContext, CourseId, EnrolledStudent, RequestUser,
    RoleId, UserId,
};
