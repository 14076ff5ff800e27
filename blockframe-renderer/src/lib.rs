//! # blockframe-renderer
//!
//! Tera-based view layer for course block pages: payload models, embedded
//! templates, the block content builder, and the render dispatch.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blockframe_core::{
//!     BlockId, BlockViewContext, CourseId, EnglishStrings, RequestUser, SqliteStore, UserId,
//! };
//! use blockframe_renderer::{RenderDispatch, StaticFrame, TemplateEngine};
//!
//! # struct HostChecker;
//! # impl blockframe_core::CapabilityChecker for HostChecker {
//! #     fn has_capability(&self, _: blockframe_core::Capability, _: BlockId) -> bool { true }
//! # }
//! fn render_body(store: &SqliteStore) -> Result<String, blockframe_renderer::RenderError> {
//!     let engine = TemplateEngine::new(None)?;
//!     let frame = StaticFrame::default();
//!     let dispatch = RenderDispatch::new(&engine, &frame, store, &EnglishStrings, &HostChecker);
//!     let ctx = BlockViewContext {
//!         block_id: BlockId(7),
//!         course_id: CourseId(2),
//!         user: RequestUser {
//!             id: UserId(100),
//!             first_name: "Alice".to_string(),
//!             last_name: "Smith".to_string(),
//!         },
//!         site_id: CourseId(1),
//!     };
//!     dispatch.render_block_content(&ctx)
//! }
//! ```

pub mod builder;
pub mod context;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod frame;
pub mod table;

pub use builder::{BlockContentBuilder, PageUrls, HEADING_CLASS};
pub use context::{BlockContentModel, Link, RenderableTableModel, ViewPageModel};
pub use dispatch::RenderDispatch;
pub use engine::{PageKind, TemplateEngine};
pub use error::RenderError;
pub use frame::{PageFrame, StaticFrame};
pub use table::block_summary_table;
