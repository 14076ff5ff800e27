//! Template payload models.
//!
//! Every field a template can reference is a named field on one of these
//! structs. Capability-gated and missing-optional data are `Option`
//! fields; a `None` simply drops the section from the rendered page.

use serde::{Deserialize, Serialize};

use blockframe_core::{BlockViewContext, Localizer, StringKey};

/// A link with its localized label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub label: String,
}

/// Payload for the block body template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContentModel {
    /// CSS class applied to the heading element.
    pub heading_class: String,
    /// Localized welcome line, display name already substituted.
    pub welcome: String,
    /// Link to the standalone view page; `None` when the capability is
    /// not held.
    pub view_link: Option<Link>,
    pub popup_link: Link,
    pub table_link: Link,
    /// Localized, pre-formatted last course access line; `None` on the
    /// site front page or when the user never visited the course.
    pub last_access: Option<String>,
    /// `"{last}, {first}"` per enrolled student, store order preserved;
    /// `None` when the capability is not held.
    pub students: Option<Vec<String>>,
}

/// Payload for the standalone view page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPageModel {
    pub title: String,
    pub block_id: i64,
    pub course_id: i64,
    pub user_name: String,
}

impl ViewPageModel {
    /// Build the view page payload for one request.
    pub fn from_context(ctx: &BlockViewContext, strings: &dyn Localizer) -> Self {
        ViewPageModel {
            title: strings.text(StringKey::ViewLink),
            block_id: ctx.block_id.0,
            course_id: ctx.course_id.0,
            user_name: ctx
                .user
                .full_name()
                .unwrap_or_else(|| strings.text(StringKey::Guest)),
        }
    }
}

/// Header + rows table payload.
///
/// Invariant: every row has exactly as many cells as there are headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableTableModel {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
