//! Block body content assembly — [`PageUrls`] and [`BlockContentBuilder`].

use chrono::{DateTime, Utc};

use blockframe_core::{
    BlockViewContext, Capabilities, DataStore, Localizer, StoreError, StringKey,
};

use crate::context::{BlockContentModel, Link};

/// CSS class applied to the block heading element.
pub const HEADING_CLASS: &str = "blockframe-heading";

/// Routes of the pages this block links to.
///
/// Injected configuration; defaults match the shipped page routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrls {
    pub view: String,
    pub popup: String,
    pub table: String,
}

impl Default for PageUrls {
    fn default() -> Self {
        PageUrls {
            view: "/blocks/frame/view".to_string(),
            popup: "/blocks/frame/block_data".to_string(),
            table: "/blocks/frame/tablemanager".to_string(),
        }
    }
}

/// Assembles the data needed to render a block's body.
///
/// Reads go through the injected [`DataStore`]; no writes, no retries.
/// Store failures propagate unchanged.
pub struct BlockContentBuilder<'a> {
    store: &'a dyn DataStore,
    strings: &'a dyn Localizer,
    urls: PageUrls,
}

impl<'a> BlockContentBuilder<'a> {
    pub fn new(store: &'a dyn DataStore, strings: &'a dyn Localizer) -> Self {
        BlockContentBuilder { store, strings, urls: PageUrls::default() }
    }

    /// Replace the default page routes.
    pub fn with_urls(mut self, urls: PageUrls) -> Self {
        self.urls = urls;
        self
    }

    /// Build the body payload for one request.
    ///
    /// A capability that is not held omits its section (`None`), never an
    /// error. The last-access lookup is skipped entirely on the site
    /// front page, where it is meaningless.
    pub fn build(
        &self,
        ctx: &BlockViewContext,
        caps: &Capabilities,
    ) -> Result<BlockContentModel, StoreError> {
        let name = ctx
            .user
            .full_name()
            .unwrap_or_else(|| self.strings.text(StringKey::Guest));

        let view_link = if caps.can_see_view_link {
            Some(Link {
                url: format!(
                    "{}?blockid={}&courseid={}",
                    self.urls.view, ctx.block_id, ctx.course_id
                ),
                label: self.strings.text(StringKey::ViewLink),
            })
        } else {
            None
        };

        let last_access = if ctx.course_id != ctx.site_id {
            self.store
                .last_course_access(ctx.course_id, ctx.user.id)?
                .map(|at| self.format_access(at))
        } else {
            None
        };

        let students = if caps.can_view_enrolled_students {
            let listed = self.store.enrolled_students(ctx.course_id)?;
            Some(
                listed
                    .iter()
                    .map(|s| format!("{}, {}", s.last_name, s.first_name))
                    .collect(),
            )
        } else {
            None
        };

        Ok(BlockContentModel {
            heading_class: HEADING_CLASS.to_string(),
            welcome: self.strings.text_arg(StringKey::WelcomeUser, &name),
            view_link,
            popup_link: Link {
                url: self.urls.popup.clone(),
                label: self.strings.text(StringKey::PopupLink),
            },
            table_link: Link {
                url: self.urls.table.clone(),
                label: self.strings.text(StringKey::TableLink),
            },
            last_access,
            students,
        })
    }

    fn format_access(&self, at: DateTime<Utc>) -> String {
        let formatted = at.format("%d %B %Y, %H:%M").to_string();
        self.strings.text_arg(StringKey::LastAccess, &formatted)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
