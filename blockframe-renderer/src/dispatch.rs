//! Outward-facing render operations.
//!
//! Each operation is a thin sequence: resolve inputs, produce the payload
//! model, delegate to the template engine, wrap or emit. No error
//! recovery; any retrieval or templating failure propagates to the host.

use std::io::Write;

use blockframe_core::{
    BlockSummaryRecord, BlockViewContext, Capabilities, CapabilityChecker, DataStore, Localizer,
};

use crate::builder::{BlockContentBuilder, PageUrls};
use crate::context::ViewPageModel;
use crate::engine::{PageKind, TemplateEngine};
use crate::error::RenderError;
use crate::frame::PageFrame;
use crate::table::block_summary_table;

/// Orchestrates the three render operations over injected collaborators.
pub struct RenderDispatch<'a> {
    engine: &'a TemplateEngine,
    frame: &'a dyn PageFrame,
    store: &'a dyn DataStore,
    strings: &'a dyn Localizer,
    capabilities: &'a dyn CapabilityChecker,
    urls: PageUrls,
}

impl<'a> RenderDispatch<'a> {
    pub fn new(
        engine: &'a TemplateEngine,
        frame: &'a dyn PageFrame,
        store: &'a dyn DataStore,
        strings: &'a dyn Localizer,
        capabilities: &'a dyn CapabilityChecker,
    ) -> Self {
        RenderDispatch {
            engine,
            frame,
            store,
            strings,
            capabilities,
            urls: PageUrls::default(),
        }
    }

    /// Replace the default page routes used in generated links.
    pub fn with_urls(mut self, urls: PageUrls) -> Self {
        self.urls = urls;
        self
    }

    /// Render the standalone view widget page, framed.
    pub fn render_view(&self, ctx: &BlockViewContext) -> Result<String, RenderError> {
        let model = ViewPageModel::from_context(ctx, self.strings);
        let mut output = self.frame.header();
        output.push_str(&self.engine.render(PageKind::View, &model)?);
        output.push_str(&self.frame.footer());
        Ok(output)
    }

    /// Render a block's body content.
    ///
    /// Returns the body fragment only; the hosting page frames block
    /// bodies itself. Capabilities are resolved here, per block instance.
    pub fn render_block_content(&self, ctx: &BlockViewContext) -> Result<String, RenderError> {
        let caps = Capabilities::resolve(self.capabilities, ctx.block_id);
        let model = BlockContentBuilder::new(self.store, self.strings)
            .with_urls(self.urls.clone())
            .build(ctx, &caps)?;
        self.engine.render(PageKind::BlockContent, &model)
    }

    /// Render the full table page and emit it directly to `out`.
    pub fn render_table_page(
        &self,
        records: &[BlockSummaryRecord],
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let table = block_summary_table(records, self.strings);
        let body = self.engine.render(PageKind::TablePage, &table)?;

        out.write_all(self.frame.header().as_bytes())
            .map_err(RenderError::Output)?;
        out.write_all(body.as_bytes()).map_err(RenderError::Output)?;
        out.write_all(self.frame.footer().as_bytes())
            .map_err(RenderError::Output)?;
        log::info!("table page emitted: {} rows", table.rows.len());
        Ok(())
    }
}
