//! Tera rendering engine — [`PageKind`] enum and [`TemplateEngine`].
//!
//! # Template mapping
//!
//! | Page          | Template                  |
//! |---------------|---------------------------|
//! | View          | `view.html.tera`          |
//! | Block content | `block_content.html.tera` |
//! | Table page    | `block_table.html.tera`   |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::Tera;

use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("view.html.tera", include_str!("templates/view.html.tera")),
    (
        "block_content.html.tera",
        include_str!("templates/block_content.html.tera"),
    ),
    (
        "block_table.html.tera",
        include_str!("templates/block_table.html.tera"),
    ),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    // Template names end in `.tera`, which tera's default autoescape list
    // does not cover; user-entered names must still be HTML-escaped.
    tera.autoescape_on(vec![".html.tera"]);
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// PageKind
// ---------------------------------------------------------------------------

/// The pages this layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Standalone view widget page.
    View,
    /// Block body fragment shown inside a hosting page.
    BlockContent,
    /// Full table-manager page.
    TablePage,
}

impl PageKind {
    /// All page variants in a stable order.
    pub fn all() -> &'static [PageKind] {
        &[PageKind::View, PageKind::BlockContent, PageKind::TablePage]
    }

    /// Template name to render for this page.
    pub fn template_name(&self) -> &'static str {
        match self {
            PageKind::View => "view.html.tera",
            PageKind::BlockContent => "block_content.html.tera",
            PageKind::TablePage => "block_table.html.tera",
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering pages with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults (theming hook). Template names are normalised to lowercase
/// relative paths. Create once and reuse across requests.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus
    /// any overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render `page` from the supplied payload model.
    pub fn render(&self, page: PageKind, model: &impl Serialize) -> Result<String, RenderError> {
        let ctx = tera::Context::from_serialize(model)?;
        let html = self.tera.render(page.template_name(), &ctx)?;
        log::debug!("rendered {:?}: {} bytes", page, html.len());
        Ok(html)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
