//! Page frame seam.
//!
//! Header and footer markup belong to the hosting framework; full pages
//! rendered by this layer are wrapped in whatever the frame emits.

/// Seam for the host's page header/footer emission.
pub trait PageFrame {
    fn header(&self) -> String;
    fn footer(&self) -> String;
}

/// Frame with fixed markup, for hosts and tests that supply their own.
#[derive(Debug, Clone)]
pub struct StaticFrame {
    header: String,
    footer: String,
}

impl StaticFrame {
    pub fn new(header: impl Into<String>, footer: impl Into<String>) -> Self {
        StaticFrame { header: header.into(), footer: footer.into() }
    }
}

impl Default for StaticFrame {
    fn default() -> Self {
        StaticFrame::new(
            "<!doctype html>\n<html>\n<body>\n",
            "</body>\n</html>\n",
        )
    }
}

impl PageFrame for StaticFrame {
    fn header(&self) -> String {
        self.header.clone()
    }

    fn footer(&self) -> String {
        self.footer.clone()
    }
}
