//! Localized string lookup.
//!
//! The hosting framework owns translation; this layer names the strings it
//! renders and ships an English catalog. Catalog values may contain a
//! single `{a}` placeholder filled by [`Localizer::text_arg`].

/// Every user-visible string this layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    /// Display name substitute for anonymous/guest access.
    Guest,
    /// Welcome message; `{a}` is the user's display name.
    WelcomeUser,
    /// Label of the standalone view page link.
    ViewLink,
    /// Label of the popup page link.
    PopupLink,
    /// Label of the table manager page link.
    TableLink,
    /// Label shown next to the last course access time; `{a}` is the time.
    LastAccess,
    /// Table header: block instance id.
    BlockIdHeader,
    /// Table header: block name.
    BlockNameHeader,
    /// Table header: course short name.
    CourseHeader,
    /// Table header: category name.
    CategoryHeader,
}

/// Seam for the host's localized string lookup.
pub trait Localizer {
    /// The catalog value for `key` in the active language.
    fn text(&self, key: StringKey) -> String;

    /// The catalog value for `key` with `{a}` replaced by `arg`.
    fn text_arg(&self, key: StringKey, arg: &str) -> String {
        self.text(key).replace("{a}", arg)
    }
}

/// The shipped English catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStrings;

impl Localizer for EnglishStrings {
    fn text(&self, key: StringKey) -> String {
        let s = match key {
            StringKey::Guest => "Guest",
            StringKey::WelcomeUser => "Welcome {a}",
            StringKey::ViewLink => "View page",
            StringKey::PopupLink => "Block details",
            StringKey::TableLink => "Table manager",
            StringKey::LastAccess => "Last course access: {a}",
            StringKey::BlockIdHeader => "Block id",
            StringKey::BlockNameHeader => "Block name",
            StringKey::CourseHeader => "Course",
            StringKey::CategoryHeader => "Category",
        };
        s.to_string()
    }
}
