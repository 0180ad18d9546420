use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::atoms::glyph::display_width;

/// The textual wrapper used to comment out a line for one filetype,
/// e.g. `//` alone or `/*` with `*/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
    prefix: String,
    suffix: Option<String>,
}

impl CommentStyle {
    /// Build a style from explicit tokens. Returns `None` for an empty prefix.
    pub fn new(prefix: &str, suffix: Option<&str>) -> Option<Self> {
        if prefix.is_empty() {
            return None;
        }
        Some(Self {
            prefix: prefix.to_string(),
            suffix: suffix.filter(|s| !s.is_empty()).map(String::from),
        })
    }

    /// Parse a style variable value such as `"//"` or `"/* */"`.
    ///
    /// Tokens are whitespace separated: the first is the prefix, the second
    /// (if any) the suffix. Anything after the second token is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let mut tokens = value.split_whitespace();
        let prefix = tokens.next()?;
        let suffix = tokens.next();
        Self::new(prefix, suffix)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Prefix length in glyphs.
    pub fn prefix_len(&self) -> usize {
        self.prefix.graphemes(true).count()
    }

    /// Suffix length in glyphs, 0 when there is no suffix.
    pub fn suffix_len(&self) -> usize {
        self.suffix
            .as_deref()
            .map(|s| s.graphemes(true).count())
            .unwrap_or(0)
    }

    /// Prefix width in display columns.
    pub fn prefix_width(&self) -> usize {
        display_width(&self.prefix)
    }

    /// Suffix width in display columns, 0 when there is no suffix.
    pub fn suffix_width(&self) -> usize {
        self.suffix.as_deref().map(display_width).unwrap_or(0)
    }

    /// Shortest visual width a line can have and still count as commented.
    pub fn min_commented_width(&self) -> usize {
        self.prefix_width() + self.suffix_width() + 2
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suffix {
            Some(suffix) => write!(f, "{} {}", self.prefix, suffix),
            None => write!(f, "{}", self.prefix),
        }
    }
}

/// Whether a line already carries the canonical comment wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Commented,
    NotCommented,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Commented => "commented",
            Classification::NotCommented => "not commented",
        }
    }
}
