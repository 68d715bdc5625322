// crates/ignore_markers/src/options.rs

use crate::{DEFAULT_NEXT_LINE, DEFAULT_REGION_END, DEFAULT_REGION_START};

/// Caller-facing marker configuration.
///
/// Any marker left as `None` falls back to its default literal. Nothing here
/// is validated: an empty marker is accepted and simply never matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IgnoreOptions {
    /// Line that starts an ignored region.
    pub region_start: Option<String>,
    /// Line that ends an ignored region.
    pub region_end: Option<String>,
    /// Line that drops itself and the line after it.
    pub next_line: Option<String>,
    /// Take the indent to strip after a removed region from the next kept
    /// line instead of from the closing marker.
    pub indent_from_following_line: bool,
}

impl Default for IgnoreOptions {
    fn default() -> Self {
        Self {
            region_start: None,
            region_end: None,
            next_line: None,
            indent_from_following_line: true,
        }
    }
}

impl IgnoreOptions {
    pub fn with_region_start(mut self, marker: impl Into<String>) -> Self {
        self.region_start = Some(marker.into());
        self
    }

    pub fn with_region_end(mut self, marker: impl Into<String>) -> Self {
        self.region_end = Some(marker.into());
        self
    }

    pub fn with_next_line(mut self, marker: impl Into<String>) -> Self {
        self.next_line = Some(marker.into());
        self
    }

    pub fn with_indent_from_following_line(mut self, enabled: bool) -> Self {
        self.indent_from_following_line = enabled;
        self
    }

    pub fn region_start(&self) -> &str {
        self.region_start.as_deref().unwrap_or(DEFAULT_REGION_START)
    }

    pub fn region_end(&self) -> &str {
        self.region_end.as_deref().unwrap_or(DEFAULT_REGION_END)
    }

    pub fn next_line(&self) -> &str {
        self.next_line.as_deref().unwrap_or(DEFAULT_NEXT_LINE)
    }

    /// True when every marker is the default one.
    pub fn uses_default_markers(&self) -> bool {
        self.region_start() == DEFAULT_REGION_START
            && self.region_end() == DEFAULT_REGION_END
            && self.next_line() == DEFAULT_NEXT_LINE
    }
}
