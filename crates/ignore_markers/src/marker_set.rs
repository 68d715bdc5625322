// crates/ignore_markers/src/marker_set.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::IgnoreOptions;

static DEFAULT_MARKERS: Lazy<MarkerSet> =
    Lazy::new(|| MarkerSet::resolve(&IgnoreOptions::default()));

/// Matches a line consisting of optional leading whitespace followed by a
/// marker literal and nothing else.
#[derive(Clone, Debug)]
pub enum MarkerPattern {
    Line { literal: String, regex: Regex },
    /// Empty or unusable marker; matches no line.
    Never { literal: String },
}

impl MarkerPattern {
    pub fn new(literal: &str) -> Self {
        if literal.is_empty() {
            return MarkerPattern::Never {
                literal: String::new(),
            };
        }
        let pattern = format!(r"^\s*{}$", regex::escape(literal));
        match Regex::new(&pattern) {
            Ok(regex) => MarkerPattern::Line {
                literal: literal.to_string(),
                regex,
            },
            Err(err) => {
                log::warn!("Marker {:?} will never match: {}", literal, err);
                MarkerPattern::Never {
                    literal: literal.to_string(),
                }
            }
        }
    }

    /// `line` must not carry its terminator.
    pub fn matches(&self, line: &str) -> bool {
        match self {
            MarkerPattern::Line { regex, .. } => regex.is_match(line),
            MarkerPattern::Never { .. } => false,
        }
    }

    pub fn literal(&self) -> &str {
        match self {
            MarkerPattern::Line { literal, .. } | MarkerPattern::Never { literal } => literal,
        }
    }
}

/// The resolved markers for one transform, plus the indent policy.
#[derive(Clone, Debug)]
pub struct MarkerSet {
    pub region_start: MarkerPattern,
    pub region_end: MarkerPattern,
    pub next_line: MarkerPattern,
    pub indent_from_following_line: bool,
}

impl MarkerSet {
    pub fn resolve(options: &IgnoreOptions) -> Self {
        let set = Self {
            region_start: MarkerPattern::new(options.region_start()),
            region_end: MarkerPattern::new(options.region_end()),
            next_line: MarkerPattern::new(options.next_line()),
            indent_from_following_line: options.indent_from_following_line,
        };
        log::debug!(
            "Resolved markers: start={:?} end={:?} next-line={:?} indent-from-following-line={}",
            set.region_start.literal(),
            set.region_end.literal(),
            set.next_line.literal(),
            set.indent_from_following_line
        );
        set
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        DEFAULT_MARKERS.clone()
    }
}
