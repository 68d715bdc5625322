// crates/strip_ignored/src/lib.rs

//! Removes ignore-marked lines from a code sample and outdents what is left.
//!
//! ```text
//! // acquit:ignore:start
//! setup();
//! // acquit:ignore:end
//! var x = 1;
//! ```
//!
//! becomes `var x = 1;`. See [`Scanner`] for the line-level rules.

mod scanner;

pub use ignore_markers::{IgnoreOptions, MarkerSet};
pub use scanner::{ScanState, ScanSummary, Scanner};

use line_endings::{split_lines, LineLayout};

/// Strips ignored lines from `code` using the markers in `options`.
///
/// The result keeps the line-ending style of `code` and ends with a line
/// break exactly when `code` does. Unbalanced markers are not an error.
pub fn transform(code: &str, options: &IgnoreOptions) -> String {
    let markers = MarkerSet::resolve(options);
    transform_with(code, &markers)
}

/// Same as [`transform`], with markers resolved once by the caller.
pub fn transform_with(code: &str, markers: &MarkerSet) -> String {
    transform_with_summary(code, markers).0
}

/// Same as [`transform_with`], also reporting what the scan did.
pub fn transform_with_summary(code: &str, markers: &MarkerSet) -> (String, ScanSummary) {
    let layout = LineLayout::detect(code);
    let mut scanner = Scanner::new(markers);
    for line in split_lines(code) {
        scanner.feed(line);
    }
    let summary = scanner.summary();
    log::debug!(
        "Kept {} line(s), dropped {} marker and {} ignored line(s)",
        summary.kept_lines,
        summary.marker_lines,
        summary.ignored_lines
    );
    (layout.join(scanner.finish()), summary)
}
