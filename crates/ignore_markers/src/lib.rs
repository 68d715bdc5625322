// crates/ignore_markers/src/lib.rs

//! Marker strings used to hide lines from extracted code samples, and the
//! full-line matchers built from them.

mod marker_set;
mod options;

pub use marker_set::{MarkerPattern, MarkerSet};
pub use options::IgnoreOptions;

/// Opens a region of lines to drop.
pub const DEFAULT_REGION_START: &str = "// acquit:ignore:start";

/// Closes a region opened by [`DEFAULT_REGION_START`].
pub const DEFAULT_REGION_END: &str = "// acquit:ignore:end";

/// Drops itself and the single line after it.
pub const DEFAULT_NEXT_LINE: &str = "// acquit:ignore-next-line";
