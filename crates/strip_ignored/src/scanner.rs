// crates/strip_ignored/src/scanner.rs

use ignore_markers::MarkerSet;

/// Where the scanner is relative to the markers seen so far.
///
/// There is no nesting depth: a region-start seen while already inside a
/// region is just more ignored content, and the first region-end closes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Normal,
    InRegion,
    /// The next line is dropped, whatever it is.
    SkipNext,
}

/// Per-call line counts, mainly for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub kept_lines: usize,
    pub marker_lines: usize,
    pub ignored_lines: usize,
    /// Input ended while a region was still open.
    pub unterminated_region: bool,
    /// Input ended right after a next-line marker.
    pub dangling_next_line: bool,
}

/// Line-by-line state machine that drops ignored lines and re-indents the
/// rest.
///
/// Feed it lines without their terminators, then call [`Scanner::finish`].
pub struct Scanner<'m> {
    markers: &'m MarkerSet,
    state: ScanState,
    baseline: String,
    /// Take the baseline from the next kept line.
    rebase_pending: bool,
    /// Indent of the last next-line marker.
    skip_marker_indent: String,
    kept: Vec<String>,
    summary: ScanSummary,
}

impl<'m> Scanner<'m> {
    pub fn new(markers: &'m MarkerSet) -> Self {
        Self {
            markers,
            state: ScanState::Normal,
            baseline: String::new(),
            rebase_pending: false,
            skip_marker_indent: String::new(),
            kept: Vec::new(),
            summary: ScanSummary::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// The indent currently stripped from kept lines.
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn feed(&mut self, line: &str) {
        match self.state {
            ScanState::Normal => {
                if self.markers.region_start.matches(line) {
                    self.transition(ScanState::InRegion);
                    self.summary.marker_lines += 1;
                } else if self.markers.next_line.matches(line) {
                    self.skip_marker_indent = leading_whitespace(line).to_string();
                    self.transition(ScanState::SkipNext);
                    self.summary.marker_lines += 1;
                } else {
                    self.keep(line);
                }
            }
            ScanState::InRegion => {
                if self.markers.region_end.matches(line) {
                    self.summary.marker_lines += 1;
                    self.transition(ScanState::Normal);
                    self.rebase(leading_whitespace(line));
                } else {
                    self.summary.ignored_lines += 1;
                }
            }
            ScanState::SkipNext => {
                self.summary.ignored_lines += 1;
                self.transition(ScanState::Normal);
                let indent = std::mem::take(&mut self.skip_marker_indent);
                self.rebase(&indent);
            }
        }
    }

    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            unterminated_region: self.state == ScanState::InRegion,
            dangling_next_line: self.state == ScanState::SkipNext,
            ..self.summary
        }
    }

    /// Consumes the scanner and returns the kept lines, already re-indented.
    pub fn finish(self) -> Vec<String> {
        if self.state == ScanState::InRegion {
            log::debug!("Input ended inside an ignored region; dropped the remainder");
        }
        self.kept
    }

    fn transition(&mut self, next: ScanState) {
        log::trace!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn rebase(&mut self, marker_indent: &str) {
        if self.markers.indent_from_following_line {
            self.rebase_pending = true;
        } else {
            self.baseline.clear();
            self.baseline.push_str(marker_indent);
        }
    }

    fn keep(&mut self, line: &str) {
        if self.rebase_pending {
            self.baseline.clear();
            self.baseline.push_str(leading_whitespace(line));
            self.rebase_pending = false;
        }
        // Lines that do not start with the whole baseline are left alone.
        let stripped = line.strip_prefix(self.baseline.as_str()).unwrap_or(line);
        self.kept.push(stripped.to_string());
        self.summary.kept_lines += 1;
    }
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
