// crates/line_endings/src/lib.rs

//! Detects the line-ending layout of a piece of text and re-applies it to
//! lines produced from that text.
//!
//! Detection only looks at the first line break, so input mixing `\n` and
//! `\r\n` comes back normalized to whichever style appeared first.

/// The line terminator used by a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Sniffs the style of the first line break in `text`.
    /// Text without any `\n` is treated as `Lf`.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(idx) if text[..idx].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Line-ending style plus whether the text ended with a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineLayout {
    pub ending: LineEnding,
    pub trailing_newline: bool,
}

impl LineLayout {
    pub fn detect(text: &str) -> Self {
        Self {
            ending: LineEnding::detect(text),
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Joins `lines` with this layout's terminator.
    ///
    /// Every line is emitted with a terminator; the last one is then dropped
    /// again unless the sniffed text ended with a line break. Joining zero
    /// lines always yields an empty string.
    pub fn join<I, S>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sep = self.ending.as_str();
        let mut output = String::new();
        for line in lines {
            output.push_str(line.as_ref());
            output.push_str(sep);
        }
        if !self.trailing_newline && output.ends_with(sep) {
            output.truncate(output.len() - sep.len());
        }
        output
    }
}

/// Splits `text` into lines without their terminators.
///
/// Accepts both `\n` and `\r\n`. A trailing line break does not produce an
/// extra empty line at the end.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
}
