// src/data/logline.rs

//! Implement [`LogLine`], the structured fields of one `logcat` line, and
//! the [`Severity`] and [`LineGrammar`] it was classified with.

use std::fmt;

use crate::common::Pid;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Severity
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Single-letter `logcat` priority.
///
/// Any other uppercase letter a grammar accepts (e.g. `F` or `S`) is kept as
/// `Unrecognized` so the line can still be printed if its tag is a known tag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Unrecognized(char),
}

impl Severity {
    /// The single letter as printed by `logcat`.
    pub const fn letter(&self) -> char {
        match self {
            Severity::Verbose => 'V',
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warn => 'W',
            Severity::Error => 'E',
            Severity::Unrecognized(c) => *c,
        }
    }

    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Severity::Unrecognized(_))
    }
}

impl From<char> for Severity {
    fn from(c: char) -> Self {
        match c {
            'V' => Severity::Verbose,
            'D' => Severity::Debug,
            'I' => Severity::Info,
            'W' => Severity::Warn,
            'E' => Severity::Error,
            _ => Severity::Unrecognized(c),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LineGrammar
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The known `logcat` line formats.
///
/// Several formats may match the same line, so they are always tried in
/// the order of [`LINE_GRAMMARS`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum LineGrammar {
    /// `D/dalvikvm( 7497): GC_CONCURRENT freed`
    Brief,
    /// `08-29 11:32:28.839 D/dalvikvm( 7497): GC_CONCURRENT freed`
    Time,
    /// `08-29 13:35:56.819  1052  1052 D StatusBar.NetworkController: mDataConnected = false`
    ThreadTime,
    /// `D 08-29 11:32:28.839             dalvikvm( 7497): GC_CONCURRENT freed`
    ///
    /// The format this program prints, so already-colorized output that was
    /// saved (sans escape codes) may be read again.
    Own,
}

/// Count of [`LineGrammar`] variants.
pub const LINE_GRAMMARS_LEN: usize = 4;

/// All [`LineGrammar`] in priority order, highest first.
pub const LINE_GRAMMARS: [LineGrammar; LINE_GRAMMARS_LEN] = [
    LineGrammar::Brief,
    LineGrammar::Time,
    LineGrammar::ThreadTime,
    LineGrammar::Own,
];

impl LineGrammar {
    /// Name as passed to `logcat -v`. `Own` has no `logcat` name.
    pub const fn name(&self) -> &'static str {
        match self {
            LineGrammar::Brief => "brief",
            LineGrammar::Time => "time",
            LineGrammar::ThreadTime => "threadtime",
            LineGrammar::Own => "self",
        }
    }

    /// Index into [`LINE_GRAMMARS`].
    pub const fn index(&self) -> usize {
        match self {
            LineGrammar::Brief => 0,
            LineGrammar::Time => 1,
            LineGrammar::ThreadTime => 2,
            LineGrammar::Own => 3,
        }
    }
}

impl fmt::Display for LineGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogLine
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The fields extracted from one classified input line.
///
/// `severity`, `tag`, and `message` are always present. `pid` and
/// `timestamp` depend on the `grammar` that matched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogLine {
    pub grammar: LineGrammar,
    pub severity: Severity,
    /// trimmed of surrounding whitespace
    pub tag: String,
    pub pid: Option<Pid>,
    /// not validated beyond the grammar's pattern
    pub timestamp: Option<String>,
    /// remainder of the line, verbatim
    pub message: String,
}

impl LogLine {
    pub fn new(
        grammar: LineGrammar,
        severity: Severity,
        tag: &str,
        pid: Option<Pid>,
        timestamp: Option<&str>,
        message: &str,
    ) -> LogLine {
        LogLine {
            grammar,
            severity,
            tag: tag.trim().to_string(),
            pid,
            timestamp: timestamp.map(String::from),
            message: message.to_string(),
        }
    }
}
