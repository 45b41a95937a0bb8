// src/readers/grammar.rs

//! Classify one raw `logcat` line by trying each [`LineGrammar`] in
//! priority order.
//!
//! Each grammar is a pure function from a line to an `Option<LogLine>`.
//! The first grammar to match the whole line wins; see [`LINE_GRAMMARS`].
//!
//! [`LINE_GRAMMARS`]: crate::data::logline::LINE_GRAMMARS

use std::fmt;

use ::lazy_static::lazy_static;
use ::regex::{Captures, Regex};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{CRc, NLc, Pid};
use crate::data::logline::{
    LineGrammar,
    LogLine,
    Severity,
    LINE_GRAMMARS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// regular expressions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `logcat` timestamp, e.g. `08-29 11:32:28.839`. Not validated further.
const RP_TIMESTAMP: &str = r"\d+-\d+ \d+:\d+:\d+\.\d+";

/// `S/TAG(PID): MESSAGE`
const RP_BRIEF: &str = r"^([A-Z])/([^(]+)\(\s*(\d+)\s*\): (.*)$";

lazy_static! {
    /// `TIMESTAMP[:] S/TAG(PID): MESSAGE`
    static ref RP_TIME: String = format!(
        r"^({}):?\s+([A-Z])/([^(]+)\(\s*(\d+)\s*\): (.*)$",
        RP_TIMESTAMP,
    );
    /// `TIMESTAMP PID TID S TAG: MESSAGE`
    static ref RP_THREADTIME: String = format!(
        r"^({})\s+(\d+)\s+(\d+)\s+([A-Z])\s+([^():]+?)\s*: (.*)$",
        RP_TIMESTAMP,
    );
    /// `S TIMESTAMP TAG(PID): MESSAGE`
    static ref RP_OWN: String = format!(
        r"^([A-Z])\s+({})\s+([^(]+)\(\s*(\d+)\s*\): (.*)$",
        RP_TIMESTAMP,
    );

    static ref RE_BRIEF: Regex = {
        defñ!("lazy_static! RE_BRIEF");

        Regex::new(RP_BRIEF).unwrap()
    };
    static ref RE_TIME: Regex = {
        defñ!("lazy_static! RE_TIME");

        Regex::new(RP_TIME.as_str()).unwrap()
    };
    static ref RE_THREADTIME: Regex = {
        defñ!("lazy_static! RE_THREADTIME");

        Regex::new(RP_THREADTIME.as_str()).unwrap()
    };
    static ref RE_OWN: Regex = {
        defñ!("lazy_static! RE_OWN");

        Regex::new(RP_OWN.as_str()).unwrap()
    };
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// MatchResult
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Result of [`match_line`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchResult {
    /// A grammar matched; contains the extracted fields.
    Found(LogLine),
    /// The line was not empty but no grammar matched. Print nothing, keep
    /// reading.
    Skip,
    /// The line was empty, i.e. the true end of the stream.
    Done,
}

impl MatchResult {
    /// Returns `true` if the result is [`Found`].
    ///
    /// [`Found`]: MatchResult::Found
    #[inline(always)]
    pub const fn is_found(&self) -> bool {
        matches!(*self, MatchResult::Found(_))
    }

    /// Returns `true` if the result is [`Skip`].
    ///
    /// [`Skip`]: MatchResult::Skip
    #[inline(always)]
    pub const fn is_skip(&self) -> bool {
        matches!(*self, MatchResult::Skip)
    }

    /// Returns `true` if the result is [`Done`].
    ///
    /// [`Done`]: MatchResult::Done
    #[inline(always)]
    pub const fn is_done(&self) -> bool {
        matches!(*self, MatchResult::Done)
    }

    /// Converts from `MatchResult` to [`Option<LogLine>`].
    #[inline(always)]
    pub fn ok(self) -> Option<LogLine> {
        match self {
            MatchResult::Found(logline) => Some(logline),
            MatchResult::Skip | MatchResult::Done => None,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Found(logline) => write!(f, "MatchResult::Found({})", logline.grammar),
            MatchResult::Skip => write!(f, "MatchResult::Skip"),
            MatchResult::Done => write!(f, "MatchResult::Done"),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// grammar functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The severity letter of capture group `index`. The patterns only capture
/// a single `[A-Z]`.
fn capture_severity(captures: &Captures, index: usize) -> Option<Severity> {
    captures
        .get(index)?
        .as_str()
        .chars()
        .next()
        .map(Severity::from)
}

/// The pid of capture group `index`. A pid too large for [`Pid`] is not a
/// match.
fn capture_pid(captures: &Captures, index: usize) -> Option<Pid> {
    captures
        .get(index)?
        .as_str()
        .trim()
        .parse::<Pid>()
        .ok()
}

/// Match `S/TAG(PID): MESSAGE`.
pub fn match_brief(line: &str) -> Option<LogLine> {
    let captures = RE_BRIEF.captures(line)?;
    let severity = capture_severity(&captures, 1)?;
    let pid = capture_pid(&captures, 3)?;

    Some(LogLine::new(
        LineGrammar::Brief,
        severity,
        &captures[2],
        Some(pid),
        None,
        &captures[4],
    ))
}

/// Match `TIMESTAMP[:] S/TAG(PID): MESSAGE`.
pub fn match_time(line: &str) -> Option<LogLine> {
    let captures = RE_TIME.captures(line)?;
    let severity = capture_severity(&captures, 2)?;
    let pid = capture_pid(&captures, 4)?;

    Some(LogLine::new(
        LineGrammar::Time,
        severity,
        &captures[3],
        Some(pid),
        Some(&captures[1]),
        &captures[5],
    ))
}

/// Match `TIMESTAMP PID TID S TAG: MESSAGE`. The thread id is discarded.
pub fn match_threadtime(line: &str) -> Option<LogLine> {
    let captures = RE_THREADTIME.captures(line)?;
    let pid = capture_pid(&captures, 2)?;
    let severity = capture_severity(&captures, 4)?;

    Some(LogLine::new(
        LineGrammar::ThreadTime,
        severity,
        &captures[5],
        Some(pid),
        Some(&captures[1]),
        &captures[6],
    ))
}

/// Match `S TIMESTAMP TAG(PID): MESSAGE`.
pub fn match_own(line: &str) -> Option<LogLine> {
    let captures = RE_OWN.captures(line)?;
    let severity = capture_severity(&captures, 1)?;
    let pid = capture_pid(&captures, 4)?;

    Some(LogLine::new(
        LineGrammar::Own,
        severity,
        &captures[3],
        Some(pid),
        Some(&captures[2]),
        &captures[5],
    ))
}

/// Match `line` against the one `grammar`, ignoring priority.
///
/// `line` must not have a line terminator.
pub fn match_grammar(grammar: LineGrammar, line: &str) -> Option<LogLine> {
    match grammar {
        LineGrammar::Brief => match_brief(line),
        LineGrammar::Time => match_time(line),
        LineGrammar::ThreadTime => match_threadtime(line),
        LineGrammar::Own => match_own(line),
    }
}

/// Remove all trailing `'\r'` and `'\n'`.
pub fn trim_terminator(raw: &str) -> &str {
    raw.trim_end_matches(|c| c == NLc || c == CRc)
}

/// Classify the `raw` line, including its line terminator if any.
///
/// An empty `raw` is the end of the stream and returns
/// [`MatchResult::Done`]. Otherwise each grammar of [`LINE_GRAMMARS`] is
/// tried in order and the first match returns [`MatchResult::Found`].
/// No match returns [`MatchResult::Skip`].
///
/// [`LINE_GRAMMARS`]: crate::data::logline::LINE_GRAMMARS
pub fn match_line(raw: &str) -> MatchResult {
    defn!("({:?})", raw);
    if raw.is_empty() {
        defx!("empty; return Done");
        return MatchResult::Done;
    }
    let line = trim_terminator(raw);
    for grammar in LINE_GRAMMARS.iter() {
        if let Some(logline) = match_grammar(*grammar, line) {
            defx!("matched {}; return Found", grammar);
            return MatchResult::Found(logline);
        }
    }
    defx!("no match; return Skip");

    MatchResult::Skip
}
