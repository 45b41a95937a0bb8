// src/readers/logcatprocessor.rs

//! Implements a [`LogcatProcessor`], the driver of reading, classifying,
//! and printing `logcat` lines.
//!
//! A `LogcatProcessor` is single-threaded. For each line read from a
//! [`LineSource`] it prints zero or one line, in the same order.
//! It stops at the end of the stream, or when an [`ExitSignal`] is raised.

use std::fmt;
use std::io::{
    ErrorKind,
    Result,
    Write,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use ::bstr::ByteSlice;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{Bytes, Count};
use crate::data::logline::{LineGrammar, LINE_GRAMMARS_LEN};
use crate::printer::printers::{color_for, PrinterLogcat};
use crate::readers::geometry::{GeometrySource, TerminalGeometry};
use crate::readers::grammar::{match_line, MatchResult};
use crate::readers::linesource::LineSource;

/// Initial capacity of the line buffer. Most `logcat` lines are shorter.
pub const LINE_CAPACITY: usize = 1024;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ExitSignal
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Shared between a signal handler and the [`LogcatProcessor`].
///
/// The processor holds the output lock while it classifies and prints one
/// line. A signal handler that calls [`ExitSignal::request_exit`] and holds
/// the returned guard until the process exits will never interrupt a
/// partially printed line.
#[derive(Debug, Default)]
pub struct ExitSignal {
    exit_requested: AtomicBool,
    output: Mutex<()>,
}

impl ExitSignal {
    pub const fn new() -> ExitSignal {
        ExitSignal {
            exit_requested: AtomicBool::new(false),
            output: Mutex::new(()),
        }
    }

    /// Set the exit flag then wait for any line being printed.
    pub fn request_exit(&self) -> MutexGuard<'_, ()> {
        defñ!();
        self.exit_requested.store(true, Ordering::SeqCst);

        self.lock_output()
    }

    pub fn is_exit_requested(&self) -> bool {
        self.exit_requested.load(Ordering::SeqCst)
    }

    /// Lock the output. A poisoned lock is still usable; it guards nothing.
    pub fn lock_output(&self) -> MutexGuard<'_, ()> {
        match self.output.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SummaryProcessor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Statistics about a [`LogcatProcessor`] run.
/// Used with CLI option `--summary`.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct SummaryProcessor {
    /// count of lines read, not including the end of the stream
    pub lines_read: Count,
    /// count of bytes read
    pub bytes_read: Count,
    /// count of lines printed
    pub lines_printed: Count,
    /// count of bytes printed, including escape sequences
    pub bytes_printed: Count,
    /// count of lines no grammar matched
    pub lines_unrecognized: Count,
    /// count of lines with a severity that has no color
    pub lines_unknown_severity: Count,
    /// count of lines matched by each grammar, indexed by
    /// [`LineGrammar::index`]
    pub grammars: [Count; LINE_GRAMMARS_LEN],
    /// did processing stop due to an [`ExitSignal`]?
    pub exit_early: bool,
}

impl SummaryProcessor {
    pub fn grammar_count(&self, grammar: LineGrammar) -> Count {
        self.grammars[grammar.index()]
    }
}

impl fmt::Debug for SummaryProcessor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SummaryProcessor")
            .field("lines_read", &self.lines_read)
            .field("bytes_read", &self.bytes_read)
            .field("lines_printed", &self.lines_printed)
            .field("bytes_printed", &self.bytes_printed)
            .field("lines_unrecognized", &self.lines_unrecognized)
            .field("lines_unknown_severity", &self.lines_unknown_severity)
            .field("grammars", &self.grammars)
            .field("exit_early", &self.exit_early)
            .finish()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogcatProcessor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// What happened to one line passed to [`LogcatProcessor::process_line`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProcessedLine {
    /// printed, contains the count of bytes printed
    Printed(usize),
    /// no grammar matched
    Unrecognized,
    /// a grammar matched but the severity has no color and the tag is not a
    /// known tag
    UnknownSeverity,
    /// end of stream
    Done,
}

/// Reads raw lines, classifies them, and prints them.
pub struct LogcatProcessor {
    geometry: TerminalGeometry,
    summary: SummaryProcessor,
}

impl fmt::Debug for LogcatProcessor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LogcatProcessor")
            .field("geometry", &self.geometry)
            .field("summary", &self.summary)
            .finish()
    }
}

impl LogcatProcessor {
    /// Create a `LogcatProcessor`. The geometry is queried once, here.
    pub fn new(geometry_source: &dyn GeometrySource) -> LogcatProcessor {
        let geometry: TerminalGeometry = geometry_source.geometry();
        defñ!("{:?}", geometry);

        LogcatProcessor {
            geometry,
            summary: SummaryProcessor::default(),
        }
    }

    pub const fn geometry(&self) -> &TerminalGeometry {
        &self.geometry
    }

    pub const fn summary(&self) -> &SummaryProcessor {
        &self.summary
    }

    /// Classify and maybe print one `raw` line, including its line
    /// terminator if any. An empty `raw` is the end of the stream.
    pub fn process_line<W: Write>(
        &mut self,
        raw: &str,
        printer: &mut PrinterLogcat<W>,
    ) -> Result<ProcessedLine> {
        let logline = match match_line(raw) {
            MatchResult::Found(logline) => logline,
            MatchResult::Skip => {
                self.summary.lines_unrecognized += 1;
                return Ok(ProcessedLine::Unrecognized);
            }
            MatchResult::Done => {
                return Ok(ProcessedLine::Done);
            }
        };
        self.summary.grammars[logline.grammar.index()] += 1;
        let color = match color_for(&logline.tag, logline.severity) {
            Some(color) => color,
            None => {
                defo!("no color for severity {:?}; skip", logline.severity);
                self.summary.lines_unknown_severity += 1;
                return Ok(ProcessedLine::UnknownSeverity);
            }
        };
        let printed: usize = printer.print_logline(&logline, color, self.geometry.width)?;
        self.summary.lines_printed += 1;
        self.summary.bytes_printed += printed as Count;

        Ok(ProcessedLine::Printed(printed))
    }

    /// Read, classify, and print every line of `source` until the end of
    /// the stream or until `signal` requests an exit.
    ///
    /// A read interrupted by a signal, or a closed output (e.g. piped to
    /// `head`), ends processing normally. Other I/O errors are returned.
    pub fn process<S, W>(
        &mut self,
        source: &mut S,
        printer: &mut PrinterLogcat<W>,
        signal: &ExitSignal,
    ) -> Result<&SummaryProcessor>
    where
        S: LineSource + ?Sized,
        W: Write,
    {
        defn!();
        let mut buffer: Bytes = Bytes::with_capacity(LINE_CAPACITY);
        loop {
            if signal.is_exit_requested() {
                defo!("exit requested before read");
                self.summary.exit_early = true;
                break;
            }
            buffer.clear();
            let count: usize = match source.read_line(&mut buffer) {
                Ok(count) => count,
                Err(err) if err.kind() == ErrorKind::Interrupted => {
                    defo!("read_line interrupted");
                    self.summary.exit_early = true;
                    break;
                }
                Err(err) => {
                    defx!("read_line error {}", err);
                    return Err(err);
                }
            };
            let _guard = signal.lock_output();
            if signal.is_exit_requested() {
                defo!("exit requested during read");
                self.summary.exit_early = true;
                break;
            }
            if count != 0 {
                self.summary.lines_read += 1;
                self.summary.bytes_read += count as Count;
            }
            let raw = buffer.to_str_lossy();
            match self.process_line(&raw, printer) {
                Ok(ProcessedLine::Done) => {
                    defo!("end of stream");
                    break;
                }
                Ok(_) => {}
                Err(err) if err.kind() == ErrorKind::BrokenPipe => {
                    defo!("output closed");
                    break;
                }
                Err(err) => {
                    defx!("process_line error {}", err);
                    return Err(err);
                }
            }
        }
        defx!("{:?}", self.summary);

        Ok(&self.summary)
    }
}
