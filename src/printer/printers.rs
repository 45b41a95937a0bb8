// src/printer/printers.rs

//! Specialized printer struct [`PrinterLogcat`], the color policy
//! [`color_for`], and the line renderer [`render_logline`] for printing
//! [`LogLine`s].
//!
//! [`LogLine`s]: crate::data::logline::LogLine

use std::io::{
    ErrorKind,
    Result,
    Write, // for `std::io::Stdout.flush`
};

#[doc(hidden)]
pub use ::termcolor::{ColorChoice, StandardStream, WriteColor};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{
    Width,
    HEADER_SIZE,
    NLu8a,
    PID_WIDTH,
    TAG_WIDTH,
};
use crate::data::logline::{LogLine, Severity};
use crate::de_err;
use crate::printer::colors::{format_fg, format_reset, AnsiColor};
use crate::printer::wrap::indent_wrap;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Color of each recognized [`Severity`], by letter.
pub const SEVERITY_COLORS: [(char, AnsiColor); 5] = [
    ('V', AnsiColor::White),
    ('D', AnsiColor::Blue),
    ('I', AnsiColor::Green),
    ('W', AnsiColor::Yellow),
    ('E', AnsiColor::Red),
];

/// Tags that are always printed in [`KNOWN_TAG_COLOR`].
pub const KNOWN_TAGS: [&str; 4] = [
    "dalvikvm",
    "Process",
    "ActivityManager",
    "ActivityThread",
];

/// [`AnsiColor`] of [`KNOWN_TAGS`], overrides the severity color.
pub const KNOWN_TAG_COLOR: AnsiColor = AnsiColor::Cyan;

/// Color of some user-facing error messages.
pub const COLOR_ERROR: AnsiColor = AnsiColor::Red;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// color policy
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Color of `severity` from [`SEVERITY_COLORS`]. `None` for
/// [`Severity::Unrecognized`].
pub fn severity_color(severity: Severity) -> Option<AnsiColor> {
    if !severity.is_recognized() {
        return None;
    }
    let letter = severity.letter();
    SEVERITY_COLORS
        .iter()
        .find(|(letter_, _)| *letter_ == letter)
        .map(|(_, color)| *color)
}

/// Is the trimmed `tag` one of [`KNOWN_TAGS`]?
pub fn is_known_tag(tag: &str) -> bool {
    let tag = tag.trim();
    KNOWN_TAGS.iter().any(|known| *known == tag)
}

/// The display color of a line with `tag` and `severity`.
///
/// A known tag is always [`KNOWN_TAG_COLOR`] regardless of `severity`.
/// Otherwise the severity color. `None` if `severity` has no color; the
/// caller should skip the line.
pub fn color_for(tag: &str, severity: Severity) -> Option<AnsiColor> {
    if is_known_tag(tag) {
        return Some(KNOWN_TAG_COLOR);
    }

    severity_color(severity)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// renderer
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The rightmost [`TAG_WIDTH`] characters of `tag`, right-justified to
/// `TAG_WIDTH`.
pub fn tag_column(tag: &str) -> String {
    let count: usize = tag.chars().count();
    let tag_: String = tag.chars().skip(count.saturating_sub(TAG_WIDTH)).collect();

    format!("{:>width$}", tag_, width = TAG_WIDTH)
}

/// `pid` right-justified to [`PID_WIDTH`], or blank.
pub fn pid_column(pid: Option<crate::common::Pid>) -> String {
    match pid {
        Some(pid) => format!("{:>width$}", pid, width = PID_WIDTH),
        None => " ".repeat(PID_WIDTH),
    }
}

/// Indent of wrapped message lines for `logline`; [`HEADER_SIZE`] plus the
/// timestamp and its space.
pub fn header_size(logline: &LogLine) -> Width {
    match &logline.timestamp {
        Some(timestamp) => HEADER_SIZE + timestamp.chars().count() + 1,
        None => HEADER_SIZE,
    }
}

/// Render one output line, without a line terminator.
///
/// `S TIMESTAMP                  TAG(  PID): MESSAGE`
///
/// The message is wrapped to `width`. If `do_color` then the line begins with
/// the foreground escape of `color` and ends with the reset escape.
pub fn render_logline(
    logline: &LogLine,
    color: AnsiColor,
    width: Width,
    do_color: bool,
) -> String {
    let mut buffer = String::with_capacity(HEADER_SIZE + logline.message.len() + 32);
    if do_color {
        buffer.push_str(&format_fg(color));
    }
    buffer.push(logline.severity.letter());
    buffer.push(' ');
    if let Some(timestamp) = &logline.timestamp {
        buffer.push_str(timestamp);
        buffer.push(' ');
    }
    buffer.push_str(&tag_column(&logline.tag));
    buffer.push('(');
    buffer.push_str(&pid_column(logline.pid));
    buffer.push_str("): ");
    buffer.push_str(&indent_wrap(&logline.message, header_size(logline), width));
    if do_color {
        buffer.push_str(&format_reset());
    }

    buffer
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PrinterLogcat
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Aliased [`Result`] returned by [`PrinterLogcat`] functions; the count of
/// bytes printed.
///
/// [`Result`]: std::io::Result
pub type PrinterLogcatResult = Result<usize>;

/// A printer of [`LogLine`s] to a writer, usually stdout.
///
/// Each printed line is flushed so the output keeps up with a live stream.
///
/// [`LogLine`s]: crate::data::logline::LogLine
pub struct PrinterLogcat<W: Write> {
    /// the writer, e.g. a `termcolor::StandardStream` for stdout
    out: W,
    /// should printing be in color?
    do_color: bool,
}

impl PrinterLogcat<StandardStream> {
    /// Create a new `PrinterLogcat` for stdout.
    ///
    /// Color is printed if `termcolor` supports color for `color_choice`,
    /// e.g. `ColorChoice::Never` is never in color, `ColorChoice::Auto`
    /// is in color unless `TERM=dumb` or `NO_COLOR` is set.
    pub fn new(color_choice: ColorChoice) -> PrinterLogcat<StandardStream> {
        let stdout_color = StandardStream::stdout(color_choice);
        let do_color: bool = match color_choice {
            ColorChoice::Never => false,
            ColorChoice::Always | ColorChoice::AlwaysAnsi => true,
            ColorChoice::Auto => stdout_color.supports_color(),
        };
        defñ!("color_choice {:?}, do_color {}", color_choice, do_color);

        PrinterLogcat {
            out: stdout_color,
            do_color,
        }
    }
}

impl<W: Write> PrinterLogcat<W> {
    /// Create a new `PrinterLogcat` for any writer.
    pub fn from_writer(out: W, do_color: bool) -> PrinterLogcat<W> {
        PrinterLogcat { out, do_color }
    }

    pub const fn do_color(&self) -> bool {
        self.do_color
    }

    /// Reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the printer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render and print the `logline` in `color` wrapped to `width`,
    /// followed by a newline.
    pub fn print_logline(
        &mut self,
        logline: &LogLine,
        color: AnsiColor,
        width: Width,
    ) -> PrinterLogcatResult {
        let rendered: String = render_logline(logline, color, width, self.do_color);

        self.print_line(rendered.as_bytes())
    }

    /// Print `line` and a newline, then flush.
    fn print_line(&mut self, line: &[u8]) -> PrinterLogcatResult {
        for slice_ in [line, &NLu8a[..]] {
            if let Err(err) = self.out.write_all(slice_) {
                // stdout closed by the reader, e.g. `clc | head`, is not an error to report
                if err.kind() != ErrorKind::BrokenPipe {
                    de_err!("out.write_all(len {}) error {}", slice_.len(), err);
                }
                return Err(err);
            }
        }
        if let Err(err) = self.out.flush() {
            if err.kind() != ErrorKind::BrokenPipe {
                de_err!("out.flush() error {}", err);
            }
            return Err(err);
        }

        Ok(line.len() + NLu8a.len())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// other printer functions (no use of PrinterLogcat)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print colored output to terminal if possible using passed stream,
/// otherwise, print plain output.
///
/// See an example <https://docs.rs/termcolor/1.1.2/termcolor/#detecting-presence-of-a-terminal>.
pub fn print_colored(
    color: AnsiColor,
    value: &[u8],
    out: &mut StandardStream,
) -> Result<()> {
    if let Err(err) = out.set_color(termcolor::ColorSpec::new().set_fg(Some(color.into()))) {
        de_err!("print_colored: out.set_color({:?}) returned error {}", color, err);
        return Err(err);
    }
    if let Err(err) = out.write_all(value) {
        de_err!("print_colored: out.write_all(…) returned error {}", err);
        return Err(err);
    }
    if let Err(err) = out.reset() {
        de_err!("print_colored: out.reset() returned error {}", err);
        return Err(err);
    }
    out.flush()?;

    Ok(())
}

/// Print colored output to terminal on stderr.
pub fn print_colored_stderr(
    color: AnsiColor,
    color_choice_opt: Option<ColorChoice>,
    value: &[u8],
) -> Result<()> {
    let choice: ColorChoice = color_choice_opt.unwrap_or(ColorChoice::Auto);
    let mut stderr = StandardStream::stderr(choice);
    let _stdout_lock = std::io::stdout().lock();

    print_colored(color, value, &mut stderr)
}
