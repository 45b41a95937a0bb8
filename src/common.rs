// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// general-purpose aliases
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A general-purpose counting type, typically used for internal statistics
/// (i.e. CLI option `--summary`).
pub type Count = u64;

/// Sequence of Bytes
pub type Bytes = Vec<u8>;

/// Process ID as printed by `logcat`
pub type Pid = u64;

/// A width in printed columns (characters).
pub type Width = usize;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lines
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// NewLine as char
#[allow(dead_code, non_upper_case_globals)]
pub const NLc: char = '\n';
/// Single-byte newLine char as u8
#[allow(non_upper_case_globals)]
pub const NLu8: u8 = 10;
/// Newline in a byte buffer
#[allow(non_upper_case_globals)]
pub const NLu8a: [u8; 1] = [NLu8];
/// Carriage return as char
#[allow(non_upper_case_globals)]
pub const CRc: char = '\r';

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// printed layout
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Printed width of the tag column. Longer tags keep their rightmost
/// characters.
pub const TAG_WIDTH: Width = 20;

/// Printed width of the pid column (inside the parentheses).
pub const PID_WIDTH: Width = 5;

/// Indent of wrapped message continuation lines, before accounting for a
/// timestamp.
///
/// severity letter and space, the tag column, a pid allowance of 8, and the
/// separator, e.g.
///
/// ```text
/// D 08-29 11:58:36.739 ar.NetworkController( 1052):
/// ```
///
/// The pid allowance is one column wider than the printed `( 1052): `.
pub const HEADER_SIZE: Width = 2 + TAG_WIDTH + 8 + 1;

/// Terminal width when the output is not a terminal.
pub const WIDTH_DEFAULT: Width = 80;

/// Terminal height when the output is not a terminal.
pub const HEIGHT_DEFAULT: Width = 24;

/// Default `adb` executable, found via `PATH`.
pub const ADB_DEFAULT: &str = "adb";

/// `adb` sub-command appended after user-passed arguments.
pub const ADB_LOGCAT: &str = "logcat";

