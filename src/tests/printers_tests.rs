// src/tests/printers_tests.rs

//! tests for `src/printer/printers.rs`

#![allow(non_snake_case)]

use ::test_case::test_case;

use crate::common::{HEADER_SIZE, TAG_WIDTH};
use crate::data::logline::{LineGrammar, LogLine, Severity};
use crate::printer::colors::AnsiColor;
use crate::printer::printers::{
    color_for,
    header_size,
    is_known_tag,
    pid_column,
    render_logline,
    severity_color,
    tag_column,
    ColorChoice,
    PrinterLogcat,
    KNOWN_TAGS,
    KNOWN_TAG_COLOR,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn logline_brief() -> LogLine {
    LogLine::new(
        LineGrammar::Brief,
        Severity::Debug,
        "dalvikvm",
        Some(7497),
        None,
        "GC_CONCURRENT freed",
    )
}

fn logline_time() -> LogLine {
    LogLine::new(
        LineGrammar::Time,
        Severity::Debug,
        "dalvikvm",
        Some(7497),
        Some("08-29 11:32:28.839"),
        "GC_CONCURRENT freed 1976K",
    )
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// color policy
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case(Severity::Verbose, Some(AnsiColor::White))]
#[test_case(Severity::Debug, Some(AnsiColor::Blue))]
#[test_case(Severity::Info, Some(AnsiColor::Green))]
#[test_case(Severity::Warn, Some(AnsiColor::Yellow))]
#[test_case(Severity::Error, Some(AnsiColor::Red))]
#[test_case(Severity::Unrecognized('F'), None)]
fn test_severity_color(severity: Severity, expected: Option<AnsiColor>) {
    assert_eq!(severity_color(severity), expected);
}

#[test_case("dalvikvm", true)]
#[test_case("Process", true)]
#[test_case("ActivityManager", true)]
#[test_case("ActivityThread", true)]
#[test_case("  ActivityThread ", true; "untrimmed")]
#[test_case("activitymanager", false; "case sensitive")]
#[test_case("ActivityManagerService", false)]
#[test_case("", false; "empty")]
fn test_is_known_tag(tag: &str, expected: bool) {
    assert_eq!(is_known_tag(tag), expected);
}

#[test]
fn test_color_for_known_tag_ignores_severity() {
    for tag in KNOWN_TAGS.iter() {
        for c in ['V', 'D', 'I', 'W', 'E', 'F'] {
            assert_eq!(color_for(tag, Severity::from(c)), Some(KNOWN_TAG_COLOR), "{} {}", tag, c);
        }
    }
    assert_eq!(KNOWN_TAG_COLOR, AnsiColor::Cyan);
}

#[test_case("Foo", Severity::Error, Some(AnsiColor::Red))]
#[test_case("Foo", Severity::Info, Some(AnsiColor::Green))]
#[test_case("Foo", Severity::Unrecognized('A'), None)]
fn test_color_for_other_tag(tag: &str, severity: Severity, expected: Option<AnsiColor>) {
    assert_eq!(color_for(tag, severity), expected);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// renderer
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case("dalvikvm", "            dalvikvm"; "short")]
#[test_case("", "                    "; "empty")]
#[test_case("ABCDEFGHIJKLMNOPQRST", "ABCDEFGHIJKLMNOPQRST"; "exact")]
#[test_case("StatusBar.NetworkController", "ar.NetworkController"; "long keeps rightmost")]
#[test_case("ñandú-ñandú-ñandú-ñandú", "dú-ñandú-ñandú-ñandú"; "multi-byte")]
fn test_tag_column(tag: &str, expected: &str) {
    let column = tag_column(tag);
    assert_eq!(column, expected);
    assert_eq!(column.chars().count(), TAG_WIDTH);
}

#[test_case(Some(7497), " 7497")]
#[test_case(Some(1), "    1")]
#[test_case(Some(123456), "123456"; "wider than column")]
#[test_case(None, "     ")]
fn test_pid_column(pid: Option<u64>, expected: &str) {
    assert_eq!(pid_column(pid), expected);
}

#[test]
fn test_header_size() {
    assert_eq!(HEADER_SIZE, 31);
    assert_eq!(header_size(&logline_brief()), 31);
    assert_eq!(header_size(&logline_time()), 31 + 18 + 1);
}

#[test]
fn test_render_logline_brief_color() {
    let rendered = render_logline(&logline_brief(), AnsiColor::Cyan, 80, true);
    assert_eq!(
        rendered,
        "\x1b[36;22mD             dalvikvm( 7497): GC_CONCURRENT freed\x1b[0m"
    );
}

#[test]
fn test_render_logline_brief_nocolor() {
    let rendered = render_logline(&logline_brief(), AnsiColor::Cyan, 80, false);
    assert_eq!(rendered, "D             dalvikvm( 7497): GC_CONCURRENT freed");
}

#[test]
fn test_render_logline_time() {
    let rendered = render_logline(&logline_time(), AnsiColor::Cyan, 80, false);
    assert_eq!(
        rendered,
        "D 08-29 11:32:28.839             dalvikvm( 7497): GC_CONCURRENT freed 1976K"
    );
}

#[test]
fn test_render_logline_threadtime_long_tag() {
    let logline = LogLine::new(
        LineGrammar::ThreadTime,
        Severity::Debug,
        "StatusBar.NetworkController",
        Some(1052),
        Some("08-29 13:35:56.819"),
        "mDataConnected = false",
    );
    let rendered = render_logline(&logline, AnsiColor::Blue, 80, true);
    assert_eq!(
        rendered,
        "\x1b[34;22mD 08-29 13:35:56.819 ar.NetworkController( 1052): mDataConnected = false\x1b[0m"
    );
}

#[test]
fn test_render_logline_no_pid() {
    let logline = LogLine::new(LineGrammar::Brief, Severity::Error, "Foo", None, None, "boom");
    let rendered = render_logline(&logline, AnsiColor::Red, 80, false);
    assert_eq!(rendered, "E                  Foo(     ): boom");
}

#[test]
fn test_render_logline_wrapped() {
    let logline = LogLine::new(
        LineGrammar::Brief,
        Severity::Info,
        "foo",
        Some(1),
        None,
        "abcdefghijklmnopqrst",
    );
    let rendered = render_logline(&logline, AnsiColor::Green, 40, false);
    let indent = " ".repeat(31);
    let expected = format!(
        "I                  foo(    1): abcdefghi\n{}jklmnopqr\n{}st",
        indent, indent,
    );
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_logline_wrapped_timestamp() {
    let rendered = render_logline(&logline_time(), AnsiColor::Cyan, 60, true);
    let indent = " ".repeat(50);
    let expected = format!(
        "\x1b[36;22mD 08-29 11:32:28.839             dalvikvm( 7497): GC_CONCURR\n{}ENT freed \n{}1976K\x1b[0m",
        indent, indent,
    );
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_logline_narrow_terminal_no_wrap() {
    let rendered = render_logline(&logline_time(), AnsiColor::Cyan, 20, false);
    assert!(!rendered.contains('\n'), "{:?}", rendered);
    assert!(rendered.ends_with("GC_CONCURRENT freed 1976K"), "{:?}", rendered);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PrinterLogcat
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_PrinterLogcat_new() {
    let printer = PrinterLogcat::new(ColorChoice::Never);
    assert!(!printer.do_color());
    let printer = PrinterLogcat::new(ColorChoice::Always);
    assert!(printer.do_color());
}

#[test]
fn test_PrinterLogcat_print_logline() {
    let mut printer = PrinterLogcat::from_writer(Vec::<u8>::new(), true);
    let printed = printer
        .print_logline(&logline_brief(), AnsiColor::Cyan, 80)
        .unwrap();
    let expected = "\x1b[36;22mD             dalvikvm( 7497): GC_CONCURRENT freed\x1b[0m\n";
    assert_eq!(printed, expected.len());
    assert_eq!(String::from_utf8(printer.into_inner()).unwrap(), expected);
}

#[test]
fn test_PrinterLogcat_print_logline_twice() {
    let mut printer = PrinterLogcat::from_writer(Vec::<u8>::new(), false);
    printer.print_logline(&logline_brief(), AnsiColor::Cyan, 80).unwrap();
    printer.print_logline(&logline_time(), AnsiColor::Cyan, 80).unwrap();
    let output = String::from_utf8(printer.get_ref().clone()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "D             dalvikvm( 7497): GC_CONCURRENT freed",
            "D 08-29 11:32:28.839             dalvikvm( 7497): GC_CONCURRENT freed 1976K",
        ]
    );
}
