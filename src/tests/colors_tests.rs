// src/tests/colors_tests.rs

//! tests for `colors.rs` functions

#![allow(non_snake_case)]

use ::test_case::test_case;

use crate::printer::colors::{
    format_fg,
    format_reset,
    AnsiColor,
    FormatRequest,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case(AnsiColor::Black, 0)]
#[test_case(AnsiColor::Red, 1)]
#[test_case(AnsiColor::Green, 2)]
#[test_case(AnsiColor::Yellow, 3)]
#[test_case(AnsiColor::Blue, 4)]
#[test_case(AnsiColor::Magenta, 5)]
#[test_case(AnsiColor::Cyan, 6)]
#[test_case(AnsiColor::White, 7)]
fn test_AnsiColor_code(color: AnsiColor, expected: u8) {
    assert_eq!(color.code(), expected);
}

#[test_case(FormatRequest::new(), "\x1b[22m"; "empty")]
#[test_case(FormatRequest::new().fg(AnsiColor::Blue), "\x1b[34;22m"; "fg blue")]
#[test_case(FormatRequest::new().bg(AnsiColor::Black), "\x1b[40;22m"; "bg black")]
#[test_case(FormatRequest::new().bg(AnsiColor::Red).bright(true), "\x1b[101;22m"; "bg bright red")]
#[test_case(FormatRequest::new().fg(AnsiColor::Red).bright(true), "\x1b[31;22m"; "bright ignored without bg")]
#[test_case(FormatRequest::new().fg(AnsiColor::White).bg(AnsiColor::Black), "\x1b[37;40;22m"; "fg white bg black")]
#[test_case(FormatRequest::new().fg(AnsiColor::Green).bold(true), "\x1b[32;1m"; "bold")]
#[test_case(FormatRequest::new().fg(AnsiColor::Green).dim(true), "\x1b[32;2m"; "dim")]
#[test_case(FormatRequest::new().fg(AnsiColor::Green).bold(true).dim(true), "\x1b[32;1m"; "bold over dim")]
#[test_case(FormatRequest::new().reset(true), "\x1b[0m"; "reset")]
#[test_case(
    FormatRequest::new().fg(AnsiColor::Red).bg(AnsiColor::Cyan).bright(true).bold(true).reset(true),
    "\x1b[0m";
    "reset ignores everything else"
)]
fn test_FormatRequest_format(request: FormatRequest, expected: &str) {
    assert_eq!(request.format(), expected);
    assert_eq!(request.to_string(), expected);
}

#[test]
fn test_FormatRequest_codes_intensity_last() {
    let codes = FormatRequest::new()
        .fg(AnsiColor::Yellow)
        .bg(AnsiColor::Blue)
        .dim(true)
        .codes();
    assert_eq!(codes, vec!["33", "44", "2"]);
}

#[test]
fn test_format_fg() {
    assert_eq!(format_fg(AnsiColor::Cyan), "\x1b[36;22m");
}

#[test]
fn test_format_reset() {
    assert_eq!(format_reset(), "\x1b[0m");
}

#[test]
fn test_AnsiColor_into_termcolor() {
    let color: termcolor::Color = AnsiColor::Magenta.into();
    assert_eq!(color, termcolor::Color::Magenta);
}
