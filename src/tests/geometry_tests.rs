// src/tests/geometry_tests.rs

//! tests for `geometry.rs`

#![allow(non_snake_case)]

use ::test_case::test_case;

use crate::common::{Width, HEIGHT_DEFAULT, WIDTH_DEFAULT};
use crate::readers::geometry::{GeometrySource, TerminalGeometry};
use crate::readers::logcatprocessor::LogcatProcessor;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn test_TerminalGeometry_default() {
    let geometry = TerminalGeometry::default();
    assert_eq!(geometry.width, WIDTH_DEFAULT);
    assert_eq!(geometry.height, HEIGHT_DEFAULT);
    assert_eq!(geometry, TerminalGeometry::new(80, 24));
}

#[test_case(None, 100; "keep")]
#[test_case(Some(40), 40; "replace")]
#[test_case(Some(1), 1; "one")]
fn test_TerminalGeometry_with_width(width: Option<Width>, expected: Width) {
    let geometry = TerminalGeometry::new(100, 50).with_width(width);
    assert_eq!(geometry.width, expected);
    assert_eq!(geometry.height, 50);
}

#[test]
fn test_TerminalGeometry_from_terminal() {
    // the test harness stdout may or may not be a terminal
    let geometry = TerminalGeometry::from_terminal();
    assert_ne!(geometry.width, 0);
    assert_ne!(geometry.height, 0);
}

#[test]
fn test_GeometrySource_queried_by_processor() {
    let geometry = TerminalGeometry::new(132, 43);
    assert_eq!(geometry.geometry(), geometry);
    let processor = LogcatProcessor::new(&geometry);
    assert_eq!(processor.geometry(), &geometry);
}
