// src/tests/mod.rs

//! Tests for _clclib_.
//!
//! Tests are placed at `src/tests/`, inside the `clclib`, so they have
//! crate-internal visibility.

pub mod colors_tests;
pub mod geometry_tests;
pub mod printers_tests;
