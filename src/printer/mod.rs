// src/printer/mod.rs

//! The `printer` module is for printing user-facing log messages
//! ([`LogLine`s]) with terminal colors, an aligned tag column, and wrapped
//! message text.
//!
//! [`LogLine`s]: crate::data::logline::LogLine

pub mod colors;
pub mod printers;
pub mod summary;
pub mod wrap;
