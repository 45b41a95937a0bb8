// src/readers/mod.rs

//! "Readers" for _clclib_.
//!
//! ## Overview of readers
//!
//! * A [`LogcatProcessor`] reads raw lines from a [`LineSource`].
//! * Each raw line is classified by [`match_line`] into a [`LogLine`].
//! * The `LogLine` is printed by a [`PrinterLogcat`], wrapped to the
//!   width of the [`TerminalGeometry`].
//!
//! <br/>
//!
//! The _clc_ binary program uses one `LogcatProcessor` for the whole run.
//!
//! [`LogcatProcessor`]: crate::readers::logcatprocessor::LogcatProcessor
//! [`LineSource`]: crate::readers::linesource::LineSource
//! [`match_line`]: crate::readers::grammar::match_line
//! [`LogLine`]: crate::data::logline::LogLine
//! [`PrinterLogcat`]: crate::printer::printers::PrinterLogcat
//! [`TerminalGeometry`]: crate::readers::geometry::TerminalGeometry

pub mod geometry;
pub mod grammar;
pub mod linesource;
pub mod logcatprocessor;
