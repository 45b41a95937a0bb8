// src/data/mod.rs

//! The `data` module is specialized data containers for one classified
//! `logcat` line.
//!
//! ## Definitions of data
//!
//! A "log line" is one raw line of `logcat` output, e.g.
//!
//! ```text
//! 08-29 11:32:28.839 D/dalvikvm( 7497): GC_CONCURRENT freed 1976K
//! ```
//!
//! A [`LogLine`] is the fields extracted from it by one [`LineGrammar`].
//!
//! [`LogLine`]: crate::data::logline::LogLine
//! [`LineGrammar`]: crate::data::logline::LineGrammar

pub mod logline;
