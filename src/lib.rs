// src/lib.rs

//! _clclib_ colorizes and aligns Android `logcat` output.
//!
//! The _clc_ binary drives a [`LogcatProcessor`].
//!
//! [`LogcatProcessor`]: crate::readers::logcatprocessor::LogcatProcessor

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
