// src/readers/geometry.rs

//! Width and height of the output terminal, queried once per run.

use std::io::IsTerminal;

use ::crossterm::terminal;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{Width, HEIGHT_DEFAULT, WIDTH_DEFAULT};

/// Size of the output terminal in columns (`width`) and rows (`height`).
///
/// Not updated if the terminal is resized during the run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TerminalGeometry {
    pub width: Width,
    pub height: Width,
}

impl Default for TerminalGeometry {
    fn default() -> Self {
        TerminalGeometry {
            width: WIDTH_DEFAULT,
            height: HEIGHT_DEFAULT,
        }
    }
}

impl TerminalGeometry {
    pub const fn new(width: Width, height: Width) -> TerminalGeometry {
        TerminalGeometry { width, height }
    }

    /// Query the terminal attached to stdout.
    ///
    /// If stdout is not a terminal, or the query fails, or the terminal
    /// reports a zero size, then return [`TerminalGeometry::default`].
    pub fn from_terminal() -> TerminalGeometry {
        defn!();
        if !std::io::stdout().is_terminal() {
            defx!("stdout is not a terminal; return default");
            return TerminalGeometry::default();
        }
        let geometry = match terminal::size() {
            Ok((0, _)) | Ok((_, 0)) => {
                defo!("terminal::size() returned a zero dimension");
                TerminalGeometry::default()
            }
            Ok((columns, rows)) => TerminalGeometry::new(columns as Width, rows as Width),
            Err(_err) => {
                defo!("terminal::size() returned error {}", _err);
                TerminalGeometry::default()
            }
        };
        defx!("{:?}", geometry);

        geometry
    }

    /// Replace the width if `width` is `Some`.
    pub fn with_width(self, width: Option<Width>) -> TerminalGeometry {
        match width {
            Some(width) => TerminalGeometry { width, ..self },
            None => self,
        }
    }
}

/// Where a [`LogcatProcessor`] gets its [`TerminalGeometry`].
///
/// [`LogcatProcessor`]: crate::readers::logcatprocessor::LogcatProcessor
pub trait GeometrySource {
    fn geometry(&self) -> TerminalGeometry;
}

/// A fixed geometry, e.g. queried by [`TerminalGeometry::from_terminal`]
/// then adjusted by CLI option `--width`, or set by tests.
impl GeometrySource for TerminalGeometry {
    fn geometry(&self) -> TerminalGeometry {
        *self
    }
}
