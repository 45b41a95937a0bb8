// src/printer/colors.rs

//! ANSI SGR escape sequences for the eight base terminal colors.
//!
//! Manually derived from <https://en.wikipedia.org/wiki/ANSI_escape_code#Codes>.

use std::fmt;

/// Escape sequence prefix, "Control Sequence Introducer".
pub const CSI: &str = "\x1b[";
/// Escape sequence suffix for SGR (Select Graphic Rendition).
pub const SGR_END: &str = "m";
/// Separator between SGR codes.
pub const SGR_SEP: &str = ";";

/// The eight base ANSI colors, numbered as in the SGR codes `30`–`37`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AnsiColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl AnsiColor {
    #[inline(always)]
    pub const fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Conversion for printing via `termcolor`, e.g. the `--summary` report.
impl From<AnsiColor> for termcolor::Color {
    fn from(color: AnsiColor) -> Self {
        match color {
            AnsiColor::Black => termcolor::Color::Black,
            AnsiColor::Red => termcolor::Color::Red,
            AnsiColor::Green => termcolor::Color::Green,
            AnsiColor::Yellow => termcolor::Color::Yellow,
            AnsiColor::Blue => termcolor::Color::Blue,
            AnsiColor::Magenta => termcolor::Color::Magenta,
            AnsiColor::Cyan => termcolor::Color::Cyan,
            AnsiColor::White => termcolor::Color::White,
        }
    }
}

/// A request for one escape sequence.
///
/// Any combination is legal. If `reset` is set then all other fields are
/// ignored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FormatRequest {
    pub fg: Option<AnsiColor>,
    pub bg: Option<AnsiColor>,
    /// use the bright background codes `100`–`107`
    pub bright: bool,
    pub bold: bool,
    pub dim: bool,
    pub reset: bool,
}

impl FormatRequest {
    pub fn new() -> FormatRequest {
        FormatRequest::default()
    }

    pub fn fg(mut self, color: AnsiColor) -> FormatRequest {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: AnsiColor) -> FormatRequest {
        self.bg = Some(color);
        self
    }

    pub fn bright(mut self, bright: bool) -> FormatRequest {
        self.bright = bright;
        self
    }

    pub fn bold(mut self, bold: bool) -> FormatRequest {
        self.bold = bold;
        self
    }

    pub fn dim(mut self, dim: bool) -> FormatRequest {
        self.dim = dim;
        self
    }

    pub fn reset(mut self, reset: bool) -> FormatRequest {
        self.reset = reset;
        self
    }

    /// The SGR codes, in printed order.
    ///
    /// Intensity is always last and exactly one of bold `1`, dim `2`, or
    /// normal `22`, in that precedence.
    pub fn codes(&self) -> Vec<String> {
        if self.reset {
            return vec![String::from("0")];
        }
        let mut codes: Vec<String> = Vec::with_capacity(3);
        if let Some(fg) = self.fg {
            codes.push(format!("3{}", fg.code()));
        }
        if let Some(bg) = self.bg {
            if self.bright {
                codes.push(format!("10{}", bg.code()));
            } else {
                codes.push(format!("4{}", bg.code()));
            }
        }
        if self.bold {
            codes.push(String::from("1"));
        } else if self.dim {
            codes.push(String::from("2"));
        } else {
            codes.push(String::from("22"));
        }

        codes
    }

    /// The complete escape sequence, e.g. `"\x1b[34;22m"`.
    pub fn format(&self) -> String {
        format!("{}{}{}", CSI, self.codes().join(SGR_SEP), SGR_END)
    }
}

impl fmt::Display for FormatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Escape sequence for foreground `color` at normal intensity.
pub fn format_fg(color: AnsiColor) -> String {
    FormatRequest::new().fg(color).format()
}

/// Escape sequence to reset all attributes.
pub fn format_reset() -> String {
    FormatRequest::new().reset(true).format()
}
