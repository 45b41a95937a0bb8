// src/printer/wrap.rs

//! Re-flow a message into a fixed printed width.

use ::more_asserts::debug_assert_le;

use crate::common::{NLc, Width};

/// Split `message` into chunks of `width - indent` characters. Every chunk
/// after the first is preceded by a newline and `indent` spaces so the
/// chunks line up under the first chunk.
///
/// Chunks are a plain slice of the message; words may be split. If
/// `width - indent` is not positive then `message` is returned unchanged.
///
/// ```
/// use clclib::printer::wrap::indent_wrap;
///
/// assert_eq!(indent_wrap("abcdefgh", 2, 5), "abc\n  def\n  gh");
/// assert_eq!(indent_wrap("abcdefgh", 5, 5), "abcdefgh");
/// ```
pub fn indent_wrap(message: &str, indent: Width, width: Width) -> String {
    if width <= indent {
        return String::from(message);
    }
    let wrap_area: Width = width - indent;
    let chunks: usize = message.chars().count().div_ceil(wrap_area);
    let mut buffer = String::with_capacity(message.len() + chunks * (indent + 1));
    let mut count: Width = 0;
    for c in message.chars() {
        if count == wrap_area {
            buffer.push(NLc);
            buffer.extend(std::iter::repeat(' ').take(indent));
            count = 0;
        }
        buffer.push(c);
        count += 1;
    }
    debug_assert_le!(count, wrap_area);

    buffer
}
