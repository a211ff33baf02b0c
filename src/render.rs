//! Bordered question box layout.
//!
//! ```text
//! ----------------------
//! | Header             |
//! |                    |
//! | Question text that |
//! |  wraps             |
//! |--------------------|
//! | 1 - first option   |
//! | 2 - a long option  |
//! |     label          |
//! ----------------------
//! ```
//!
//! Every line of a box is exactly `width` chars long.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::common::ConfigError;
use crate::config::{CONTENT_MARGIN, MIN_SCREEN_WIDTH};
use crate::wrap::{chunk, line_split};

/// Glyphs used to draw a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxStyle {
    /// Left and right walls.
    pub v_border: char,
    /// Top and bottom edges.
    pub h_border: char,
    /// Divider between the question and the menu.
    pub i_border: char,
}

impl Default for BoxStyle {
    fn default() -> Self {
        crate::config::PromptConfig::default().style()
    }
}

/// Columns used by the "`N - `" numbering of a menu with `option_count`
/// entries. Numbers are right-aligned to the widest one.
pub fn numbering_width(option_count: usize) -> usize {
    let mut digits = 1;
    let mut n = option_count;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits + 3
}

/// Smallest width that leaves at least one column for every region of a box
/// holding `option_count` menu entries.
pub fn box_min_width(option_count: usize) -> usize {
    if option_count == 0 {
        MIN_SCREEN_WIDTH
    } else {
        CONTENT_MARGIN + numbering_width(option_count) + 1
    }
}

/// Lay out a question box.
///
/// An empty `header` or option list is the same as none. Control characters
/// in any text are drawn as spaces.
pub fn render_box(
    style: &BoxStyle,
    query: &str,
    width: usize,
    options: Option<&[String]>,
    header: Option<&str>,
) -> Result<Vec<String>, ConfigError> {
    let options = options.filter(|o| !o.is_empty());
    let header = header.filter(|h| !h.is_empty());

    let minimum = box_min_width(options.map_or(0, |o| o.len()));
    if width < minimum {
        return Err(ConfigError::WidthTooSmall { width, minimum });
    }

    let v = style.v_border;
    let content = width - CONTENT_MARGIN;
    let edge = repeat(style.h_border, width);
    let row = |text: &str| format!("{v} {text:<content$} {v}");

    let mut lines = Vec::new();
    lines.push(edge.clone());

    if let Some(header) = header {
        for line in line_split(&printable(header), content)? {
            lines.push(row(&line));
        }
        lines.push(format!("{v}{}{v}", repeat(' ', width - 2)));
    }

    for line in line_split(&printable(query), content)? {
        lines.push(row(&line));
    }

    if let Some(options) = options {
        lines.push(format!("{v}{}{v}", repeat(style.i_border, width - 2)));
        let prefix = numbering_width(options.len());
        let digits = prefix - 3;
        let label = content - prefix;
        for (i, option) in options.iter().enumerate() {
            let chunks = chunk(&printable(option), label)?;
            let mut chunks = chunks.iter();
            if let Some(first) = chunks.next() {
                lines.push(format!("{v} {:>digits$} - {first:<label$} {v}", i + 1));
            }
            for rest in chunks {
                lines.push(format!("{v} {:prefix$}{rest:<label$} {v}", ""));
            }
        }
    }

    lines.push(edge);
    Ok(lines)
}

fn repeat(glyph: char, count: usize) -> String {
    core::iter::repeat(glyph).take(count).collect()
}

fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
