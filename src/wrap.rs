//! Line splitting for box content.
//!
//! Lengths are counted in `char`s. Splits never fall inside a multi-byte
//! character.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::ConfigError;

/// Split `text` into lines of at most `max_length` chars, preferring to break
/// at whitespace.
///
/// The whitespace a line was broken at starts the next line; it is not
/// dropped, so joining the lines gives back `text`. A run with no whitespace
/// is hard cut at exactly `max_length`. Empty input yields one empty line.
pub fn line_split(text: &str, max_length: usize) -> Result<Vec<String>, ConfigError> {
    if max_length == 0 {
        return Err(ConfigError::ZeroLength);
    }
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut rest = &chars[..];
    while rest.len() > max_length {
        // index 0 is never a split point: it would emit an empty line
        let split = (1..=max_length)
            .rev()
            .find(|&i| rest[i].is_whitespace())
            .unwrap_or(max_length);
        lines.push(rest[..split].iter().collect());
        rest = &rest[split..];
    }
    lines.push(rest.iter().collect());
    Ok(lines)
}

/// Slice `text` into pieces of exactly `size` chars (the last may be
/// shorter), ignoring word boundaries. Empty input yields one empty chunk.
pub fn chunk(text: &str, size: usize) -> Result<Vec<String>, ConfigError> {
    if size == 0 {
        return Err(ConfigError::ZeroLength);
    }
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Ok(alloc::vec![String::new()]);
    }
    Ok(chars.chunks(size).map(|c| c.iter().collect()).collect())
}
