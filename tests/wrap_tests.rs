use proptest::prelude::*;
use quikcli::{chunk, line_split, ConfigError};

#[test]
fn test_hard_cut_without_whitespace() {
    assert_eq!(line_split("abc", 2).unwrap(), vec!["ab", "c"]);
}

#[test]
fn test_break_keeps_leading_whitespace() {
    assert_eq!(line_split("hello world", 7).unwrap(), vec!["hello", " world"]);
}

#[test]
fn test_whitespace_at_limit_is_split_point() {
    // the space sits exactly at index max_length
    assert_eq!(line_split("abcd efg", 4).unwrap(), vec!["abcd", " efg"]);
}

#[test]
fn test_leading_whitespace_is_never_a_split_point() {
    // a break at index 0 would emit an empty line and never progress
    assert_eq!(line_split(" abcdef", 3).unwrap(), vec![" ab", "cde", "f"]);
}

#[test]
fn test_empty_and_short_text() {
    assert_eq!(line_split("", 5).unwrap(), vec![""]);
    assert_eq!(line_split("short", 5).unwrap(), vec!["short"]);
}

#[test]
fn test_multibyte_chars_count_as_one() {
    assert_eq!(line_split("héllo wörld", 7).unwrap(), vec!["héllo", " wörld"]);
    assert_eq!(line_split("日本語テキスト", 3).unwrap(), vec!["日本語", "テキス", "ト"]);
}

#[test]
fn test_zero_length_rejected() {
    assert_eq!(line_split("abc", 0).unwrap_err(), ConfigError::ZeroLength);
    assert_eq!(chunk("abc", 0).unwrap_err(), ConfigError::ZeroLength);
}

#[test]
fn test_chunk_ignores_word_boundaries() {
    assert_eq!(chunk("ab cd ef", 3).unwrap(), vec!["ab ", "cd ", "ef"]);
    assert_eq!(chunk("", 3).unwrap(), vec![""]);
    assert_eq!(chunk("abc", 3).unwrap(), vec!["abc"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Joining the lines gives back the input: nothing dropped or duplicated.
    #[test]
    fn line_split_reconstructs_text(text in "\\PC{0,200}", max in 1usize..40) {
        let lines = line_split(&text, max).unwrap();
        prop_assert!(!lines.is_empty());
        prop_assert_eq!(lines.concat(), text);
    }

    #[test]
    fn line_split_respects_max_length(text in "[a-z ]{0,200}", max in 1usize..40) {
        let lines = line_split(&text, max).unwrap();
        for line in &lines {
            prop_assert!(line.chars().count() <= max);
        }
        // only the last line may be empty, and only for empty input
        for line in &lines[..lines.len() - 1] {
            prop_assert!(!line.is_empty());
        }
    }

    #[test]
    fn chunk_reconstructs_text(text in "\\PC{0,120}", size in 1usize..20) {
        let chunks = chunk(&text, size).unwrap();
        prop_assert!(!chunks.is_empty());
        for piece in &chunks[..chunks.len() - 1] {
            prop_assert_eq!(piece.chars().count(), size);
        }
        prop_assert_eq!(chunks.concat(), text);
    }
}
