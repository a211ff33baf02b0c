use proptest::prelude::*;
use quikcli::{box_min_width, numbering_width, render_box, BoxStyle, ConfigError};

fn opts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_box_layout() {
    let options = opts(&["alpha", "a very long option label"]);
    let lines = render_box(
        &BoxStyle::default(),
        "hello world",
        20,
        Some(&options),
        Some("Head"),
    )
    .unwrap();
    assert_eq!(
        lines,
        vec![
            "--------------------",
            "| Head             |",
            "|                  |",
            "| hello world      |",
            "|------------------|",
            "| 1 - alpha        |",
            "| 2 - a very long  |",
            "|     option label |",
            "--------------------",
        ]
    );
}

#[test]
fn test_question_only_wraps_at_content_width() {
    let lines = render_box(&BoxStyle::default(), "the quick brown fox", 14, None, None).unwrap();
    assert_eq!(
        lines,
        vec![
            "--------------",
            "| the quick  |",
            "|  brown fox |",
            "--------------",
        ]
    );
}

#[test]
fn test_custom_glyphs() {
    let style = BoxStyle {
        v_border: '║',
        h_border: '═',
        i_border: '─',
    };
    let options = opts(&["yes"]);
    let lines = render_box(&style, "ok?", 12, Some(&options), None).unwrap();
    assert_eq!(
        lines,
        vec![
            "════════════",
            "║ ok?      ║",
            "║──────────║",
            "║ 1 - yes  ║",
            "════════════",
        ]
    );
}

#[test]
fn test_empty_header_and_options_are_absent() {
    let plain = render_box(&BoxStyle::default(), "q", 10, None, None).unwrap();
    let empty = render_box(&BoxStyle::default(), "q", 10, Some(&[]), Some("")).unwrap();
    assert_eq!(plain, empty);
    assert_eq!(plain.len(), 3);
}

#[test]
fn test_empty_option_renders_one_row() {
    let options = opts(&["", "b"]);
    let lines = render_box(&BoxStyle::default(), "q", 12, Some(&options), None).unwrap();
    assert_eq!(lines[3], "| 1 -      |");
    assert_eq!(lines[4], "| 2 - b    |");
}

#[test]
fn test_ten_or_more_options_stay_aligned() {
    let options: Vec<String> = (1..=10).map(|i| format!("opt{}", i)).collect();
    let lines = render_box(&BoxStyle::default(), "pick", 20, Some(&options), None).unwrap();
    assert_eq!(lines[3], "|  1 - opt1        |");
    assert_eq!(lines[12], "| 10 - opt10       |");
    assert!(lines.iter().all(|l| l.chars().count() == 20));
}

#[test]
fn test_control_characters_drawn_as_spaces() {
    let lines = render_box(&BoxStyle::default(), "a\nb\tc", 10, None, None).unwrap();
    assert_eq!(lines[1], "| a b c  |");
}

#[test]
fn test_width_too_small() {
    assert_eq!(
        render_box(&BoxStyle::default(), "q", 4, None, None).unwrap_err(),
        ConfigError::WidthTooSmall { width: 4, minimum: 5 }
    );
    let options = opts(&["a"]);
    assert_eq!(
        render_box(&BoxStyle::default(), "q", 8, Some(&options), None).unwrap_err(),
        ConfigError::WidthTooSmall { width: 8, minimum: 9 }
    );
    assert!(render_box(&BoxStyle::default(), "q", 9, Some(&options), None).is_ok());
}

#[test]
fn test_min_width_grows_with_option_count() {
    assert_eq!(numbering_width(9), 4);
    assert_eq!(numbering_width(10), 5);
    assert_eq!(numbering_width(100), 6);
    assert_eq!(box_min_width(0), 5);
    assert_eq!(box_min_width(3), 9);
    assert_eq!(box_min_width(12), 10);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every line of every box is exactly `width` chars.
    #[test]
    fn box_is_rectangular(
        query in "\\PC{0,300}",
        header in proptest::option::of("\\PC{0,80}"),
        options in proptest::option::of(proptest::collection::vec("\\PC{0,60}", 0..15)),
        extra in 0usize..60,
    ) {
        let count = options.as_ref().map_or(0, |o| o.len());
        let width = box_min_width(count) + extra;
        let lines = render_box(
            &BoxStyle::default(),
            &query,
            width,
            options.as_deref(),
            header.as_deref(),
        ).unwrap();
        prop_assert!(lines.len() >= 3);
        for line in &lines {
            prop_assert_eq!(line.chars().count(), width);
        }
    }
}
