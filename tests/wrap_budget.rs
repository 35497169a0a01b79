use glyph_stream::{line_count, max_chars_per_line, wrap};

const BUDGET: usize = 10;

fn accumulated_chars(line: &str) -> usize {
    line.split(' ').map(|word| word.chars().count() + 1).sum()
}

#[test]
fn no_wrapped_line_reaches_the_budget() {
    let lines = wrap("aa bb cc dd", BUDGET);
    assert!(!lines.is_empty());
    for line in &lines {
        let accumulated = accumulated_chars(line);
        assert!(
            accumulated < BUDGET,
            "line {line:?} accumulated {accumulated} chars, budget {BUDGET}"
        );
    }
}

#[test]
fn a_word_longer_than_the_budget_is_not_split() {
    let lines = wrap("aaaaaaaaaaaa", BUDGET);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].chars().count(), 12);
}

#[test]
fn an_over_budget_word_never_produces_an_empty_line() {
    let word = "\u{0628}".repeat(12);
    for text in [word.clone(), format!("{word} \u{0628}\u{0647}")] {
        let lines = wrap(&text, BUDGET);
        assert!(
            lines.iter().all(|line| !line.is_empty()),
            "wrap of {text:?} emitted an empty line: {lines:?}"
        );
    }
}

#[test]
fn budget_model_tracks_font_size() {
    // a larger font fits fewer characters on the fixed page geometry
    assert!(max_chars_per_line(12.0) > max_chars_per_line(18.0));
    assert!(max_chars_per_line(18.0) > max_chars_per_line(24.0));
}

#[test]
fn estimated_line_count_grows_with_text_length() {
    let sentence = "\u{0633}\u{0644}\u{0627}\u{0645} \u{0628}\u{0647}";
    let short = sentence.to_string();
    let long = vec![sentence; 60].join(" ");
    let font = 14.0;

    let short_lines = line_count(&short, font);
    let long_lines = line_count(&long, font);
    assert_eq!(short_lines, 1);
    assert!(
        long_lines > short_lines,
        "sixty sentences must not fit one {} char line",
        max_chars_per_line(font)
    );
}

#[test]
fn wrapped_page_covers_every_input_word() {
    // wrap only rearranges; nothing is dropped
    let text = "\u{0633}\u{0644}\u{0627}\u{0645} \u{0628}\u{0647} \u{0633}\u{0644}\u{0627}\u{0645}";
    let lines = wrap(text, BUDGET);
    let rejoined: Vec<&str> = lines
        .iter()
        .flat_map(|line| line.split(' '))
        .filter(|word| !word.is_empty())
        .collect();
    let mut expected: Vec<&str> = text.split(' ').collect();
    // emission is reversed relative to computation, so compare as multisets
    let mut got = rejoined.clone();
    got.sort_unstable();
    expected.sort_unstable();
    assert_eq!(got, expected);
}
