//! Greedy line wrapping, pagination estimation, and digit substitution.
//!
//! Wrapping happens in logical order, but the wrapped page is consumed by a
//! reversal pass that flips every line character by character. Embedded
//! Latin/number runs are therefore pre-reversed here, at word granularity,
//! so the later flip restores their natural left-to-right reading; and the
//! finished lines are handed back last-computed-first, because the page
//! reads bottom-up relative to computation order.

use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

const TAB_EXPANSION: &str = "        ";

const LATIN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const NATIVE_DIGITS: [char; 10] = [
    '\u{0660}', '\u{0661}', '\u{0662}', '\u{0663}', '\u{0664}', '\u{0665}', '\u{0666}',
    '\u{0667}', '\u{0668}', '\u{0669}',
];

// Word shapes treated as embedded left-to-right runs: ASCII letters, digits
// and a fixed punctuation set, optionally led by an explicit break and
// closed by one trailing mark. The character classes are load-bearing;
// widening or narrowing them shifts wrap and digit-substitution outcomes.
#[allow(clippy::expect_used)]
static RUN_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^(\n?)[a-z0-9/@#$%^&*()_~"'\[\]{};,|.:!-]*([.:+=!\x{060C}\x{061F}-]?)$"#,
    )
    .expect("RUN_WORD regex pattern is valid")
});

// Per-digit reversion patterns, one per native digit, applied sequentially
// in ascending digit order over the whole string.
#[allow(clippy::expect_used)]
static DIGIT_AFTER_RUN: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NATIVE_DIGITS
        .iter()
        .map(|digit| {
            Regex::new(&format!("(?i)([a-z0-9-]+){digit}"))
                .expect("digit reversion pattern is valid")
        })
        .collect()
});

#[allow(clippy::expect_used)]
static DIGIT_BEFORE_RUN: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NATIVE_DIGITS
        .iter()
        .map(|digit| {
            Regex::new(&format!("(?i){digit}([a-z0-9-]+)"))
                .expect("digit reversion pattern is valid")
        })
        .collect()
});

/// Estimated character budget for one A4 line at `font_size` points.
///
/// Quartic regression fit against a single fixed page geometry, less a
/// two-character margin. Monotonically decreasing over typical document
/// font sizes; the estimate is unspecified outside that range.
pub fn max_chars_per_line(font_size: f32) -> usize {
    let f = f64::from(font_size);
    let fit = 381.6 - 31.57 * f + 1.182 * f.powi(2) - 0.02052 * f.powi(3) + 0.0001342 * f.powi(4);
    let budget = (fit - 2.0).floor();
    if budget.is_sign_negative() {
        0
    } else {
        budget as usize
    }
}

/// Number of wrapped lines `text` occupies at `font_size` on an A4 page.
///
/// Estimator companion to [`wrap`]: same greedy accumulation, but without
/// materializing lines or touching embedded runs.
pub fn line_count(text: &str, font_size: f32) -> usize {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let max_chars = max_chars_per_line(font_size);

    let mut lines = 0usize;
    let mut chars = 0usize;
    for word in text.split(' ') {
        let word_len = word.chars().count() + 1;
        if chars + word_len < max_chars {
            if word.contains('\n') {
                let parts: Vec<&str> = word.split('\n').collect();
                let breaks = parts.len() - 1;
                lines += breaks.saturating_sub(1);
                chars = parts[breaks].chars().count() + 1;
            } else {
                chars += word_len;
            }
        } else {
            lines += 1;
            chars = word_len;
        }
    }
    lines + 1
}

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// Line breaks and tabs are normalized first; embedded Latin/number runs
/// are pre-reversed at word granularity; words accumulate greedily with a
/// single separating space; an explicit break inside a word forces a
/// flush. A word longer than the whole budget occupies its own line,
/// unsplit. Lines are returned in reverse of computation order.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let normalized = normalize_breaks(text);
    let mut words: Vec<String> = normalized.split(' ').map(str::to_owned).collect();
    reverse_embedded_runs(&mut words);

    let mut lines: Vec<String> = Vec::new();
    let mut current: SmallVec<[String; 16]> = SmallVec::new();
    let mut current_chars = 0usize;

    for word in words {
        let word_len = word.chars().count() + 1;
        if current_chars + word_len < max_chars {
            if word.contains('\n') {
                let parts: Vec<&str> = word.split('\n').collect();
                let last = parts.len() - 1;
                current.push(parts[0].to_owned());
                lines.push(current.join(" "));
                current.clear();
                for part in &parts[1..last] {
                    lines.push((*part).to_owned());
                }
                current_chars = parts[last].chars().count() + 1;
                current.push(parts[last].to_owned());
            } else {
                current_chars += word_len;
                current.push(word);
            }
        } else {
            // An over-budget word starts its own line; never flush an
            // empty one.
            if !current.is_empty() {
                lines.push(current.join(" "));
                current.clear();
            }
            current_chars = word_len;
            current.push(word);
        }
    }
    lines.push(current.join(" "));

    lines.reverse();
    lines
}

/// Replace Latin digits with Arabic-Indic digits, except where a digit
/// sequence touches a Latin letter run without an intervening space.
pub fn substitute_native_digits(text: &str) -> String {
    let mut converted: String = text
        .chars()
        .map(|ch| match ch {
            '0'..='9' => NATIVE_DIGITS[(ch as usize) - ('0' as usize)],
            _ => ch,
        })
        .collect();

    for (pattern, digit) in DIGIT_AFTER_RUN.iter().zip(LATIN_DIGITS) {
        converted = pattern
            .replace_all(&converted, format!("${{1}}{digit}"))
            .into_owned();
    }
    for (pattern, digit) in DIGIT_BEFORE_RUN.iter().zip(LATIN_DIGITS) {
        converted = pattern
            .replace_all(&converted, format!("{digit}${{1}}"))
            .into_owned();
    }
    converted
}

// Sequential replacement: a CRLF's inserted break is re-expanded by the
// second pass. That widened padding is part of the wrap contract.
fn normalize_breaks(text: &str) -> String {
    text.replace("\r\n", " \n ")
        .replace('\n', " \n ")
        .replace('\r', " \n ")
        .replace('\t', TAB_EXPANSION)
}

/// Reverse the word order of every maximal embedded run in place, with
/// each run word individually reshaped for the later character reversal.
fn reverse_embedded_runs(words: &mut [String]) {
    let mut run_start: Option<usize> = None;
    let mut run: SmallVec<[String; 8]> = SmallVec::new();

    for index in 0..words.len() {
        if let Some(reshaped) = reshape_run_word(&words[index]) {
            words[index] = reshaped;
            if run_start.is_none() {
                run_start = Some(index);
            }
            run.push(words[index].clone());
        } else if let Some(start) = run_start.take() {
            write_back_reversed(words, start, &mut run);
        }
    }
    if let Some(start) = run_start {
        write_back_reversed(words, start, &mut run);
    }
}

fn write_back_reversed(words: &mut [String], start: usize, run: &mut SmallVec<[String; 8]>) {
    for (offset, word) in run.drain(..).rev().enumerate() {
        words[start + offset] = word;
    }
}

/// Pre-reverse one run word, or `None` if the word is not run-shaped.
///
/// A leading explicit break moves to the tail and a single trailing mark
/// anchors in front before the character reversal, so both land on the
/// correct side once the composed line is flipped.
fn reshape_run_word(word: &str) -> Option<String> {
    let captures = RUN_WORD.captures(word)?;

    let mut shaped = word.to_owned();
    if !captures[1].is_empty() {
        shaped = format!("{}\n", &word[1..]);
    }
    let trailing_mark = &captures[2];
    if !trailing_mark.is_empty() {
        let mut kept: Vec<char> = shaped.chars().collect();
        kept.pop();
        let body: String = kept.into_iter().collect();
        shaped = format!("{trailing_mark}{body}");
    }
    Some(shaped.chars().rev().collect())
}
