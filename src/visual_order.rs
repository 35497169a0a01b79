//! Logical-to-visual reordering of script text.
//!
//! A shaping-unaware renderer draws codepoints left to right exactly as
//! given. For right-to-left script text that means the stream must already
//! be in visual order with every letter resolved to its contextual
//! presentation form. [`compose_visual`] produces that stream by walking
//! the logical text back to front: the walk order itself performs the
//! reversal, while running state supplies each letter's already-emitted
//! logical successor for join resolution.

use core::fmt::Write;

use crate::entity_decode::decode_entities;
use crate::glyph_table::{
    effective_prev, is_diacritic, mirror_bracket, presentation_forms, resolve_diacritic_form,
    resolve_form,
};

/// Reorder logical text into a visual stream of numeric entity references.
///
/// Script letters and marks are emitted as `&#xHHHH;` presentation-form
/// references; ASCII passes through verbatim (resetting the join context,
/// since ASCII never joins); brackets are mirrored; characters outside the
/// tables are opaque and pass through unshaped.
pub fn compose_visual(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    // Logical successor of the character being classified. Because the walk
    // runs back to front, this is simply the last non-mark we emitted.
    let mut succeeding: Option<char> = None;

    for idx in (0..chars.len()).rev() {
        let prev = effective_prev(&chars, idx);
        let mut current = chars[idx];

        if let Some(mirrored) = mirror_bracket(current) {
            current = mirrored;
        }

        if (current as u32) < 0x80 {
            out.push(current);
            succeeding = Some(current);
            continue;
        }

        if is_diacritic(current) {
            let following = chars.get(idx + 1).copied();
            let form = resolve_diacritic_form(prev, following);
            match presentation_forms(current) {
                Some(forms) => push_entity(&mut out, forms[form.index()]),
                None => out.push(current),
            }
            // Marks ride on their letter and never become the join context.
            continue;
        }

        match presentation_forms(current) {
            Some(forms) => {
                let form = resolve_form(prev, succeeding);
                push_entity(&mut out, forms[form.index()]);
            }
            // Untabled character: opaque passthrough, no shaping.
            None => out.push(current),
        }
        succeeding = Some(current);
    }

    out
}

/// Reorder logical text into visual UTF-8 text.
///
/// Runs [`compose_visual`] and collapses the entity markers to raw bytes,
/// leaving only `&`-valued entities encoded so the result cannot be
/// decoded a second time by downstream consumers.
pub fn reorder_visual(text: &str) -> String {
    decode_entities(&compose_visual(text), &['&'])
}

fn push_entity(out: &mut String, code: u16) {
    // fmt::Write into a String cannot fail.
    let _ = write!(out, "&#x{code:04X};");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through_in_reversed_order() {
        // The wrap stage pre-reverses embedded runs so this global reversal
        // restores them; in isolation, reversal is all that happens.
        assert_eq!(compose_visual("abc"), "cba");
    }

    #[test]
    fn middle_letter_of_dual_joining_word_takes_medial_form() {
        // beh beh beh
        let stream = compose_visual("\u{0628}\u{0628}\u{0628}");
        assert_eq!(stream, "&#xFE90;&#xFE92;&#xFE91;");
    }

    #[test]
    fn lone_letter_takes_isolated_form() {
        assert_eq!(compose_visual("\u{0645}"), "&#xFEE1;");
    }

    #[test]
    fn non_joining_predecessor_yields_isolated_trailing_letter() {
        // alef does not join forward, so a final meem after it is isolated
        let stream = compose_visual("\u{0644}\u{0627}\u{0645}");
        assert_eq!(stream, "&#xFEE1;&#xFE8E;&#xFEDF;");
    }

    #[test]
    fn brackets_mirror_once_per_reversal_pass() {
        let stream = compose_visual("(\u{0627})");
        assert_eq!(stream, "(&#xFE8D;)");
    }

    #[test]
    fn bracket_mirroring_is_not_round_trippable() {
        // Reordering the already-visual text flips the brackets again and
        // re-reverses: the result is not the original logical stream.
        let once = reorder_visual("(a)");
        assert_eq!(once, "(a)");
        // a logical "(a)" and its visual form coincide here, but a second
        // logical interpretation of a mixed stream does not restore it
        let logical = "(\u{0627}b";
        let visual = reorder_visual(logical);
        assert_ne!(reorder_visual(&visual), logical);
    }

    #[test]
    fn diacritic_between_joining_letters_takes_ligated_form() {
        // beh, shadda, beh: both sides join, so the mark ligates (same
        // codepoint either way, but the classification is observable
        // through the resolver)
        let stream = compose_visual("\u{0628}\u{0651}\u{0628}");
        assert_eq!(stream, "&#xFE90;&#x0651;&#xFE91;");
    }

    #[test]
    fn diacritic_does_not_update_join_context() {
        // beh, fatha, beh: the mark is transparent, so the letters still
        // see each other and connect
        let stream = compose_visual("\u{0628}\u{064E}\u{0628}");
        assert_eq!(stream, "&#xFE90;&#x064E;&#xFE91;");
    }

    #[test]
    fn untabled_characters_are_opaque() {
        let stream = compose_visual("\u{4E2D}\u{0628}");
        assert_eq!(stream, "&#xFE8F;\u{4E2D}");
    }

    #[test]
    fn reorder_visual_collapses_generated_entities_to_glyphs() {
        let visual = reorder_visual("\u{0628}\u{0628}");
        assert_eq!(visual, "\u{FE90}\u{FE91}");

        let visual = reorder_visual("ab \u{0645}");
        assert_eq!(visual, "\u{FEE1} ba");
    }
}
