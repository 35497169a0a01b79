//! Letter classification tables and contextual form resolution.
//!
//! The script's letters each carry four presentation forms (isolated, final,
//! initial, medial). Which form a letter takes depends on whether its
//! neighbors can connect into it: the table below records the four form
//! codepoints per letter together with the two join classes and the
//! diacritic set that drive that decision.

/// Contextual join state of a script letter.
///
/// The discriminant doubles as the index into a letter's
/// [`presentation_forms`] entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinForm {
    /// No connection on either side.
    Isolated = 0,
    /// Connects only to the preceding letter.
    Final = 1,
    /// Connects only to the following letter.
    Initial = 2,
    /// Connects on both sides.
    Medial = 3,
}

impl JoinForm {
    /// Index of this form within a [`presentation_forms`] entry.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Four presentation-form codepoints for `ch` in [`JoinForm`] order
/// (isolated, final, initial, medial).
///
/// Returns `None` for characters outside the letter, mark, and script
/// punctuation tables; such characters are opaque to shaping.
pub const fn presentation_forms(ch: char) -> Option<[u16; 4]> {
    let forms = match ch {
        // Vowel marks. Their four forms share one codepoint; contextual
        // selection only matters for ligature-aware renderers.
        '\u{064B}' => [0x064B; 4], // fathatan
        '\u{064C}' => [0x064C; 4], // dammatan
        '\u{064D}' => [0x064D; 4], // kasratan
        '\u{064E}' => [0x064E; 4], // fatha
        '\u{064F}' => [0x064F; 4], // damma
        '\u{0650}' => [0x0650; 4], // kasra
        '\u{0651}' => [0x0651; 4], // shadda
        // Letters.
        '\u{0621}' => [0xFE80, 0xFE80, 0xFE80, 0xFE80], // hamza
        '\u{0622}' => [0xFE81, 0xFE82, 0xFE81, 0xFE82], // alef madda
        '\u{0626}' => [0xFE89, 0xFE8A, 0xFE8B, 0xFE8C], // yeh hamza
        '\u{0627}' => [0xFE8D, 0xFE8E, 0xFE8D, 0xFE8E], // alef
        '\u{0628}' => [0xFE8F, 0xFE90, 0xFE91, 0xFE92], // beh
        '\u{067E}' => [0xFB56, 0xFB57, 0xFB58, 0xFB59], // peh
        '\u{062A}' => [0xFE95, 0xFE96, 0xFE97, 0xFE98], // teh
        '\u{062B}' => [0xFE99, 0xFE9A, 0xFE9B, 0xFE9C], // theh
        '\u{062C}' => [0xFE9D, 0xFE9E, 0xFE9F, 0xFEA0], // jeem
        '\u{0686}' => [0xFB7A, 0xFB7B, 0xFB7C, 0xFB7D], // tcheh
        '\u{062D}' => [0xFEA1, 0xFEA2, 0xFEA3, 0xFEA4], // hah
        '\u{062E}' => [0xFEA5, 0xFEA6, 0xFEA7, 0xFEA8], // khah
        '\u{062F}' => [0xFEA9, 0xFEAA, 0xFEA9, 0xFEAA], // dal
        '\u{0630}' => [0xFEAB, 0xFEAC, 0xFEAB, 0xFEAC], // thal
        '\u{0631}' => [0xFEAD, 0xFEAE, 0xFEAD, 0xFEAE], // reh
        '\u{0632}' => [0xFEAF, 0xFEB0, 0xFEAF, 0xFEB0], // zain
        '\u{0698}' => [0xFB8A, 0xFB8B, 0xFB8A, 0xFB8B], // jeh
        '\u{0633}' => [0xFEB1, 0xFEB2, 0xFEB3, 0xFEB4], // seen
        '\u{0634}' => [0xFEB5, 0xFEB6, 0xFEB7, 0xFEB8], // sheen
        '\u{0635}' => [0xFEB9, 0xFEBA, 0xFEBB, 0xFEBC], // sad
        '\u{0636}' => [0xFEBD, 0xFEBE, 0xFEBF, 0xFEC0], // dad
        '\u{0637}' => [0xFEC1, 0xFEC2, 0xFEC3, 0xFEC4], // tah
        '\u{0638}' => [0xFEC5, 0xFEC6, 0xFEC7, 0xFEC8], // zah
        '\u{0639}' => [0xFEC9, 0xFECA, 0xFECB, 0xFECC], // ain
        '\u{063A}' => [0xFECD, 0xFECE, 0xFECF, 0xFED0], // ghain
        '\u{0641}' => [0xFED1, 0xFED2, 0xFED3, 0xFED4], // feh
        '\u{0642}' => [0xFED5, 0xFED6, 0xFED7, 0xFED8], // qaf
        '\u{06A9}' => [0xFED9, 0xFEDA, 0xFEDB, 0xFEDC], // keheh
        '\u{06AF}' => [0xFB92, 0xFB93, 0xFB94, 0xFB95], // gaf
        '\u{0644}' => [0xFEDD, 0xFEDE, 0xFEDF, 0xFEE0], // lam
        '\u{0645}' => [0xFEE1, 0xFEE2, 0xFEE3, 0xFEE4], // meem
        '\u{0646}' => [0xFEE5, 0xFEE6, 0xFEE7, 0xFEE8], // noon
        '\u{0648}' => [0xFEED, 0xFEEE, 0xFEED, 0xFEEE], // waw
        '\u{0647}' => [0xFEE9, 0xFEEA, 0xFEEB, 0xFEEC], // heh
        '\u{06CC}' => [0x06CC, 0xFBFD, 0xFBFE, 0xFBFF], // farsi yeh
        // Tatweel and script punctuation shape like any other stream
        // character but keep a single form.
        '\u{0640}' => [0x0640; 4], // tatweel
        '\u{060C}' => [0x060C; 4], // comma
        '\u{061F}' => [0x061F; 4], // question mark
        '\u{061B}' => [0x061B; 4], // semicolon
        _ => return None,
    };
    Some(forms)
}

/// True if `ch` can connect forward into the letter that follows it.
///
/// A letter whose predecessor is in this set takes a right-joining
/// (final or medial) form. Tatweel and the script punctuation marks are
/// members so that a mark between letters keeps the preceding joint closed.
pub const fn joins_to_successor(ch: char) -> bool {
    matches!(
        ch,
        '\u{0628}' // beh
            | '\u{067E}' // peh
            | '\u{062A}' // teh
            | '\u{062B}' // theh
            | '\u{062C}' // jeem
            | '\u{0686}' // tcheh
            | '\u{062D}' // hah
            | '\u{062E}' // khah
            | '\u{0633}' // seen
            | '\u{0634}' // sheen
            | '\u{0635}' // sad
            | '\u{0636}' // dad
            | '\u{0637}' // tah
            | '\u{0638}' // zah
            | '\u{0639}' // ain
            | '\u{063A}' // ghain
            | '\u{0641}' // feh
            | '\u{0642}' // qaf
            | '\u{06A9}' // keheh
            | '\u{06AF}' // gaf
            | '\u{0644}' // lam
            | '\u{0645}' // meem
            | '\u{0646}' // noon
            | '\u{0647}' // heh
            | '\u{06CC}' // farsi yeh
            | '\u{0640}' // tatweel
            | '\u{060C}' // comma
            | '!'
            | '\u{061F}' // question mark
            | '\u{061B}' // semicolon
    )
}

/// True if `ch` can connect backward into the letter that precedes it.
///
/// A letter whose successor is in this set takes a left-joining
/// (initial or medial) form.
pub const fn joins_to_predecessor(ch: char) -> bool {
    matches!(
        ch,
        '\u{0640}' // tatweel
            | '\u{0622}' // alef madda
            | '\u{0627}' // alef
            | '\u{0626}' // yeh hamza
            | '\u{0628}' // beh
            | '\u{067E}' // peh
            | '\u{062A}' // teh
            | '\u{062B}' // theh
            | '\u{062C}' // jeem
            | '\u{0686}' // tcheh
            | '\u{062D}' // hah
            | '\u{062E}' // khah
            | '\u{062F}' // dal
            | '\u{0630}' // thal
            | '\u{0631}' // reh
            | '\u{0632}' // zain
            | '\u{0698}' // jeh
            | '\u{0633}' // seen
            | '\u{0634}' // sheen
            | '\u{0635}' // sad
            | '\u{0636}' // dad
            | '\u{0637}' // tah
            | '\u{0638}' // zah
            | '\u{0639}' // ain
            | '\u{063A}' // ghain
            | '\u{0641}' // feh
            | '\u{0642}' // qaf
            | '\u{06A9}' // keheh
            | '\u{06AF}' // gaf
            | '\u{0644}' // lam
            | '\u{0645}' // meem
            | '\u{0646}' // noon
            | '\u{0648}' // waw
            | '\u{0647}' // heh
            | '\u{06CC}' // farsi yeh
    )
}

/// True if `ch` is a vowel mark.
///
/// Marks never take a join state themselves and are transparent when
/// scanning for a letter's effective neighbor.
pub const fn is_diacritic(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{0651}')
}

/// Directional counterpart of a bracket character, or `None`.
///
/// Valid under exactly one visual reversal pass: a logical opening bracket
/// renders as its closing partner once the surrounding text is reversed.
pub const fn mirror_bracket(ch: char) -> Option<char> {
    let mirrored = match ch {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '<' => '>',
        '>' => '<',
        '{' => '}',
        '}' => '{',
        _ => return None,
    };
    Some(mirrored)
}

/// Join state for a letter given its effective neighbors.
///
/// `prev` is the nearest preceding letter with diacritics skipped (see
/// [`effective_prev`]); `next` is the letter following in logical order.
/// Either side is `None` at a string boundary.
pub fn resolve_form(prev: Option<char>, next: Option<char>) -> JoinForm {
    let connects_back = prev.is_some_and(joins_to_successor);
    let connects_forward = next.is_some_and(joins_to_predecessor);
    match (connects_back, connects_forward) {
        (false, false) => JoinForm::Isolated,
        (true, false) => JoinForm::Final,
        (false, true) => JoinForm::Initial,
        (true, true) => JoinForm::Medial,
    }
}

/// Join state for a vowel mark.
///
/// A mark takes its ligated form only when the preceding effective letter
/// joins forward and the literal following character joins backward.
pub fn resolve_diacritic_form(prev: Option<char>, following: Option<char>) -> JoinForm {
    if following.is_some_and(joins_to_predecessor) && prev.is_some_and(joins_to_successor) {
        JoinForm::Final
    } else {
        JoinForm::Isolated
    }
}

/// Nearest character before `idx`, skipping at most two consecutive
/// diacritics.
///
/// Returns `None` at the start of the string or when the lookback window
/// runs off the front. After two skips the candidate is taken as-is, even
/// if it is itself a diacritic.
pub(crate) fn effective_prev(chars: &[char], idx: usize) -> Option<char> {
    let mut pos = idx.checked_sub(1)?;
    let mut skipped = 0;
    while skipped < 2 && is_diacritic(chars[pos]) {
        pos = pos.checked_sub(1)?;
        skipped += 1;
    }
    Some(chars[pos])
}
