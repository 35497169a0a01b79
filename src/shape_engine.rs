//! End-to-end shaping pipeline.
//!
//! Wires the stages together in page order: wrap the logical text under the
//! line budget, flip the wrapped page into visual order with contextual
//! forms applied, then resolve the output representation and digit style.

use crate::entity_decode::decode_entities;
use crate::line_wrap::{max_chars_per_line, substitute_native_digits, wrap};
use crate::visual_order::compose_visual;

/// Digit rendering for shaped output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DigitStyle {
    /// Arabic-Indic digits, except where a digit sequence touches a Latin
    /// letter run without an intervening space.
    #[default]
    Native,
    /// Latin digits everywhere.
    Latin,
}

/// Output representation for shaped text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputForm {
    /// UTF-8 text: the composed stream is decoded with `&` left encoded,
    /// ready for renderers that draw raw codepoints.
    #[default]
    Utf8Text,
    /// Numeric `&#xHHHH;` references, for renderers that resolve entities
    /// through their own table.
    EntityRefs,
}

/// Options for [`ShapeEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeOptions {
    /// Character budget per wrapped line.
    pub max_line_chars: usize,
    /// Digit rendering policy.
    pub digits: DigitStyle,
    /// Output representation.
    pub output: OutputForm,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            max_line_chars: 50,
            digits: DigitStyle::Native,
            output: OutputForm::Utf8Text,
        }
    }
}

impl ShapeOptions {
    /// Options with the line budget derived from the page regression model.
    pub fn for_font_size(font_size: f32) -> Self {
        Self {
            max_line_chars: max_chars_per_line(font_size),
            ..Self::default()
        }
    }
}

/// Configured shaping pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeEngine {
    opts: ShapeOptions,
}

impl ShapeEngine {
    /// Create an engine.
    pub fn new(opts: ShapeOptions) -> Self {
        Self { opts }
    }

    /// Options this engine runs with.
    pub fn options(&self) -> ShapeOptions {
        self.opts
    }

    /// Shape `text` into a wrapped visual stream.
    ///
    /// The input is logical-order script text (with any embedded Latin or
    /// number runs); the output is a page of `\n`-separated visual lines in
    /// the representation selected by [`ShapeOptions::output`].
    pub fn render(&self, text: &str) -> String {
        let lines = wrap(text, self.opts.max_line_chars);
        log::debug!(
            "wrapped {} lines under budget {}",
            lines.len(),
            self.opts.max_line_chars
        );

        let page = lines.join("\n");
        let stream = compose_visual(page.trim_end());

        let shaped = match self.opts.output {
            OutputForm::Utf8Text => decode_entities(&stream, &['&']),
            OutputForm::EntityRefs => stream,
        };

        match self.opts.digits {
            DigitStyle::Native => substitute_native_digits(&shaped),
            DigitStyle::Latin => shaped,
        }
    }
}
