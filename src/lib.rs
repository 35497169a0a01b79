//! Visual glyph stream shaping for Persian/Arabic-script text.
//!
//! Raster and PDF backends without complex-text support draw codepoints
//! left to right exactly as given. This crate turns logically-ordered
//! script text into a stream such a renderer can draw directly: each
//! letter resolved to its contextual presentation form, the stream
//! reordered into visual order, brackets mirrored, embedded Latin/number
//! runs kept in their natural reading order, and the result word-wrapped
//! to a caller-specified line budget for fixed-layout pagination.
//!
//! # Usage
//!
//! ```rust
//! use glyph_stream::{ShapeEngine, ShapeOptions};
//!
//! let engine = ShapeEngine::new(ShapeOptions::default());
//! let visual = engine.render("\u{0633}\u{0644}\u{0627}\u{0645}");
//! assert!(!visual.is_empty());
//! ```
//!
//! The stages are also usable on their own: [`wrap`] for pagination,
//! [`compose_visual`]/[`reorder_visual`] for reordering and shaping, and
//! [`decode_entities`] for the final byte normalization.

#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

pub mod entity_decode;
pub mod glyph_table;
pub mod line_wrap;
pub mod shape_engine;
pub mod visual_order;

pub use entity_decode::decode_entities;
pub use glyph_table::{
    is_diacritic, joins_to_predecessor, joins_to_successor, mirror_bracket, presentation_forms,
    resolve_diacritic_form, resolve_form, JoinForm,
};
pub use line_wrap::{line_count, max_chars_per_line, substitute_native_digits, wrap};
pub use shape_engine::{DigitStyle, OutputForm, ShapeEngine, ShapeOptions};
pub use visual_order::{compose_visual, reorder_visual};
