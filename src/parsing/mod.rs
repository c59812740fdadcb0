//! Deterministic parsers that turn raw model output into structured records.
//!
//! Everything in this module is a pure function over an in-memory string: no
//! I/O, no shared state, and no partial results. A parse either yields a
//! fully populated record or a [`ParseError`] naming what was missing or
//! malformed.

pub mod error;
pub mod mcq;
pub mod paragraph;
pub mod quiz;

pub use error::{ParseError, ParseResult};
pub use mcq::parse_mcq;
pub use paragraph::parse_paragraph;
pub use quiz::parse_quiz;

use crate::models::domain::{ContentKind, GeneratedContent};

/// Dispatches raw model output to the parser matching the requested kind.
pub fn parse_content(kind: ContentKind, raw_text: &str) -> ParseResult<GeneratedContent> {
    match kind {
        ContentKind::Paragraph => parse_paragraph(raw_text).map(GeneratedContent::Paragraph),
        ContentKind::MultipleChoiceQuestion => {
            parse_mcq(raw_text).map(GeneratedContent::MultipleChoiceQuestion)
        }
        ContentKind::Quiz => parse_quiz(raw_text).map(GeneratedContent::Quiz),
    }
}
