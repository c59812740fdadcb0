use crate::models::domain::ParagraphRecord;
use crate::parsing::error::{ParseError, ParseResult};

/// Parses paragraph output: the trimmed text is the content, and an empty
/// result means the model produced nothing usable.
pub fn parse_paragraph(text: &str) -> ParseResult<ParagraphRecord> {
    let content = text.trim();
    if content.is_empty() {
        return Err(ParseError::MissingField { field: "content" });
    }

    Ok(ParagraphRecord {
        content: content.to_string(),
    })
}
