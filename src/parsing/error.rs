use thiserror::Error;

/// Failure raised while recovering a structured record from raw model output.
///
/// Every variant names the field or structure that could not be recovered;
/// a failed parse never yields partial data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("required field '{field}' was not found in the model output")]
    MissingField { field: &'static str },

    #[error("incomplete option set, missing: {}", format_letters(missing))]
    IncompleteOptionSet { missing: Vec<char> },

    #[error("correct answer letter {} is not one of A, B, C, D", format_found(found))]
    InvalidAnswerLetter { found: Option<String> },

    #[error("option '{letter}' matched its label but carried no text")]
    EmptyOptionValue { letter: char },

    #[error("first line does not carry a usable 'Quiz Title:' prefix")]
    TitleFormatError,

    #[error("expected exactly 3 question blocks, found {found}")]
    BlockCountMismatch { found: usize },

    #[error("question block #{ordinal} failed to parse: {source}")]
    NestedBlockFailure {
        ordinal: usize,
        #[source]
        source: Box<ParseError>,
    },
}

fn format_found(found: &Option<String>) -> String {
    match found {
        Some(letter) => format!("'{}'", letter),
        None => "(none)".to_string(),
    }
}

fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type ParseResult<T> = Result<T, ParseError>;
