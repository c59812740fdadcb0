use crate::models::domain::{McqRecord, QuizRecord};
use crate::parsing::error::{ParseError, ParseResult};
use crate::parsing::mcq::parse_mcq;

const EXPECTED_QUESTIONS: usize = 3;

/// Parses a full quiz: a `Quiz Title:` line followed by numbered question
/// blocks (`1.`, `2.`, `3.`), each of which must individually parse as a
/// multiple-choice question block.
///
/// Numbered marker lines delimit blocks and are not part of any block. The
/// quiz is only valid when exactly three blocks parse successfully.
pub fn parse_quiz(text: &str) -> ParseResult<QuizRecord> {
    let mut lines = text.trim().lines();

    let title = extract_title(lines.next())?;

    let mut questions: Vec<McqRecord> = Vec::new();
    let mut current_block: Vec<&str> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_block_marker(trimmed) {
            finalize_block(&mut current_block, &mut questions)?;
        } else {
            current_block.push(line);
        }
    }

    finalize_block(&mut current_block, &mut questions)?;

    if questions.len() != EXPECTED_QUESTIONS {
        log::error!(
            "quiz parsing found {} question blocks, expected {}",
            questions.len(),
            EXPECTED_QUESTIONS
        );
        return Err(ParseError::BlockCountMismatch {
            found: questions.len(),
        });
    }

    Ok(QuizRecord { title, questions })
}

/// The first line must start with `Quiz Title:` and carry a non-empty
/// remainder; anything else aborts the whole parse.
fn extract_title(first_line: Option<&str>) -> ParseResult<String> {
    let title = first_line
        .and_then(|line| line.trim().strip_prefix("Quiz Title:"))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ParseError::TitleFormatError)?;

    Ok(title.to_string())
}

/// A marker line starts a new numbered block: non-empty after trimming, first
/// character a digit, and the first whitespace-delimited token containing a
/// `.` (`1.`, `2.`, ...). Deliberately loose pattern matching; a body line
/// such as `3.14 is pi` would also match, which is accepted model-format
/// drift rather than something this parser hardens against.
fn is_block_marker(trimmed: &str) -> bool {
    let starts_with_digit = trimmed.chars().next().is_some_and(|c| c.is_ascii_digit());
    let first_token_dotted = trimmed
        .split_whitespace()
        .next()
        .is_some_and(|token| token.contains('.'));

    starts_with_digit && first_token_dotted
}

/// Hands the accumulated block to the MCQ parser and resets the buffer. An
/// empty buffer (marker at the very start, or back-to-back markers) is a
/// no-op. A sub-parse failure aborts the quiz, tagged with the block's
/// 1-based position.
fn finalize_block(block: &mut Vec<&str>, questions: &mut Vec<McqRecord>) -> ParseResult<()> {
    if block.is_empty() {
        return Ok(());
    }

    let ordinal = questions.len() + 1;
    let joined = block.join("\n");
    block.clear();

    match parse_mcq(&joined) {
        Ok(record) => {
            questions.push(record);
            Ok(())
        }
        Err(source) => {
            log::error!("quiz question block #{} failed to parse: {}", ordinal, source);
            Err(ParseError::NestedBlockFailure {
                ordinal,
                source: Box::new(source),
            })
        }
    }
}
