use crate::models::domain::McqRecord;
use crate::parsing::error::{ParseError, ParseResult};

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Accumulates slot values while scanning a question block line by line.
#[derive(Debug, Default)]
struct McqSlots {
    question: Option<String>,
    options: [Option<String>; 4],
    answer_letter: Option<String>,
}

/// Parses one multiple-choice question block of the form:
///
/// ```text
/// Question: ...
/// A: ...
/// B: ...
/// C: ...
/// D: ...
/// Correct Answer: <letter>
/// ```
///
/// Lines matching none of the expected prefixes are ignored so the parser
/// tolerates stray commentary from the model. A line whose prefix matches but
/// carries no text after the colon leaves that slot unset and scanning
/// continues; the post-scan validation decides whether the block as a whole
/// is usable.
pub fn parse_mcq(text: &str) -> ParseResult<McqRecord> {
    let mut slots = McqSlots::default();

    for line in text.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(value) = remainder_after(line, "Question:") {
            slots.question = Some(value);
        } else if let Some(value) = remainder_after(line, "A:") {
            slots.options[0] = Some(value);
        } else if let Some(value) = remainder_after(line, "B:") {
            slots.options[1] = Some(value);
        } else if let Some(value) = remainder_after(line, "C:") {
            slots.options[2] = Some(value);
        } else if let Some(value) = remainder_after(line, "D:") {
            slots.options[3] = Some(value);
        } else if let Some(value) = remainder_after(line, "Correct Answer:") {
            slots.answer_letter = Some(value);
        }
    }

    build_record(slots)
}

/// Returns the trimmed text after the prefix's colon when `line` starts with
/// `prefix`. An empty remainder is a recoverable per-line formatting issue:
/// the caller gets `None` and the slot stays unset.
fn remainder_after(line: &str, prefix: &str) -> Option<String> {
    let rest = line.strip_prefix(prefix)?;
    let rest = rest.trim();
    if rest.is_empty() {
        log::warn!("skipping line '{}': no text after the colon", line);
        return None;
    }
    Some(rest.to_string())
}

fn build_record(slots: McqSlots) -> ParseResult<McqRecord> {
    let question = slots
        .question
        .ok_or(ParseError::MissingField { field: "question" })?;

    let missing: Vec<char> = OPTION_LETTERS
        .iter()
        .zip(slots.options.iter())
        .filter(|(_, slot)| slot.is_none())
        .map(|(letter, _)| *letter)
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::IncompleteOptionSet { missing });
    }

    let answer_letter = slots
        .answer_letter
        .as_deref()
        .map(str::to_uppercase)
        .filter(|l| matches!(l.as_str(), "A" | "B" | "C" | "D"))
        .ok_or(ParseError::InvalidAnswerLetter {
            found: slots.answer_letter.clone(),
        })?;

    // The presence check above already guarantees the slots are set; this
    // guard keeps a populated-but-empty option from ever reaching a record.
    let mut options: [String; 4] = Default::default();
    for (i, (letter, slot)) in OPTION_LETTERS.iter().zip(slots.options).enumerate() {
        match slot {
            Some(value) if !value.is_empty() => options[i] = value,
            _ => return Err(ParseError::EmptyOptionValue { letter: *letter }),
        }
    }

    let correct_index = (answer_letter.as_bytes()[0] - b'A') as usize;

    Ok(McqRecord {
        question,
        options,
        correct_index,
    })
}
