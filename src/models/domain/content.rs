use serde::{Deserialize, Serialize};

/// The kind of content a caller can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Paragraph,
    MultipleChoiceQuestion,
    Quiz,
}

impl ContentKind {
    /// Wire-format name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Paragraph => "paragraph",
            ContentKind::MultipleChoiceQuestion => "multiple_choice_question",
            ContentKind::Quiz => "quiz",
        }
    }
}

/// One multiple-choice question with four ordered options (A through D) and
/// the index of the correct one.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct McqRecord {
    #[serde(rename = "question_text")]
    pub question: String,
    pub options: [String; 4],
    #[serde(rename = "correct_answer_index")]
    pub correct_index: usize,
}

/// A titled quiz of exactly three multiple-choice questions, in the order
/// they appeared in the model output.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizRecord {
    pub title: String,
    pub questions: Vec<McqRecord>,
}

/// A single explanatory paragraph.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParagraphRecord {
    pub content: String,
}

/// Any successfully parsed piece of generated content. Serializes with a
/// `type` discriminant matching the request's `content_type` values.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratedContent {
    Paragraph(ParagraphRecord),
    MultipleChoiceQuestion(McqRecord),
    Quiz(QuizRecord),
}
