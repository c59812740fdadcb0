pub mod content;

pub use content::{ContentKind, GeneratedContent, McqRecord, ParagraphRecord, QuizRecord};
