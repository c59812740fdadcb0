#[cfg(test)]
pub mod fixtures {
    /// A model reply in exactly the format the MCQ prompt demands.
    pub const WELL_FORMED_MCQ: &str = "\
Question: What is the capital of France?
A: Berlin
B: Paris
C: Madrid
D: Rome
Correct Answer: B
";

    /// A model reply in exactly the format the quiz prompt demands.
    pub const WELL_FORMED_QUIZ: &str = "\
Quiz Title: European Capitals

1.
Question: What is the capital of France?
A: Berlin
B: Paris
C: Madrid
D: Rome
Correct Answer: B

2.
Question: What is the capital of Germany?
A: Vienna
B: Zurich
C: Berlin
D: Hamburg
Correct Answer: C

3.
Question: What is the capital of Spain?
A: Madrid
B: Barcelona
C: Lisbon
D: Seville
Correct Answer: A
";
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_mcq_shape() {
        assert!(WELL_FORMED_MCQ.starts_with("Question:"));
        assert!(WELL_FORMED_MCQ.contains("Correct Answer: B"));
    }

    #[test]
    fn test_fixture_quiz_shape() {
        assert!(WELL_FORMED_QUIZ.starts_with("Quiz Title:"));
        assert_eq!(WELL_FORMED_QUIZ.matches("Question:").count(), 3);
    }
}
