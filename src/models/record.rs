/// One question/expected-answer pair, loaded from the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRecord {
    /// Question text, taken verbatim from the first CSV field.
    pub question: String,
    /// Expected numeric answer.
    pub answer: i64,
}

impl QuizRecord {
    pub fn new(question: impl Into<String>, answer: i64) -> Self {
        Self {
            question: question.into(),
            answer,
        }
    }
}
