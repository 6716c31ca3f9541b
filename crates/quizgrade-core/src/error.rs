//! Error types for the results and submission paths.
//!
//! Evaluation itself never fails: malformed selections degrade to "no
//! selection". The only failures are missing input on the results path and
//! inconsistent answers on the strict submission path.

use thiserror::Error;

/// Precondition failures when building a results view.
///
/// Every variant means there is nothing to render; callers redirect to a
/// default view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// No session snapshot was handed over (e.g. direct navigation).
    #[error("no quiz session available")]
    MissingSession,

    /// A snapshot exists but carries no score summary.
    #[error("quiz session has no score summary")]
    MissingSummary,
}

/// Errors that can occur while grading a raw submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The document has no questions to grade against.
    #[error("no questions found for document {document_id}")]
    NoQuestions { document_id: i64 },

    /// An answer references a question that is not part of the quiz.
    #[error("question {0} is not part of this quiz")]
    UnknownQuestion(i64),

    /// The selected answer id does not belong to the referenced question.
    #[error("answer {answer_id} is not a choice of question {question_id}")]
    UnknownAnswer { question_id: i64, answer_id: i64 },

    /// The same question was answered more than once.
    #[error("question {0} was answered more than once")]
    DuplicateAnswer(i64),
}
