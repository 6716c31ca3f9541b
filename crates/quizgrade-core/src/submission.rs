//! Grading of raw quiz submissions.
//!
//! Unlike evaluation of a snapshot, grading is strict: a submission that
//! references questions or choices outside the quiz is rejected as a whole.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SubmissionError;
use crate::evaluator::evaluate;
use crate::model::{Document, Question, ScoreSummary, UserAnswerMap};
use crate::session::SessionSnapshot;

/// Name recorded when the submitter did not give one.
pub const ANONYMOUS: &str = "Anonymous";

/// One answered question as posted by the quiz-taking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: i64,
    pub selected_answer_id: i64,
}

/// A raw submission together with the quiz it answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub document: Document,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Per-answer verdict recorded on a graded response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnswerRecord {
    pub question_id: i64,
    pub selected_answer_id: i64,
    pub is_correct: bool,
}

/// A graded quiz attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResponse {
    /// Unique response identifier.
    pub id: Uuid,
    pub document_id: i64,
    pub user_name: String,
    pub score: u32,
    pub total_questions: u32,
    pub submitted_at: DateTime<Utc>,
    /// Verdicts in the order the answers were submitted.
    pub user_answers: Vec<UserAnswerRecord>,
}

impl QuizResponse {
    /// The score summary of this response.
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.score, self.total_questions)
    }

    /// The selections of this response as a map.
    pub fn answer_map(&self) -> UserAnswerMap {
        self.user_answers
            .iter()
            .map(|r| (r.question_id, r.selected_answer_id))
            .collect()
    }

    /// Bundle this response with its quiz into the snapshot the results
    /// view consumes.
    pub fn into_session(self, document: Document, questions: Vec<Question>) -> SessionSnapshot {
        SessionSnapshot {
            document: Some(document),
            user_answers: self.answer_map(),
            quiz_result: Some(self.summary()),
            questions,
        }
    }
}

/// Grade a submission against the questions of its document.
pub fn grade_submission(
    document: &Document,
    questions: &[Question],
    answers: &[SubmittedAnswer],
    user_name: Option<&str>,
) -> Result<QuizResponse, SubmissionError> {
    if questions.is_empty() {
        return Err(SubmissionError::NoQuestions {
            document_id: document.id,
        });
    }

    let by_id: HashMap<i64, &Question> = questions.iter().map(|q| (q.id, q)).collect();

    let mut selections: UserAnswerMap = BTreeMap::new();
    for answer in answers {
        let question = by_id
            .get(&answer.question_id)
            .ok_or(SubmissionError::UnknownQuestion(answer.question_id))?;
        if question.find_answer(answer.selected_answer_id).is_none() {
            return Err(SubmissionError::UnknownAnswer {
                question_id: answer.question_id,
                answer_id: answer.selected_answer_id,
            });
        }
        if selections
            .insert(answer.question_id, answer.selected_answer_id)
            .is_some()
        {
            return Err(SubmissionError::DuplicateAnswer(answer.question_id));
        }
    }

    let review = evaluate(questions, &selections);
    let summary = ScoreSummary::from_review(&review);
    let verdicts: HashMap<i64, bool> = review
        .iter()
        .map(|e| (e.question.id, e.is_correct))
        .collect();

    let user_answers = answers
        .iter()
        .map(|a| UserAnswerRecord {
            question_id: a.question_id,
            selected_answer_id: a.selected_answer_id,
            is_correct: verdicts.get(&a.question_id).copied().unwrap_or(false),
        })
        .collect();

    let user_name = user_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(ANONYMOUS)
        .to_string();

    tracing::info!(
        document_id = document.id,
        user = %user_name,
        score = summary.score,
        total = summary.total_questions,
        "graded quiz submission"
    );

    Ok(QuizResponse {
        id: Uuid::new_v4(),
        document_id: document.id,
        user_name,
        score: summary.score,
        total_questions: summary.total_questions,
        submitted_at: Utc::now(),
        user_answers,
    })
}

impl Submission {
    /// Grade this submission and build the session snapshot for its results.
    pub fn grade(self) -> Result<(QuizResponse, SessionSnapshot), SubmissionError> {
        let response = grade_submission(
            &self.document,
            &self.questions,
            &self.answers,
            self.user_name.as_deref(),
        )?;
        let session = response.clone().into_session(self.document, self.questions);
        Ok((response, session))
    }
}
