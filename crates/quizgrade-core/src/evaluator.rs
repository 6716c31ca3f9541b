//! Review assembly and score aggregation.
//!
//! `evaluate` is the single source of truth for per-question correctness;
//! `aggregate` only counts what `evaluate` decided.

use serde::Serialize;

use crate::model::{Answer, Question, ScoreSummary, UserAnswerMap};

/// The verdict for one question of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewEntry<'a> {
    /// The question being reviewed.
    pub question: &'a Question,
    /// The user's choice, if any resolvable one was made.
    pub selected_answer: Option<&'a Answer>,
    /// `true` only when a selection exists and it is marked correct.
    pub is_correct: bool,
    /// The choice reported as correct, if the question has one.
    pub correct_answer: Option<&'a Answer>,
}

impl ReviewEntry<'_> {
    /// Whether the question was left unanswered (or the selection did not resolve).
    pub fn is_unanswered(&self) -> bool {
        self.selected_answer.is_none()
    }
}

/// Evaluate every question against the user's selections.
///
/// Output has exactly one entry per input question, in input order.
pub fn evaluate<'a>(
    questions: &'a [Question],
    user_answers: &UserAnswerMap,
) -> Vec<ReviewEntry<'a>> {
    questions
        .iter()
        .map(|question| review_question(question, user_answers))
        .collect()
}

fn review_question<'a>(question: &'a Question, user_answers: &UserAnswerMap) -> ReviewEntry<'a> {
    let selected_answer = user_answers.get(&question.id).and_then(|&answer_id| {
        let resolved = question.find_answer(answer_id);
        if resolved.is_none() {
            tracing::debug!(
                question_id = question.id,
                answer_id,
                "selected answer does not resolve, treating as unanswered"
            );
        }
        resolved
    });

    ReviewEntry {
        question,
        selected_answer,
        is_correct: selected_answer.is_some_and(|a| a.is_correct),
        correct_answer: question.correct_answer(),
    }
}

impl ScoreSummary {
    /// Summarize an already evaluated review.
    pub fn from_review(review: &[ReviewEntry<'_>]) -> Self {
        let score = review.iter().filter(|e| e.is_correct).count();
        ScoreSummary::new(saturating_u32(score), saturating_u32(review.len()))
    }
}

fn saturating_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Recompute the score summary from questions and selections.
pub fn aggregate(questions: &[Question], user_answers: &UserAnswerMap) -> ScoreSummary {
    ScoreSummary::from_review(&evaluate(questions, user_answers))
}
