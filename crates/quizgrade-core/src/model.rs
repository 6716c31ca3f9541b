//! Core data model types for quizgrade.
//!
//! These mirror the data contract of the quiz backend: documents, the
//! questions generated from them, and the answer choices of each question.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Question id → selected answer id.
///
/// A question absent from the map was left unanswered. Ordered so that
/// anything derived from it is deterministic.
pub type UserAnswerMap = BTreeMap<i64, i64>;

/// The source material a quiz was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub title: String,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique within a session.
    pub id: i64,
    /// The question prompt.
    pub question_text: String,
    /// Answer choices in display order.
    #[serde(default)]
    pub answers: Vec<Answer>,
    /// Optional explanation of the correct answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// One answer choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Unique within its parent question only.
    pub id: i64,
    /// Display letter, e.g. "A".
    pub choice_letter: String,
    pub choice_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl Question {
    /// Find the choice with the given id among this question's answers.
    pub fn find_answer(&self, answer_id: i64) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }

    /// The choice reported as "the" correct answer.
    ///
    /// With several choices marked correct, the one with the lowest
    /// `choice_letter` wins; equal letters keep list order. `None` when no
    /// choice is marked correct.
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.answers
            .iter()
            .filter(|a| a.is_correct)
            .reduce(|best, a| {
                if a.choice_letter < best.choice_letter {
                    a
                } else {
                    best
                }
            })
    }

    /// Number of choices marked correct.
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }
}

impl Answer {
    /// Format as `"B) Paris"`, the way choices are shown in a review.
    pub fn label(&self) -> String {
        format!("{}) {}", self.choice_letter, self.choice_text)
    }
}

/// Aggregate score of a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Number of correctly answered questions.
    pub score: u32,
    /// Number of questions in the quiz.
    pub total_questions: u32,
    /// `score / total_questions * 100`. Recomputed summaries are always
    /// whole numbers; supplied ones may carry decimals.
    pub percentage: f64,
}

impl ScoreSummary {
    /// Build a summary, computing the percentage with round-half-up.
    ///
    /// `score` is clamped to `total_questions`.
    pub fn new(score: u32, total_questions: u32) -> Self {
        let score = score.min(total_questions);
        Self {
            score,
            total_questions,
            percentage: f64::from(percentage_half_up(score, total_questions)),
        }
    }

    /// Whether two summaries agree on the counts.
    ///
    /// Percentages are not compared since supplied summaries may round
    /// differently.
    pub fn same_counts(&self, other: &ScoreSummary) -> bool {
        self.score == other.score && self.total_questions == other.total_questions
    }

    /// Whether the summary respects `score <= total` and `0 <= percentage <= 100`.
    pub fn is_well_formed(&self) -> bool {
        self.score <= self.total_questions && (0.0..=100.0).contains(&self.percentage)
    }
}

/// Integer percentage with round-half-up; `0` when `total` is zero.
pub fn percentage_half_up(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score.min(total));
    let total = u64::from(total);
    // floor((200 * score + total) / (2 * total)) == floor(100 * score / total + 0.5)
    ((200 * score + total) / (2 * total)) as u32
}
