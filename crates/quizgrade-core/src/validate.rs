//! Consistency checks for session snapshots.
//!
//! Evaluation tolerates all of these; validation only reports them so that
//! upstream data problems are visible.

use std::collections::HashSet;

use crate::session::SessionSnapshot;

/// A warning from session validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<i64>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn question(question_id: i64, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(question_id),
            message: message.into(),
        }
    }

    fn session(message: impl Into<String>) -> Self {
        Self {
            question_id: None,
            message: message.into(),
        }
    }
}

/// Validate a session snapshot for upstream data problems.
pub fn validate_session(session: &SessionSnapshot) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate question ids
    let mut seen_questions = HashSet::new();
    for question in &session.questions {
        if !seen_questions.insert(question.id) {
            warnings.push(ValidationWarning::question(
                question.id,
                format!("duplicate question ID: {}", question.id),
            ));
        }
    }

    for question in &session.questions {
        // Duplicate answer ids within a question
        let mut seen_answers = HashSet::new();
        for answer in &question.answers {
            if !seen_answers.insert(answer.id) {
                warnings.push(ValidationWarning::question(
                    question.id,
                    format!("duplicate answer ID: {}", answer.id),
                ));
            }
        }

        match question.correct_count() {
            0 => warnings.push(ValidationWarning::question(
                question.id,
                "no answer is marked correct",
            )),
            1 => {}
            n => {
                let reported = question
                    .correct_answer()
                    .map(|a| a.choice_letter.clone())
                    .unwrap_or_default();
                warnings.push(ValidationWarning::question(
                    question.id,
                    format!("{n} answers are marked correct; reporting {reported}"),
                ));
            }
        }
    }

    // Selections that do not line up with the questions
    for (&question_id, &answer_id) in &session.user_answers {
        match session.questions.iter().find(|q| q.id == question_id) {
            None => warnings.push(ValidationWarning::question(
                question_id,
                "answer given for a question that is not in the session",
            )),
            Some(question) if question.find_answer(answer_id).is_none() => {
                warnings.push(ValidationWarning::question(
                    question_id,
                    format!("selected answer {answer_id} is not a choice of this question"),
                ));
            }
            Some(_) => {}
        }
    }

    if let Some(supplied) = &session.quiz_result {
        if !supplied.is_well_formed() {
            warnings.push(ValidationWarning::session(format!(
                "score summary is out of range: {}/{} at {}%",
                supplied.score, supplied.total_questions, supplied.percentage
            )));
        }
        let recomputed = session.recompute_summary();
        if !supplied.same_counts(&recomputed) {
            warnings.push(ValidationWarning::session(format!(
                "score summary says {}/{} but the answers add up to {}/{}",
                supplied.score,
                supplied.total_questions,
                recomputed.score,
                recomputed.total_questions
            )));
        }
    } else {
        warnings.push(ValidationWarning::session("session has no score summary"));
    }

    warnings
}
