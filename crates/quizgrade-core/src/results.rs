//! The results page view model.
//!
//! Collects everything the results page displays so the UI layer only
//! formats values and never computes any.

use serde::Serialize;

use crate::error::QuizError;
use crate::evaluator::ReviewEntry;
use crate::model::ScoreSummary;
use crate::session::SessionSnapshot;
use crate::tier::{classify, score_color, Classification, ScoreColor};

/// Fully evaluated results of one quiz session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView<'a> {
    /// Title of the source document, if known.
    pub document_title: Option<&'a str>,
    /// The summary shown on the page, recomputed from the review.
    pub summary: ScoreSummary,
    /// The summary handed over with the session.
    pub supplied: ScoreSummary,
    /// Set when the supplied summary disagrees with the review on counts.
    pub summary_mismatch: bool,
    pub classification: Classification,
    pub color: ScoreColor,
    pub review: Vec<ReviewEntry<'a>>,
}

impl<'a> ResultsView<'a> {
    /// Build the results view for a completed session.
    ///
    /// Fails when there is nothing to show; callers redirect in that case.
    pub fn build(snapshot: Option<&'a SessionSnapshot>) -> Result<Self, QuizError> {
        let snapshot = snapshot.ok_or(QuizError::MissingSession)?;
        let supplied = snapshot.quiz_result.ok_or(QuizError::MissingSummary)?;

        let review = snapshot.review();
        let summary = ScoreSummary::from_review(&review);
        let summary_mismatch = !supplied.same_counts(&summary);
        if summary_mismatch {
            tracing::warn!(
                supplied_score = supplied.score,
                supplied_total = supplied.total_questions,
                recomputed_score = summary.score,
                recomputed_total = summary.total_questions,
                "supplied score summary disagrees with the answers"
            );
        }

        Ok(Self {
            document_title: snapshot.document.as_ref().map(|d| d.title.as_str()),
            summary,
            supplied,
            summary_mismatch,
            classification: classify(summary.percentage),
            color: score_color(summary.percentage),
            review,
        })
    }

    /// "You scored 2 out of 3 questions correctly"
    pub fn headline(&self) -> String {
        format!(
            "You scored {} out of {} questions correctly",
            self.summary.score, self.summary.total_questions
        )
    }

    /// Render the results page as markdown.
    pub fn to_markdown(&self) -> String {
        self.render_markdown(true)
    }

    /// Render as markdown, optionally leaving out the correct choice of
    /// missed questions.
    pub fn render_markdown(&self, show_correct_answers: bool) -> String {
        let mut md = String::new();

        md.push_str("# Quiz Complete!\n\n");
        if let Some(title) = self.document_title {
            md.push_str(&format!("Here are your results for: **{title}**\n\n"));
        }
        md.push_str(&format!(
            "## {}% - {}\n\n",
            self.summary.percentage, self.classification.message
        ));
        md.push_str(&format!("{}\n\n", self.headline()));

        if self.summary_mismatch {
            md.push_str(&format!(
                "> Note: the stored result was {} out of {} ({}%).\n\n",
                self.supplied.score, self.supplied.total_questions, self.supplied.percentage
            ));
        }

        if self.review.is_empty() {
            return md;
        }

        md.push_str("### Question Review\n\n");
        for (index, entry) in self.review.iter().enumerate() {
            let verdict = if entry.is_correct { "Correct" } else { "Incorrect" };
            md.push_str(&format!(
                "{}. {} - **{}**\n",
                index + 1,
                entry.question.question_text,
                verdict
            ));

            let yours = entry
                .selected_answer
                .map(|a| a.label())
                .unwrap_or_else(|| "No answer".to_string());
            md.push_str(&format!("   - Your answer: {yours}\n"));

            if show_correct_answers && !entry.is_correct {
                if let Some(correct) = entry.correct_answer {
                    md.push_str(&format!("   - Correct answer: {}\n", correct.label()));
                }
            }
            if !entry.is_correct {
                if let Some(explanation) = &entry.question.explanation {
                    md.push_str(&format!("   - Explanation: {explanation}\n"));
                }
            }
        }

        md
    }
}
