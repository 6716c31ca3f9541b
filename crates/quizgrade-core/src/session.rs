//! Session snapshots with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::evaluator::{aggregate, evaluate, ReviewEntry};
use crate::model::{Document, Question, ScoreSummary, UserAnswerMap};

/// Everything captured when a quiz is submitted.
///
/// Built once by the quiz-taking flow and handed, unchanged, to the
/// results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The document the quiz was generated from.
    #[serde(default)]
    pub document: Option<Document>,
    /// Questions in display order.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// The user's selections.
    #[serde(default)]
    pub user_answers: UserAnswerMap,
    /// Score summary as computed at submission time.
    #[serde(default)]
    pub quiz_result: Option<ScoreSummary>,
}

impl SessionSnapshot {
    /// Review every question of this session.
    pub fn review(&self) -> Vec<ReviewEntry<'_>> {
        evaluate(&self.questions, &self.user_answers)
    }

    /// Recompute the summary from the questions and selections.
    pub fn recompute_summary(&self) -> ScoreSummary {
        aggregate(&self.questions, &self.user_answers)
    }

    /// Save the snapshot as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize session")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write session to {}", path.display()))?;
        Ok(())
    }

    /// Load a snapshot from a JSON file.
    ///
    /// A file containing `null` yields `Ok(None)`: there is no session to
    /// show, which is for the caller to handle.
    pub fn load_json(path: &Path) -> Result<Option<Self>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read session from {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("failed to parse session JSON: {}", path.display()))
    }

    /// Parse a snapshot from a JSON string. Blank input and `null` yield `None`.
    pub fn from_json_str(content: &str) -> Result<Option<Self>> {
        if content.trim().is_empty() {
            return Ok(None);
        }
        let snapshot: Option<SessionSnapshot> = serde_json::from_str(content)?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;

    const SESSION_JSON: &str = r#"{
        "document": { "id": 3, "title": "The Water Cycle" },
        "questions": [
            {
                "id": 11,
                "question_text": "What drives evaporation?",
                "answers": [
                    { "id": 1, "choice_letter": "A", "choice_text": "The moon", "is_correct": false },
                    { "id": 2, "choice_letter": "B", "choice_text": "The sun", "is_correct": true }
                ]
            }
        ],
        "user_answers": { "11": 2 },
        "quiz_result": { "score": 1, "total_questions": 1, "percentage": 100.0 }
    }"#;

    #[test]
    fn parse_session_json() {
        let snapshot = SessionSnapshot::from_json_str(SESSION_JSON)
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.document.as_ref().map(|d| d.id), Some(3));
        assert_eq!(snapshot.questions[0].answers.len(), 2);
        assert_eq!(snapshot.user_answers.get(&11), Some(&2));
        assert_eq!(snapshot.recompute_summary().score, 1);
    }

    #[test]
    fn null_and_blank_mean_no_session() {
        assert!(SessionSnapshot::from_json_str("null").unwrap().is_none());
        assert!(SessionSnapshot::from_json_str("  \n").unwrap().is_none());
    }

    #[test]
    fn missing_fields_default() {
        let snapshot = SessionSnapshot::from_json_str("{}").unwrap().unwrap();
        assert!(snapshot.questions.is_empty());
        assert!(snapshot.quiz_result.is_none());
        assert!(snapshot.review().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SessionSnapshot::from_json_str("{ not json").is_err());
    }

    #[test]
    fn json_roundtrip() {
        let snapshot = SessionSnapshot {
            document: Some(Document {
                id: 1,
                title: "Doc".into(),
            }),
            questions: vec![Question {
                id: 1,
                question_text: "Q?".into(),
                answers: vec![Answer {
                    id: 1,
                    choice_letter: "A".into(),
                    choice_text: "yes".into(),
                    is_correct: true,
                }],
                explanation: Some("Because.".into()),
            }],
            user_answers: [(1, 1)].into_iter().collect(),
            quiz_result: Some(ScoreSummary::new(1, 1)),
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions").join("session.json");

        snapshot.save_json(&path).unwrap();
        let loaded = SessionSnapshot::load_json(&path).unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }
}
