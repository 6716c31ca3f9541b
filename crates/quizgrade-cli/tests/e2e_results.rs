//! End-to-end tests of the results pipeline.
//!
//! Submission → graded response → session snapshot → results view, checking
//! that every stage agrees on correctness.

use quizgrade_core::evaluator::{aggregate, evaluate};
use quizgrade_core::model::{Answer, Document, Question, ScoreSummary, UserAnswerMap};
use quizgrade_core::results::ResultsView;
use quizgrade_core::session::SessionSnapshot;
use quizgrade_core::submission::{grade_submission, Submission, SubmittedAnswer};
use quizgrade_core::tier::{classify, Tier};
use quizgrade_core::validate::validate_session;

fn document() -> Document {
    Document {
        id: 17,
        title: "The French Revolution".into(),
    }
}

/// Seven four-choice questions, as the generator produces them.
fn questions() -> Vec<Question> {
    (1..=7)
        .map(|id| Question {
            id,
            question_text: format!("Question {id}"),
            answers: ["A", "B", "C", "D"]
                .iter()
                .zip(1..)
                .map(|(letter, answer_id)| Answer {
                    id: answer_id,
                    choice_letter: letter.to_string(),
                    choice_text: format!("Choice {letter}"),
                    is_correct: answer_id == (id % 4) + 1,
                })
                .collect(),
            explanation: Some(format!("Explanation {id}")),
        })
        .collect()
}

fn correct_choice(question_id: i64) -> i64 {
    (question_id % 4) + 1
}

#[test]
fn e2e_perfect_submission() {
    let answers: Vec<SubmittedAnswer> = (1..=7)
        .map(|id| SubmittedAnswer {
            question_id: id,
            selected_answer_id: correct_choice(id),
        })
        .collect();

    let submission = Submission {
        document: document(),
        questions: questions(),
        answers,
        user_name: Some("Marie".into()),
    };
    let (response, session) = submission.grade().unwrap();
    assert_eq!(response.score, 7);
    assert!(response.user_answers.iter().all(|r| r.is_correct));

    let view = ResultsView::build(Some(&session)).unwrap();
    assert_eq!(view.summary.percentage, 100.0);
    assert_eq!(view.classification.tier, Tier::Excellent);
    assert!(validate_session(&session).is_empty());
}

#[test]
fn e2e_partial_submission_agrees_everywhere() {
    let questions = questions();
    // Correct on 1, 2, 3 and 5; wrong on 4; 6 and 7 unanswered.
    let answers = vec![
        SubmittedAnswer { question_id: 1, selected_answer_id: correct_choice(1) },
        SubmittedAnswer { question_id: 2, selected_answer_id: correct_choice(2) },
        SubmittedAnswer { question_id: 3, selected_answer_id: correct_choice(3) },
        SubmittedAnswer { question_id: 4, selected_answer_id: correct_choice(4) % 4 + 1 },
        SubmittedAnswer { question_id: 5, selected_answer_id: correct_choice(5) },
    ];

    let response = grade_submission(&document(), &questions, &answers, None).unwrap();
    assert_eq!(response.score, 4);
    assert_eq!(response.total_questions, 7);
    // 4/7 = 57.14 -> 57
    assert_eq!(response.summary().percentage, 57.0);

    let session = response.clone().into_session(document(), questions.clone());
    let view = ResultsView::build(Some(&session)).unwrap();
    assert!(!view.summary_mismatch);
    assert_eq!(view.classification.tier, Tier::NeedsWork);

    let md = view.to_markdown();
    for id in [4, 6, 7] {
        assert!(md.contains(&format!("Explanation: Explanation {id}\n")));
    }
    assert!(!md.contains("Explanation: Explanation 1\n"));

    let review = evaluate(&questions, &session.user_answers);
    let unanswered: Vec<i64> = review
        .iter()
        .filter(|e| e.is_unanswered())
        .map(|e| e.question.id)
        .collect();
    assert_eq!(unanswered, vec![6, 7]);
    assert_eq!(
        aggregate(&questions, &session.user_answers).score,
        review.iter().filter(|e| e.is_correct).count() as u32
    );
}

#[test]
fn e2e_snapshot_survives_json() {
    let questions = questions();
    let user_answers: UserAnswerMap = [(1, correct_choice(1)), (2, 9)].into_iter().collect();
    let snapshot = SessionSnapshot {
        document: Some(document()),
        quiz_result: Some(aggregate(&questions, &user_answers)),
        questions,
        user_answers,
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    snapshot.save_json(&path).unwrap();
    let loaded = SessionSnapshot::load_json(&path).unwrap().unwrap();

    let before = ResultsView::build(Some(&snapshot)).unwrap();
    let after = ResultsView::build(Some(&loaded)).unwrap();
    assert_eq!(before, after);
    assert_eq!(after.summary, ScoreSummary::new(1, 7));
    assert_eq!(classify(after.summary.percentage).tier, Tier::NeedsWork);
}
