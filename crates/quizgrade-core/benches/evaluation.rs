use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizgrade_core::evaluator::{aggregate, evaluate};
use quizgrade_core::model::{Answer, Question, UserAnswerMap};
use quizgrade_core::tier::classify;

fn make_quiz(size: i64) -> (Vec<Question>, UserAnswerMap) {
    let questions = (1..=size)
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
            explanation: None,
        })
        .collect();
    // Every third question unanswered, the rest answered "B".
    let answers = (1..=size).filter(|id| id % 3 != 0).map(|id| (id, 2)).collect();
    (questions, answers)
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for size in [7, 50, 500] {
        let (questions, answers) = make_quiz(size);
        group.bench_function(format!("questions={size}"), |b| {
            b.iter(|| evaluate(black_box(&questions), black_box(&answers)))
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let (questions, answers) = make_quiz(50);

    group.bench_function("questions=50", |b| {
        b.iter(|| aggregate(black_box(&questions), black_box(&answers)))
    });

    group.bench_function("classify", |b| b.iter(|| classify(black_box(66.67))));

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_aggregate);
criterion_main!(benches);
