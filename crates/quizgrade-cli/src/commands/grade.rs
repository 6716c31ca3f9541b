//! The `quizgrade grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizgrade_core::results::ResultsView;
use quizgrade_core::submission::Submission;

use crate::config::load_config_from;
use crate::output::{render, resolve_format, OutputFormat};

pub fn execute(
    submission_path: PathBuf,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = resolve_format(format.as_deref(), &config.default_format)?;

    let content = std::fs::read_to_string(&submission_path).with_context(|| {
        format!(
            "failed to read submission from {}",
            submission_path.display()
        )
    })?;
    let submission: Submission = serde_json::from_str(&content).with_context(|| {
        format!(
            "failed to parse submission JSON: {}",
            submission_path.display()
        )
    })?;

    let (response, session) = submission.grade()?;
    let view = ResultsView::build(Some(&session))?;

    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "response": response,
                "results": view,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        _ => {
            println!(
                "Response {}: {} scored {}/{}",
                response.id, response.user_name, response.score, response.total_questions
            );
            println!();
            println!("{}", render(&view, format, config.show_correct_answers)?);
        }
    }

    Ok(())
}
