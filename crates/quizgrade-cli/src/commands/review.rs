//! The `quizgrade review` command.

use std::path::PathBuf;

use anyhow::Result;

use quizgrade_core::results::ResultsView;
use quizgrade_core::session::SessionSnapshot;

use crate::config::load_config_from;
use crate::output::{render, resolve_format};

/// Exit status when there is no session to review.
const EXIT_NO_SESSION: i32 = 2;

pub fn execute(
    session_path: PathBuf,
    format: Option<String>,
    fail_below: Option<f64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = resolve_format(format.as_deref(), &config.default_format)?;
    let threshold = fail_below.or(config.fail_below);
    if let Some(t) = threshold {
        anyhow::ensure!(
            (0.0..=100.0).contains(&t),
            "fail-below must be between 0 and 100"
        );
    }

    let snapshot = SessionSnapshot::load_json(&session_path)?;
    let view = match ResultsView::build(snapshot.as_ref()) {
        Ok(view) => view,
        Err(e) => {
            tracing::info!("{e}");
            eprintln!("No quiz results to display; returning to home.");
            std::process::exit(EXIT_NO_SESSION);
        }
    };

    println!("{}", render(&view, format, config.show_correct_answers)?);

    if let Some(t) = threshold {
        if view.summary.percentage < t {
            eprintln!(
                "Score {}% is below the required {}%",
                view.summary.percentage, t
            );
            std::process::exit(1);
        }
    }

    Ok(())
}
