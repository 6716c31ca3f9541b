//! The `quizgrade validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizgrade_core::session::SessionSnapshot;
use quizgrade_core::validate::validate_session;

pub fn execute(session_path: PathBuf) -> Result<()> {
    let Some(session) = SessionSnapshot::load_json(&session_path)? else {
        anyhow::bail!("{} contains no session", session_path.display());
    };

    let title = session
        .document
        .as_ref()
        .map(|d| d.title.as_str())
        .unwrap_or("untitled");
    println!("Session: {} ({} questions)", title, session.questions.len());

    let warnings = validate_session(&session);
    for w in &warnings {
        let prefix = w
            .question_id
            .map(|id| format!("  [question {id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Session is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
