//! Rendering of results views for the terminal.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizgrade_core::results::ResultsView;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Pick the format from the flag, falling back to the configured default.
pub fn resolve_format(flag: Option<&str>, default: &str) -> Result<OutputFormat> {
    flag.unwrap_or(default)
        .parse::<OutputFormat>()
        .map_err(|e: String| anyhow::anyhow!("{}", e))
}

/// Render a results view in the requested format.
pub fn render(
    view: &ResultsView<'_>,
    format: OutputFormat,
    show_correct_answers: bool,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(view)?,
        OutputFormat::Markdown => view.render_markdown(show_correct_answers),
        OutputFormat::Text => render_text(view, show_correct_answers),
    };
    Ok(rendered)
}

fn render_text(view: &ResultsView<'_>, show_correct_answers: bool) -> String {
    let mut out = String::new();

    if let Some(title) = view.document_title {
        out.push_str(&format!("Results for: {title}\n"));
    }
    out.push_str(&format!(
        "{}% [{}] {}\n",
        view.summary.percentage, view.color, view.classification.message
    ));
    out.push_str(&format!("{}\n", view.headline()));
    if view.summary_mismatch {
        out.push_str(&format!(
            "Note: the stored result was {} out of {} ({}%).\n",
            view.supplied.score, view.supplied.total_questions, view.supplied.percentage
        ));
    }

    if view.review.is_empty() {
        return out;
    }

    let mut table = Table::new();
    let mut header = vec!["#", "Question", "Result", "Your answer"];
    if show_correct_answers {
        header.push("Correct answer");
    }
    table.set_header(header);

    for (index, entry) in view.review.iter().enumerate() {
        let mut row = vec![
            Cell::new(index + 1),
            Cell::new(&entry.question.question_text),
            Cell::new(if entry.is_correct { "Correct" } else { "Incorrect" }),
            Cell::new(
                entry
                    .selected_answer
                    .map(|a| a.label())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ];
        if show_correct_answers {
            let correct = if entry.is_correct {
                String::new()
            } else {
                entry
                    .correct_answer
                    .map(|a| a.label())
                    .unwrap_or_else(|| "-".to_string())
            };
            row.push(Cell::new(correct));
        }
        table.add_row(row);
    }

    out.push_str(&format!("\n{table}\n"));

    let explained: Vec<_> = view
        .review
        .iter()
        .enumerate()
        .filter(|(_, entry)| !entry.is_correct)
        .filter_map(|(index, entry)| {
            entry
                .question
                .explanation
                .as_deref()
                .map(|text| (index + 1, text))
        })
        .collect();
    if !explained.is_empty() {
        out.push_str("\nExplanations:\n");
        for (number, text) in explained {
            out.push_str(&format!("  {number}. {text}\n"));
        }
    }
    out
}
