//! The `quizgrade init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("quizgrade.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("sessions")?;
    write_if_missing(Path::new("sessions/example.json"), EXAMPLE_SESSION)?;

    std::fs::create_dir_all("submissions")?;
    write_if_missing(Path::new("submissions/example.json"), EXAMPLE_SUBMISSION)?;

    println!("\nNext steps:");
    println!("  1. Run: quizgrade validate --session sessions/example.json");
    println!("  2. Run: quizgrade review --session sessions/example.json");
    println!("  3. Run: quizgrade grade --submission submissions/example.json");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizgrade configuration

# Output format when --format is not given: text, json, markdown
default_format = "text"

# Show the correct choice next to missed questions
show_correct_answers = true

# Exit with status 1 when a reviewed score is below this percentage
# fail_below = 60.0
"#;

const EXAMPLE_SESSION: &str = r#"{
  "document": { "id": 1, "title": "The Water Cycle" },
  "questions": [
    {
      "id": 1,
      "question_text": "What powers evaporation?",
      "answers": [
        { "id": 1, "choice_letter": "A", "choice_text": "The sun", "is_correct": true },
        { "id": 2, "choice_letter": "B", "choice_text": "The moon", "is_correct": false },
        { "id": 3, "choice_letter": "C", "choice_text": "Wind alone", "is_correct": false },
        { "id": 4, "choice_letter": "D", "choice_text": "Gravity", "is_correct": false }
      ]
    },
    {
      "id": 2,
      "question_text": "What is water vapor turning into liquid called?",
      "answers": [
        { "id": 1, "choice_letter": "A", "choice_text": "Condensation", "is_correct": true },
        { "id": 2, "choice_letter": "B", "choice_text": "Sublimation", "is_correct": false },
        { "id": 3, "choice_letter": "C", "choice_text": "Runoff", "is_correct": false },
        { "id": 4, "choice_letter": "D", "choice_text": "Infiltration", "is_correct": false }
      ]
    },
    {
      "id": 3,
      "question_text": "Which of these is a form of precipitation?",
      "answers": [
        { "id": 1, "choice_letter": "A", "choice_text": "Fog", "is_correct": false },
        { "id": 2, "choice_letter": "B", "choice_text": "Hail", "is_correct": true },
        { "id": 3, "choice_letter": "C", "choice_text": "Dew", "is_correct": false },
        { "id": 4, "choice_letter": "D", "choice_text": "Steam", "is_correct": false }
      ]
    }
  ],
  "user_answers": { "1": 1, "2": 3, "3": 2 },
  "quiz_result": { "score": 2, "total_questions": 3, "percentage": 67.0 }
}
"#;

const EXAMPLE_SUBMISSION: &str = r#"{
  "document": { "id": 1, "title": "The Water Cycle" },
  "questions": [
    {
      "id": 1,
      "question_text": "What powers evaporation?",
      "answers": [
        { "id": 1, "choice_letter": "A", "choice_text": "The sun", "is_correct": true },
        { "id": 2, "choice_letter": "B", "choice_text": "The moon", "is_correct": false }
      ]
    },
    {
      "id": 2,
      "question_text": "What is water vapor turning into liquid called?",
      "answers": [
        { "id": 1, "choice_letter": "A", "choice_text": "Condensation", "is_correct": true },
        { "id": 2, "choice_letter": "B", "choice_text": "Sublimation", "is_correct": false }
      ]
    }
  ],
  "answers": [
    { "question_id": 1, "selected_answer_id": 1 },
    { "question_id": 2, "selected_answer_id": 1 }
  ],
  "user_name": "Student"
}
"#;
