//! Feedback tiers and score colors.
//!
//! Two independent classifications over the same percentage. The message
//! tiers top out at 90, the color scale at 80, so one must never be derived
//! from the other.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Five-level feedback tier, used to pick the results message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Excellent,
    Great,
    Good,
    Fair,
    NeedsWork,
}

impl Tier {
    /// Tiers with their inclusive lower bounds, highest first.
    const THRESHOLDS: [(f64, Tier); 4] = [
        (90.0, Tier::Excellent),
        (80.0, Tier::Great),
        (70.0, Tier::Good),
        (60.0, Tier::Fair),
    ];

    /// The feedback message shown for this tier.
    pub fn message(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent work!",
            Tier::Great => "Great job!",
            Tier::Good => "Good work!",
            Tier::Fair => "Not bad!",
            Tier::NeedsWork => "Keep practicing.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Great => "great",
            Tier::Good => "good",
            Tier::Fair => "fair",
            Tier::NeedsWork => "needsWork",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse visual severity of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreColor {
    Positive,
    Neutral,
    Negative,
}

impl ScoreColor {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreColor::Positive => "positive",
            ScoreColor::Neutral => "neutral",
            ScoreColor::Negative => "negative",
        }
    }
}

impl fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tier together with its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tier: Tier,
    pub message: &'static str,
}

/// Clamp a percentage into `[0, 100]`. NaN counts as zero.
pub fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Classify a percentage into a feedback tier.
///
/// Out-of-range input is clamped rather than rejected.
pub fn classify(percentage: f64) -> Classification {
    let percentage = clamp_percentage(percentage);
    let tier = Tier::THRESHOLDS
        .iter()
        .find(|(bound, _)| percentage >= *bound)
        .map(|&(_, tier)| tier)
        .unwrap_or(Tier::NeedsWork);
    Classification {
        tier,
        message: tier.message(),
    }
}

/// Map a percentage to its display color.
pub fn score_color(percentage: f64) -> ScoreColor {
    let percentage = clamp_percentage(percentage);
    if percentage >= 80.0 {
        ScoreColor::Positive
    } else if percentage >= 60.0 {
        ScoreColor::Neutral
    } else {
        ScoreColor::Negative
    }
}
