use chrono::{DateTime, Utc};
use std::fmt;

/// Discrete band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreTier {
    VeryLow,
    Low,
    Moderate,
    Good,
    Excellent,
}

impl ScoreTier {
    /// Total over f64: anything below 20, NaN included, is Very Low.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::Excellent
        } else if score >= 60.0 {
            ScoreTier::Good
        } else if score >= 40.0 {
            ScoreTier::Moderate
        } else if score >= 20.0 {
            ScoreTier::Low
        } else {
            ScoreTier::VeryLow
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent",
            ScoreTier::Good => "Good",
            ScoreTier::Moderate => "Moderate",
            ScoreTier::Low => "Low",
            ScoreTier::VeryLow => "Very Low",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for the backend's free-form `difficulty_estimate`.
pub fn difficulty_label(estimate: Option<&str>) -> &'static str {
    match estimate {
        Some("easy") => "Easy",
        Some("medium") => "Medium",
        Some("hard") => "Hard",
        _ => "Unknown",
    }
}

/// 1234 -> "1.2K", 2500000 -> "2.5M".
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Coarse relative time ("3d ago"). Months are 30 days, years 365.
pub fn time_ago(at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(at) = at else {
        return "Unknown".to_string();
    };
    let seconds = (now - at).num_seconds();

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else if seconds < 2_592_000 {
        format!("{}d ago", seconds / 86_400)
    } else if seconds < 31_536_000 {
        format!("{}mo ago", seconds / 2_592_000)
    } else {
        format!("{}y ago", seconds / 31_536_000)
    }
}
