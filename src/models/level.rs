// src/models/level.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Proficiency tier derived from a percentage score.
///
/// Variants are declared from highest to lowest, so the derived `Ord`
/// sorts `Advanced` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Advanced,
    Intermediate,
    Beginner,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

/// Tier boundaries evaluated top-down. Each lower bound is inclusive.
pub const LEVEL_THRESHOLDS: [(f64, Level); 3] = [
    (90.0, Level::Advanced),
    (70.0, Level::Intermediate),
    (50.0, Level::Beginner),
];

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Advanced,
        Level::Intermediate,
        Level::Beginner,
        Level::NeedsImprovement,
    ];

    /// Label used in the `results.level` column and in JSON feeds.
    pub fn label(self) -> &'static str {
        match self {
            Level::Advanced => "Advanced",
            Level::Intermediate => "Intermediate",
            Level::Beginner => "Beginner",
            Level::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Russian/English label written by earlier deployments sharing `test_results.db`.
    pub fn legacy_label(self) -> &'static str {
        match self {
            Level::Advanced => "Продвинутый (Advanced)",
            Level::Intermediate => "Средний (Intermediate)",
            Level::Beginner => "Начальный (Beginner)",
            Level::NeedsImprovement => "Нуждается в улучшении (Needs Improvement)",
        }
    }

    /// Accepts both the current and the legacy label.
    pub fn from_label(label: &str) -> Option<Level> {
        Level::ALL
            .into_iter()
            .find(|level| level.label() == label || level.legacy_label() == label)
    }

    /// Maps a percentage in `[0, 100]` to its tier.
    pub fn from_percentage(percentage: f64) -> Level {
        LEVEL_THRESHOLDS
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(Level::NeedsImprovement)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `100 * score / total`, or 0.0 for an empty question set.
pub fn percentage(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * f64::from(score) / f64::from(total)
}

/// Classifies a raw score. An empty question set is always `NeedsImprovement`.
pub fn classify(score: u32, total: u32) -> Level {
    Level::from_percentage(percentage(score, total))
}
