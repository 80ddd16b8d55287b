// src/models/statistics.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::level::Level;

/// Count of results at one level and its share of all results, e.g. `"33.33%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelStat {
    pub count: u64,
    pub percentage: String,
}

/// Statistics feed. `level_stats` always holds every `Level`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    /// Number of results, not distinct students.
    pub total_students: u64,
    pub level_stats: BTreeMap<Level, LevelStat>,
}
