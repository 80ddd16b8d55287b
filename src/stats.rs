//! Level statistics over the result ledger.

use std::collections::BTreeMap;

use crate::models::{
    level::Level,
    result::GradedResult,
    statistics::{LevelStat, StatisticsReport},
};

/// Groups results by level.
///
/// Every level is present in the report; levels nobody reached get
/// `{count: 0, percentage: "0.00%"}`.
pub fn aggregate(results: &[GradedResult]) -> StatisticsReport {
    let mut counts: BTreeMap<Level, u64> = Level::ALL.into_iter().map(|l| (l, 0)).collect();
    for result in results {
        *counts.entry(result.level).or_default() += 1;
    }

    let total_students = results.len() as u64;
    let level_stats = counts
        .into_iter()
        .map(|(level, count)| {
            (
                level,
                LevelStat {
                    count,
                    percentage: format_share(count, total_students),
                },
            )
        })
        .collect();

    StatisticsReport {
        total_students,
        level_stats,
    }
}

fn format_share(count: u64, total: u64) -> String {
    let share = if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    };
    format!("{:.2}%", share)
}
