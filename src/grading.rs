//! Grading of test submissions.
//!
//! Scores a submission against the full question set and derives the level.

use serde::Serialize;

use crate::models::{
    level::{self, Level},
    question::Question,
    result::NewResult,
    submission::Submission,
};

/// Outcome of grading one submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Grade {
    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub level: Level,
}

impl Grade {
    pub fn into_result(self, student_name: String) -> NewResult {
        NewResult {
            student_name,
            score: self.score,
            total_questions: self.total_questions,
            percentage: self.percentage,
            level: self.level,
        }
    }
}

/// Returns `(score, total)`.
///
/// `total` is the size of the question set, so unanswered questions count as
/// wrong. Answers for ids outside the set are ignored.
pub fn score(questions: &[Question], submission: &Submission) -> (u32, u32) {
    let correct = questions
        .iter()
        .filter(|q| {
            submission
                .answers
                .get(&q.id)
                .is_some_and(|&index| q.is_correct(index))
        })
        .count();

    (saturating_u32(correct), saturating_u32(questions.len()))
}

/// Scores and classifies a submission.
pub fn grade(questions: &[Question], submission: &Submission) -> Grade {
    let (score, total_questions) = score(questions, submission);
    Grade {
        score,
        total_questions,
        percentage: level::percentage(score, total_questions),
        level: level::classify(score, total_questions),
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
