//! # Grading Rules
//!
//! File: cli/src/commands/grades/grading.rs
//!
//! ## Overview
//!
//! Student records and everything derived from them: totals, percentage,
//! letter grade, pass/fail status, the feedback line, and class-wide
//! statistics.
//!
//! Grade bands (percentage, lower bound inclusive):
//!
//! | Grade | From |
//! |-------|------|
//! | A+    | 90   |
//! | A     | 80   |
//! | B     | 70   |
//! | C     | 60   |
//! | D     | 50   |
//! | F     | -    |
//!
//! A student passes at 50% or above.
//!
use std::fmt;

/// Lowest passing percentage.
pub const PASS_MARK: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::APlus
        } else if percentage >= 80.0 {
            Grade::A
        } else if percentage >= 70.0 {
            Grade::B
        } else if percentage >= 60.0 {
            Grade::C
        } else if percentage >= PASS_MARK {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// One line of encouragement for the band.
    pub fn feedback(&self) -> &'static str {
        match self {
            Grade::APlus => "Excellent performance! Keep it up!",
            Grade::A => "Very good performance!",
            Grade::B => "Good performance!",
            Grade::C => "Satisfactory performance. Room for improvement.",
            Grade::D => "You passed, but need to work harder.",
            Grade::F => "Failed. Please focus on studies and try again.",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= PASS_MARK {
            Status::Pass
        } else {
            Status::Fail
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        })
    }
}

/// One subject's mark.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectMark {
    pub subject: String,
    pub mark: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    pub roll_no: String,
    pub marks: Vec<SubjectMark>,
    /// Highest mark any single subject accepts.
    pub max_mark: f64,
}

impl StudentRecord {
    pub fn total(&self) -> f64 {
        self.marks.iter().map(|m| m.mark).sum()
    }

    /// Highest total reachable across all subjects.
    pub fn max_total(&self) -> f64 {
        self.marks.len() as f64 * self.max_mark
    }

    pub fn percentage(&self) -> f64 {
        let max_total = self.max_total();
        if max_total == 0.0 {
            return 0.0;
        }
        self.total() / max_total * 100.0
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }

    pub fn status(&self) -> Status {
        Status::from_percentage(self.percentage())
    }
}

/// Aggregates over all collected students.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSummary<'a> {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_percentage: f64,
    /// Highest percentage; the earliest record wins a tie.
    pub topper: &'a StudentRecord,
}

impl<'a> ClassSummary<'a> {
    /// `None` when there are no records.
    pub fn from_records(records: &'a [StudentRecord]) -> Option<Self> {
        let (first, rest) = records.split_first()?;
        let topper = rest.iter().fold(first, |best, record| {
            if record.percentage() > best.percentage() {
                record
            } else {
                best
            }
        });
        let total = records.len();
        let passed = records
            .iter()
            .filter(|r| r.status() == Status::Pass)
            .count();
        Some(Self {
            total,
            passed,
            failed: total - passed,
            pass_percentage: passed as f64 / total as f64 * 100.0,
            topper,
        })
    }
}
