//! # Campus Grades Command
//!
//! File: cli/src/commands/grades/mod.rs
//!
//! ## Overview
//!
//! This module implements `campus grades`, an interactive grade book. It
//! collects one or more student records (name, roll number, a mark per
//! subject), then prints each student's results and the class statistics.
//! Nothing is saved between runs.
//!
//! ## Architecture
//!
//! - `grading.rs`: Records, grade bands, pass/fail, class summary
//! - `report.rs`: Rendering of the final report
//! - this file: Arguments and the collection loop
//!
//! ## Examples
//!
//! ```bash
//! # Default subjects, marks out of 100
//! campus grades
//!
//! # Custom subjects and scale
//! campus grades --subjects "Math,Physics" --max-mark 50
//! ```
//!
//! Subjects and the maximum mark default to the `[grades]` section of the
//! configuration.
//!
use crate::common::ui::prompt::Prompter;
use crate::core::config::Config;
use crate::core::error::{CampusError, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub mod grading;
mod report;

use grading::{StudentRecord, SubjectMark};

/// Arguments for the `grades` command.
#[derive(Parser, Debug)]
pub struct GradesArgs {
    /// Comma-separated subject names (overrides `grades.subjects`).
    #[arg(long, value_delimiter = ',')]
    subjects: Vec<String>,
    /// Highest mark per subject (overrides `grades.max_mark`).
    #[arg(long)]
    max_mark: Option<f64>,
}

/// Handler for `campus grades`.
pub fn handle_grades(args: GradesArgs, config: &Config) -> Result<()> {
    let subjects = if args.subjects.is_empty() {
        config.grades.subjects.clone()
    } else {
        args.subjects
            .iter()
            .map(|s| s.trim().to_string())
            .collect()
    };
    let max_mark = args.max_mark.unwrap_or(config.grades.max_mark);
    if subjects.iter().any(|s| s.is_empty()) {
        return Err(CampusError::InvalidInput("Subject names cannot be blank.".into()).into());
    }
    if !max_mark.is_finite() || max_mark <= 0.0 {
        return Err(CampusError::InvalidInput(format!(
            "Maximum mark must be a positive number, got {}.",
            max_mark
        ))
        .into());
    }
    info!(
        "Starting grade book ({} subjects, max mark {})",
        subjects.len(),
        max_mark
    );

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    run_grade_book(&mut prompter, &subjects, max_mark)
}

/// Collects records until the user stops, then prints the report.
///
/// Entries with a blank name or roll number are discarded and collection
/// starts over for that student.
///
/// # Arguments
///
/// * `prompter` - Input and output for the session.
/// * `subjects` - Subjects a mark is collected for, in prompt order.
/// * `max_mark` - Highest mark a single subject accepts.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` once the report has been printed.
///
/// # Errors
///
/// Returns `CampusError::InputClosed` if input ends mid-session, or an I/O
/// error from the prompter.
pub fn run_grade_book<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    subjects: &[String],
    max_mark: f64,
) -> Result<()> {
    prompter.say("=".repeat(50))?;
    prompter.say("        STUDENT DETAILS MANAGEMENT SYSTEM")?;
    prompter.say("=".repeat(50))?;

    let mut students = Vec::new();
    loop {
        let Some(record) = collect_student(prompter, subjects, max_mark)? else {
            continue;
        };
        debug!("Collected record for {}", record.name);
        students.push(record);

        let choice = prompter.ask("\nDo you want to add another student? (y/n): ")?;
        if !choice.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }

    for line in report::render(&students) {
        prompter.say(line)?;
    }
    info!("Reported {} students", students.len());
    Ok(())
}

/// Reads one student. Returns `None` when the name or roll number is blank,
/// after telling the user; the caller starts over.
fn collect_student<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    subjects: &[String],
    max_mark: f64,
) -> Result<Option<StudentRecord>> {
    prompter.say("\n--- Enter Student Details ---")?;

    let name = prompter.ask("Enter student name: ")?.trim().to_string();
    if name.is_empty() {
        prompter.say("Name cannot be empty!")?;
        return Ok(None);
    }
    let roll_no = prompter.ask("Enter roll number: ")?.trim().to_string();
    if roll_no.is_empty() {
        prompter.say("Roll number cannot be empty!")?;
        return Ok(None);
    }

    prompter.say(format!("\nEnter marks for {} (out of {}):", name, max_mark))?;
    let out_of_range = format!("Marks should be between 0 and {}!", max_mark);
    let mut marks = Vec::with_capacity(subjects.len());
    for subject in subjects {
        let mark = prompter.ask_number_in_range(
            &format!("{}: ", subject),
            0.0,
            max_mark,
            &out_of_range,
        )?;
        marks.push(SubjectMark {
            subject: subject.clone(),
            mark,
        });
    }

    Ok(Some(StudentRecord {
        name,
        roll_no,
        marks,
        max_mark,
    }))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, subjects: &[&str]) -> (Result<()>, String) {
        let subjects: Vec<String> = subjects.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes()), &mut out);
        let result = run_grade_book(&mut prompter, &subjects, 100.0);
        drop(prompter);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_grades_args_parsing() {
        let args = GradesArgs::try_parse_from(["grades", "--subjects", "Math,Art", "--max-mark", "50"])
            .unwrap();
        assert_eq!(args.subjects, vec!["Math", "Art"]);
        assert_eq!(args.max_mark, Some(50.0));

        let args = GradesArgs::try_parse_from(["grades"]).unwrap();
        assert!(args.subjects.is_empty());
        assert!(args.max_mark.is_none());
    }

    #[test]
    fn test_two_students() {
        let input = "Ada\n1\n95\n85\ny\nBo\n2\n40\n45\nn\n";
        let (result, out) = run(input, &["Math", "Art"]);
        assert!(result.is_ok());
        assert!(out.contains("Student 2:\nName: Bo"));
        assert!(out.contains("Passed: 1\nFailed: 1"));
        assert!(out.contains("Class Topper: Ada (90.00%)"));
    }

    #[test]
    fn test_blank_name_restarts_entry() {
        let input = "\nAda\n\nAda\n7\n50\nn\n";
        let (result, out) = run(input, &["Math"]);
        assert!(result.is_ok());
        assert!(out.contains("Name cannot be empty!"));
        assert!(out.contains("Roll number cannot be empty!"));
        assert!(out.contains("Total Students: 1"));
    }

    #[test]
    fn test_marks_are_validated() {
        let input = "Ada\n1\nabc\n150\n75\nn\n";
        let (_, out) = run(input, &["Math"]);
        assert!(out.contains("Please enter a valid number!"));
        assert!(out.contains("Marks should be between 0 and 100!"));
        assert!(out.contains("  Math: 75.0"));
    }

    #[test]
    fn test_eof_mid_entry_is_an_error() {
        let (result, _) = run("Ada\n1\n", &["Math"]);
        assert!(result.is_err());
    }
}
