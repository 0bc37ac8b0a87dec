//! # Grades Report
//!
//! File: cli/src/commands/grades/report.rs
//!
//! Renders the per-student result blocks and the class statistics printed at
//! the end of `campus grades`.
//!
use super::grading::{ClassSummary, StudentRecord};
use crate::common::ui::format;

/// Lines of the full report, in print order.
pub fn render(records: &[StudentRecord]) -> Vec<String> {
    let mut lines = vec![
        format!("\n{}", "=".repeat(80)),
        "                           STUDENT RESULTS".to_string(),
        "=".repeat(80),
    ];

    for (i, student) in records.iter().enumerate() {
        lines.push(format!("\nStudent {}:", i + 1));
        lines.push(format!("Name: {}", student.name));
        lines.push(format!("Roll Number: {}", student.roll_no));
        lines.push("Subject-wise Marks:".to_string());
        for mark in &student.marks {
            lines.push(format!("  {}: {}", mark.subject, format::float(mark.mark)));
        }
        lines.push(format!(
            "Total Marks: {}/{}",
            format::float(student.total()),
            student.max_total()
        ));
        lines.push(format!("Percentage: {:.2}%", student.percentage()));
        lines.push(format!("Grade: {}", student.grade()));
        lines.push(format!("Status: {}", student.status()));
        lines.push(student.grade().feedback().to_string());
        lines.push("-".repeat(50));
    }

    if let Some(summary) = ClassSummary::from_records(records) {
        lines.push("\n--- CLASS STATISTICS ---".to_string());
        lines.push(format!("Total Students: {}", summary.total));
        lines.push(format!("Passed: {}", summary.passed));
        lines.push(format!("Failed: {}", summary.failed));
        lines.push(format!("Pass Percentage: {:.2}%", summary.pass_percentage));
        lines.push(format!(
            "Class Topper: {} ({:.2}%)",
            summary.topper.name,
            summary.topper.percentage()
        ));
    }
    lines
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::grades::grading::SubjectMark;

    fn student(name: &str, marks: &[(&str, f64)]) -> StudentRecord {
        StudentRecord {
            name: name.into(),
            roll_no: "42".into(),
            marks: marks
                .iter()
                .map(|(subject, mark)| SubjectMark {
                    subject: subject.to_string(),
                    mark: *mark,
                })
                .collect(),
            max_mark: 100.0,
        }
    }

    #[test]
    fn test_student_block() {
        let lines = render(&[student("Ada", &[("Math", 85.0), ("Art", 72.5)])]);
        let text = lines.join("\n");
        assert!(text.contains("Student 1:\nName: Ada\nRoll Number: 42"));
        assert!(text.contains("  Math: 85.0\n  Art: 72.5"));
        assert!(text.contains("Total Marks: 157.5/200"));
        assert!(text.contains("Percentage: 78.75%"));
        assert!(text.contains("Grade: B\nStatus: PASS\nGood performance!"));
    }

    #[test]
    fn test_class_statistics() {
        let lines = render(&[
            student("Ada", &[("Math", 95.0)]),
            student("Bo", &[("Math", 30.0)]),
            student("Cy", &[("Math", 60.0)]),
        ]);
        let text = lines.join("\n");
        assert!(text.contains("Total Students: 3\nPassed: 2\nFailed: 1"));
        assert!(text.contains("Pass Percentage: 66.67%"));
        assert!(text.contains("Class Topper: Ada (95.00%)"));
    }

    #[test]
    fn test_empty_report_has_no_statistics() {
        let text = render(&[]).join("\n");
        assert!(text.contains("STUDENT RESULTS"));
        assert!(!text.contains("CLASS STATISTICS"));
    }
}
