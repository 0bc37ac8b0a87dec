//! # Calculator Menu
//!
//! File: cli/src/commands/calc/menu.rs
//!
//! ## Overview
//!
//! The interactive loop behind `campus calc` (and `campus calc menu`): show
//! the 13-entry menu, read a choice, collect the operands with validated
//! prompts, print the result or the math error, then offer to continue.
//!
use super::operations::Operation;
use crate::common::ui::prompt::Prompter;
use crate::core::error::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MENU_ENTRIES: &[&str] = &[
    "1.  Addition",
    "2.  Subtraction",
    "3.  Multiplication",
    "4.  Division",
    "5.  Power (a^b)",
    "6.  Square Root",
    "7.  Factorial",
    "8.  Percentage",
    "9.  Average of numbers",
    "10. Find Maximum",
    "11. Find Minimum",
    "12. Prime number check",
    "13. Exit",
];

const FAREWELL: &str = "Thank you for using the Math Operations Calculator!";

/// What the user picked from the menu.
#[derive(Debug, PartialEq)]
enum Choice {
    Run(Operation),
    Exit,
    Invalid,
}

/// Runs the interactive calculator until the user exits.
///
/// Domain errors (zero divisor, negative square root, ...) are printed as
/// `Error: <message>` and the loop continues.
///
/// # Arguments
///
/// * `prompter` - Input and output for the session.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` after option 13 or a `q` at the continue prompt.
///
/// # Errors
///
/// Returns `CampusError::InputClosed` if input ends while a prompt is
/// waiting, or an I/O error from the prompter.
pub fn run_menu<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
    prompter.say("Welcome to the Basic Math Operations Calculator!")?;

    loop {
        display_menu(prompter)?;
        let raw = prompter.ask("Enter your choice (1-13): ")?;

        match read_choice(prompter, raw.trim())? {
            Choice::Exit => {
                prompter.say(FAREWELL)?;
                prompter.say("Goodbye!")?;
                break;
            }
            Choice::Invalid => {
                debug!("Rejected menu choice {:?}", raw);
                prompter.say("Invalid choice! Please select a number between 1 and 13.")?;
            }
            Choice::Run(operation) => {
                info!("Running {:?}", operation);
                match operation.report() {
                    Ok(lines) => {
                        for line in lines {
                            prompter.say(line)?;
                        }
                    }
                    Err(e) => prompter.say(format!("Error: {}", e))?,
                }
            }
        }

        let again = prompter.ask("\nPress Enter to continue or 'q' to quit: ")?;
        if again.trim().eq_ignore_ascii_case("q") {
            prompter.say(FAREWELL)?;
            break;
        }
    }
    Ok(())
}

fn display_menu<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
    prompter.say(format!("\n{}", "=".repeat(50)))?;
    prompter.say("           BASIC MATH OPERATIONS CALCULATOR")?;
    prompter.say("=".repeat(50))?;
    for entry in MENU_ENTRIES {
        prompter.say(entry)?;
    }
    prompter.say("-".repeat(50))
}

/// Maps a menu number to an operation, prompting for its operands.
fn read_choice<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, raw: &str) -> Result<Choice> {
    let choice = match raw {
        "1" | "2" | "3" | "5" => {
            let (first, second) = if raw == "5" {
                ("Enter base: ", "Enter exponent: ")
            } else {
                ("Enter first number: ", "Enter second number: ")
            };
            let a = prompter.ask_number(first)?;
            let b = prompter.ask_number(second)?;
            Choice::Run(match raw {
                "1" => Operation::Add(a, b),
                "2" => Operation::Subtract(a, b),
                "3" => Operation::Multiply(a, b),
                _ => Operation::Power(a, b),
            })
        }
        "4" => {
            let a = prompter.ask_number("Enter dividend: ")?;
            let b = prompter.ask_number("Enter divisor: ")?;
            Choice::Run(Operation::Divide(a, b))
        }
        "6" => Choice::Run(Operation::SquareRoot(
            prompter.ask_number("Enter number: ")?,
        )),
        "7" => Choice::Run(Operation::Factorial(
            prompter.ask_integer("Enter a non-negative integer: ")?,
        )),
        "8" => {
            let part = prompter.ask_number("Enter the part: ")?;
            let whole = prompter.ask_number("Enter the whole: ")?;
            Choice::Run(Operation::Percentage { part, whole })
        }
        "9" | "10" | "11" => {
            let numbers = prompter.ask_number_list("Enter numbers separated by spaces: ")?;
            Choice::Run(match raw {
                "9" => Operation::Average(numbers),
                "10" => Operation::Maximum(numbers),
                _ => Operation::Minimum(numbers),
            })
        }
        "12" => Choice::Run(Operation::PrimeCheck(
            prompter.ask_integer("Enter a positive integer: ")?,
        )),
        "13" => Choice::Exit,
        _ => Choice::Invalid,
    };
    Ok(choice)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CampusError;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<()>, String) {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes()), &mut out);
        let result = run_menu(&mut prompter);
        drop(prompter);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_addition_then_quit() {
        let (result, out) = run("1\n2\n3\nq\n");
        assert!(result.is_ok());
        assert!(out.contains("Result: 2.0 + 3.0 = 5.0"));
        assert!(out.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn test_division_by_zero_keeps_running() {
        let (result, out) = run("4\n10\n0\n\n13\n");
        assert!(result.is_ok());
        assert!(out.contains("Error: Cannot divide by zero!"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(out.matches("BASIC MATH OPERATIONS CALCULATOR").count(), 2);
    }

    #[test]
    fn test_invalid_choice() {
        let (_, out) = run("42\nq\n");
        assert!(out.contains("Invalid choice! Please select a number between 1 and 13."));
    }

    #[test]
    fn test_list_operation_with_retry() {
        let (_, out) = run("10\n1 x\n4 9 2\nq\n");
        assert!(out.contains("Please enter valid numbers separated by spaces!"));
        assert!(out.contains("Numbers: [4.0, 9.0, 2.0]"));
        assert!(out.contains("Maximum: 9.0"));
    }

    #[test]
    fn test_prime_check() {
        let (_, out) = run("12\n13\nq\n");
        assert!(out.contains("13 is a prime number!"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let (result, _) = run("1\n2\n");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CampusError>(),
            Some(CampusError::InputClosed { .. })
        ));
    }
}
