//! # Campus Calc Command Group
//!
//! File: cli/src/commands/calc/mod.rs
//!
//! ## Overview
//!
//! This module defines and routes the `campus calc` command group, a basic
//! arithmetic calculator. Without a subcommand it opens the interactive menu;
//! each menu operation is also available as a one-shot subcommand.
//!
//! ## Architecture
//!
//! - `CalcArgs`: Top-level arguments for the command group
//! - `CalcCommand`: Enum of the subcommands (`menu` plus one per operation)
//! - `handle_calc`: Routes to the menu or evaluates a single `Operation`
//! - `operations.rs`: The math itself and result rendering
//! - `menu.rs`: The interactive loop
//!
//! ## Examples
//!
//! ```bash
//! # Interactive menu (same as `campus calc menu`)
//! campus calc
//!
//! # One-shot operations
//! campus calc add 2 3
//! campus calc div 10 -4
//! campus calc avg 1 2 3 4
//! campus calc prime 7919
//! ```
//!
use crate::common::ui::prompt::Prompter;
use crate::core::error::{CampusError, Result};
use clap::{Parser, Subcommand};
use tracing::info;

mod menu;
pub mod operations;

use operations::Operation;

/// Top-level arguments for the 'calc' command group.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// The operation to run (defaults to the interactive menu).
    #[command(subcommand)]
    command: Option<CalcCommand>,
}

/// Enum defining all subcommands under 'campus calc'.
#[derive(Subcommand, Debug, PartialEq)]
enum CalcCommand {
    /// Interactive menu (default)
    Menu,
    /// A + B
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// A - B
    Sub {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// A × B
    Mul {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// A ÷ B
    Div {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// BASE raised to EXPONENT
    Pow {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },
    /// Square root of VALUE
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// N!
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// What percentage PART is of WHOLE
    Percent {
        #[arg(allow_negative_numbers = true)]
        part: f64,
        #[arg(allow_negative_numbers = true)]
        whole: f64,
    },
    /// Average of the given numbers
    Avg {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Largest of the given numbers
    Max {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Smallest of the given numbers
    Min {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Whether N is prime
    Prime {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
}

impl CalcCommand {
    /// The operation a one-shot subcommand stands for; `None` for the menu.
    fn operation(self) -> Option<Operation> {
        let op = match self {
            CalcCommand::Menu => return None,
            CalcCommand::Add { a, b } => Operation::Add(a, b),
            CalcCommand::Sub { a, b } => Operation::Subtract(a, b),
            CalcCommand::Mul { a, b } => Operation::Multiply(a, b),
            CalcCommand::Div { a, b } => Operation::Divide(a, b),
            CalcCommand::Pow { base, exponent } => Operation::Power(base, exponent),
            CalcCommand::Sqrt { value } => Operation::SquareRoot(value),
            CalcCommand::Factorial { n } => Operation::Factorial(n),
            CalcCommand::Percent { part, whole } => Operation::Percentage { part, whole },
            CalcCommand::Avg { numbers } => Operation::Average(numbers),
            CalcCommand::Max { numbers } => Operation::Maximum(numbers),
            CalcCommand::Min { numbers } => Operation::Minimum(numbers),
            CalcCommand::Prime { n } => Operation::PrimeCheck(n),
        };
        Some(op)
    }
}

/// Main handler function for the 'calc' command group.
pub fn handle_calc(args: CalcArgs) -> Result<()> {
    let command = args.command.unwrap_or(CalcCommand::Menu);

    match command.operation() {
        None => {
            info!("Starting interactive calculator");
            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
            menu::run_menu(&mut prompter)
        }
        Some(operation) => {
            info!("Evaluating {:?}", operation);
            let lines = operation.report().map_err(CampusError::from)?;
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
    }
}
