//! # Calculator Operations
//!
//! File: cli/src/commands/calc/operations.rs
//!
//! ## Overview
//!
//! The arithmetic behind `campus calc`. Each menu entry and one-shot
//! subcommand builds an `Operation`, and `Operation::report` evaluates it and
//! renders the result lines. Domain errors (zero divisor, negative square root,
//! empty list, ...) are returned as `MathError`; the interactive menu prints
//! them and carries on, one-shot subcommands exit with an error.
//!
use crate::common::ui::format;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,

    #[error("Cannot calculate square root of negative number!")]
    NegativeSquareRoot,

    #[error("Factorial is not defined for negative numbers!")]
    NegativeFactorial,

    #[error("Factorial of {0} is too large to compute!")]
    FactorialOverflow(i64),

    #[error("Cannot calculate percentage with zero as whole!")]
    ZeroWhole,

    #[error("Cannot calculate {0} of empty list!")]
    EmptyList(&'static str),

    #[error("Result is not a finite number!")]
    NotFinite,
}

pub type MathResult<T> = std::result::Result<T, MathError>;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> MathResult<f64> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// `a` raised to `b`.
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

pub fn square_root(a: f64) -> MathResult<f64> {
    if a < 0.0 {
        return Err(MathError::NegativeSquareRoot);
    }
    Ok(a.sqrt())
}

/// `n!`, exact up to the `u128` limit (34!).
pub fn factorial(n: i64) -> MathResult<u128> {
    if n < 0 {
        return Err(MathError::NegativeFactorial);
    }
    (2..=n as u128).try_fold(1u128, |acc, i| {
        acc.checked_mul(i).ok_or(MathError::FactorialOverflow(n))
    })
}

/// What percentage `part` is of `whole`.
pub fn percentage(part: f64, whole: f64) -> MathResult<f64> {
    if whole == 0.0 {
        return Err(MathError::ZeroWhole);
    }
    Ok(part / whole * 100.0)
}

pub fn average(numbers: &[f64]) -> MathResult<f64> {
    if numbers.is_empty() {
        return Err(MathError::EmptyList("average"));
    }
    Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

pub fn find_max(numbers: &[f64]) -> MathResult<f64> {
    numbers
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(MathError::EmptyList("maximum"))
}

pub fn find_min(numbers: &[f64]) -> MathResult<f64> {
    numbers
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(MathError::EmptyList("minimum"))
}

/// Trial division up to the square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    (2..)
        .take_while(|i: &i64| i.saturating_mul(*i) <= n)
        .all(|i| n % i != 0)
}

/// One calculator request with its inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Add(f64, f64),
    Subtract(f64, f64),
    Multiply(f64, f64),
    Divide(f64, f64),
    Power(f64, f64),
    SquareRoot(f64),
    Factorial(i64),
    Percentage { part: f64, whole: f64 },
    Average(Vec<f64>),
    Maximum(Vec<f64>),
    Minimum(Vec<f64>),
    PrimeCheck(i64),
}

impl Operation {
    /// Evaluates the operation and renders the lines to print.
    pub fn report(&self) -> MathResult<Vec<String>> {
        use format::float as f;

        let lines = match self {
            Operation::Add(a, b) => {
                vec![format!("Result: {} + {} = {}", f(*a), f(*b), f(finite(add(*a, *b))?))]
            }
            Operation::Subtract(a, b) => vec![format!(
                "Result: {} - {} = {}",
                f(*a),
                f(*b),
                f(finite(subtract(*a, *b))?)
            )],
            Operation::Multiply(a, b) => vec![format!(
                "Result: {} × {} = {}",
                f(*a),
                f(*b),
                f(finite(multiply(*a, *b))?)
            )],
            Operation::Divide(a, b) => vec![format!(
                "Result: {} ÷ {} = {}",
                f(*a),
                f(*b),
                f(finite(divide(*a, *b)?)?)
            )],
            Operation::Power(a, b) => vec![format!(
                "Result: {}^{} = {}",
                f(*a),
                f(*b),
                f(finite(power(*a, *b))?)
            )],
            Operation::SquareRoot(a) => {
                vec![format!("Result: √{} = {}", f(*a), f(square_root(*a)?))]
            }
            Operation::Factorial(n) => vec![format!("Result: {}! = {}", n, factorial(*n)?)],
            Operation::Percentage { part, whole } => vec![format!(
                "Result: {} is {}% of {}",
                f(*part),
                f(finite(percentage(*part, *whole)?)?),
                f(*whole)
            )],
            Operation::Average(numbers) => vec![
                format!("Numbers: {}", format::float_list(numbers)),
                format!("Average: {}", f(finite(average(numbers)?)?)),
            ],
            Operation::Maximum(numbers) => vec![
                format!("Numbers: {}", format::float_list(numbers)),
                format!("Maximum: {}", f(find_max(numbers)?)),
            ],
            Operation::Minimum(numbers) => vec![
                format!("Numbers: {}", format::float_list(numbers)),
                format!("Minimum: {}", f(find_min(numbers)?)),
            ],
            Operation::PrimeCheck(n) => {
                if is_prime(*n) {
                    vec![format!("{} is a prime number!", n)]
                } else {
                    vec![format!("{} is not a prime number.", n)]
                }
            }
        };
        Ok(lines)
    }
}

/// Rejects overflowed or undefined results (e.g. `(-8)^0.5`).
fn finite(value: f64) -> MathResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::NotFinite)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(add(2.0, 3.5), 5.5);
        assert_eq!(subtract(2.0, 3.5), -1.5);
        assert_eq!(multiply(4.0, 2.5), 10.0);
        assert_eq!(divide(9.0, 2.0), Ok(4.5));
        assert_eq!(power(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(divide(1.0, 0.0), Err(MathError::DivisionByZero));
        assert_eq!(square_root(-4.0), Err(MathError::NegativeSquareRoot));
        assert_eq!(factorial(-1), Err(MathError::NegativeFactorial));
        assert_eq!(percentage(5.0, 0.0), Err(MathError::ZeroWhole));
        assert_eq!(average(&[]), Err(MathError::EmptyList("average")));
        assert_eq!(find_max(&[]), Err(MathError::EmptyList("maximum")));
        assert_eq!(find_min(&[]), Err(MathError::EmptyList("minimum")));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(34), Ok(295232799039604140847618609643520000000));
        assert_eq!(factorial(35), Err(MathError::FactorialOverflow(35)));
    }

    #[test]
    fn test_list_statistics() {
        let numbers = [3.0, -1.5, 10.0, 4.5];
        assert_eq!(average(&numbers), Ok(4.0));
        assert_eq!(find_max(&numbers), Ok(10.0));
        assert_eq!(find_min(&numbers), Ok(-1.5));
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<i64> = (-3..30).filter(|n| is_prime(*n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
    }

    #[test]
    fn test_report_lines() {
        assert_eq!(
            Operation::Add(2.0, 3.0).report().unwrap(),
            vec!["Result: 2.0 + 3.0 = 5.0"]
        );
        assert_eq!(
            Operation::Percentage {
                part: 25.0,
                whole: 200.0
            }
            .report()
            .unwrap(),
            vec!["Result: 25.0 is 12.5% of 200.0"]
        );
        assert_eq!(
            Operation::Average(vec![1.0, 2.0]).report().unwrap(),
            vec!["Numbers: [1.0, 2.0]", "Average: 1.5"]
        );
        assert_eq!(
            Operation::PrimeCheck(9).report().unwrap(),
            vec!["9 is not a prime number."]
        );
    }

    #[test]
    fn test_report_propagates_errors() {
        assert_eq!(
            Operation::Divide(1.0, 0.0).report(),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            Operation::Power(-8.0, 0.5).report(),
            Err(MathError::NotFinite)
        );
    }
}
