//! # Chat Arithmetic Evaluator
//!
//! File: cli/src/commands/chat/expression.rs
//!
//! ## Overview
//!
//! Answers "what is 5 + 3?"-style questions. The evaluator:
//!
//! 1. Rewrites operator words to symbols ("plus"/"add" to `+`, "minus"/"subtract"
//!    to `-`, "times"/"multiply" to `*`, "divided by"/"divide" to `/`), matching
//!    whole words only and ignoring case.
//! 2. Takes the leftmost `<number> <op> <number>` in the rewritten text.
//! 3. Computes the result, refusing a zero divisor up front.
//!
//! Every outcome is a reply string. Failures are modelled as `EvalError`, whose
//! `Display` text is the reply itself.
//!
use crate::common::ui::format;
use regex::Regex;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Why an expression produced no result.
#[derive(Error, Debug, PartialEq)]
pub enum EvalError {
    #[error("I couldn't understand the math problem. Try something like '5 + 3' or 'what is 10 * 2?'")]
    NoExpression,

    #[error("Sorry, I can't divide by zero!")]
    DivisionByZero,

    /// The pattern matched but the numbers could not be used.
    #[error("Sorry, I had trouble with that calculation. Try a simpler format like '5 + 3'")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

/// The first expression found in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpression {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    /// Right operand exactly as typed; echoed back in the reply.
    pub rhs_text: String,
}

/// A successfully evaluated expression. Displays as `"5.0 + 3 = 8.0"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub expression: ParsedExpression,
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format::float(self.expression.lhs),
            self.expression.operator.symbol(),
            self.expression.rhs_text,
            format::float(self.result)
        )
    }
}

/// Compiled patterns for operator-word rewriting and expression extraction.
#[derive(Debug)]
pub struct ExpressionEvaluator {
    rewrites: Vec<(Regex, &'static str)>,
    expression: Regex,
}

impl ExpressionEvaluator {
    /// Compiles the rewrite and extraction patterns.
    ///
    /// # Returns
    ///
    /// * `Result<Self, regex::Error>` - The ready evaluator.
    ///
    /// # Errors
    ///
    /// Returns a `regex::Error` if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        let rewrites = vec![
            (Regex::new(r"(?i)\b(?:plus|add)\b")?, "+"),
            (Regex::new(r"(?i)\b(?:minus|subtract)\b")?, "-"),
            (Regex::new(r"(?i)\b(?:times|multiply)\b")?, "*"),
            (Regex::new(r"(?i)\bdivided\s+by\b|\bdivide\b")?, "/"),
        ];
        let expression = Regex::new(r"(\d+(?:\.\d+)?)\s*([+\-*/])\s*(\d+(?:\.\d+)?)")?;
        Ok(Self {
            rewrites,
            expression,
        })
    }

    /// Evaluates the first expression in `text` and renders the reply.
    ///
    /// # Arguments
    ///
    /// * `text` - Normalized user input, e.g. `"what is 5 + 3?"`.
    ///
    /// # Returns
    ///
    /// * `String` - Either `"5.0 + 3 = 8.0"` or the `EvalError` message.
    pub fn evaluate(&self, text: &str) -> String {
        match self.calculate(text) {
            Ok(calculation) => calculation.to_string(),
            Err(err) => {
                debug!("Could not evaluate {:?}: {:?}", text, err);
                err.to_string()
            }
        }
    }

    /// Parses and computes the first expression in `text`.
    ///
    /// # Arguments
    ///
    /// * `text` - Normalized user input.
    ///
    /// # Returns
    ///
    /// * `Result<Calculation, EvalError>` - The expression with its result.
    ///
    /// # Errors
    ///
    /// - `EvalError::NoExpression` if no `<number> <op> <number>` is present.
    /// - `EvalError::DivisionByZero` for a zero divisor, checked before dividing.
    /// - `EvalError::Malformed` if an operand or the result is not finite.
    pub fn calculate(&self, text: &str) -> Result<Calculation, EvalError> {
        let expression = self.parse(text)?;
        if expression.operator == Operator::Divide && expression.rhs == 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        let result = match expression.operator {
            Operator::Add => expression.lhs + expression.rhs,
            Operator::Subtract => expression.lhs - expression.rhs,
            Operator::Multiply => expression.lhs * expression.rhs,
            Operator::Divide => expression.lhs / expression.rhs,
        };
        if !result.is_finite() {
            return Err(EvalError::Malformed(format!(
                "result of {:?} is not finite",
                expression
            )));
        }
        Ok(Calculation { expression, result })
    }

    /// Rewrites operator words, then extracts the leftmost expression.
    ///
    /// # Arguments
    ///
    /// * `text` - Normalized user input.
    ///
    /// # Returns
    ///
    /// * `Result<ParsedExpression, EvalError>` - Operands, operator, and the
    ///   right operand's original text.
    ///
    /// # Errors
    ///
    /// - `EvalError::NoExpression` if nothing matches.
    /// - `EvalError::Malformed` if an operand does not parse as a finite `f64`.
    pub fn parse(&self, text: &str) -> Result<ParsedExpression, EvalError> {
        let normalized = self.normalize(text);
        let caps = self
            .expression
            .captures(&normalized)
            .ok_or(EvalError::NoExpression)?;

        let operator = Operator::from_symbol(&caps[2])
            .ok_or_else(|| EvalError::Malformed(format!("unknown operator {:?}", &caps[2])))?;
        Ok(ParsedExpression {
            lhs: parse_operand(&caps[1])?,
            operator,
            rhs: parse_operand(&caps[3])?,
            rhs_text: caps[3].to_string(),
        })
    }

    fn normalize(&self, text: &str) -> String {
        self.rewrites
            .iter()
            .fold(text.to_string(), |acc, (pattern, symbol)| {
                pattern.replace_all(&acc, *symbol).into_owned()
            })
    }
}

/// `\d` also matches non-ASCII digits, which `f64` parsing rejects.
fn parse_operand(raw: &str) -> Result<f64, EvalError> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| EvalError::Malformed(format!("{:?}: {}", raw, e)))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::Malformed(format!("{:?} is out of range", raw)))
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> ExpressionEvaluator {
        ExpressionEvaluator::new().expect("patterns compile")
    }

    #[test]
    fn test_symbol_expression() {
        assert_eq!(evaluator().evaluate("what is 5 + 3?"), "5.0 + 3 = 8.0");
    }

    #[test]
    fn test_word_operator_is_normalized() {
        assert_eq!(evaluator().evaluate("what is 7 times 6"), "7.0 * 6 = 42.0");
        assert_eq!(evaluator().evaluate("what is 9 MINUS 4"), "9.0 - 4 = 5.0");
        assert_eq!(evaluator().evaluate("12 divided by 4"), "12.0 / 4 = 3.0");
    }

    #[test]
    fn test_divide_by_zero_is_refused() {
        let reply = evaluator().evaluate("calculate 10 divided by 0");
        assert_eq!(reply, "Sorry, I can't divide by zero!");
        assert_eq!(
            evaluator().calculate("4 / 0.0"),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_no_expression() {
        assert_eq!(
            evaluator().evaluate("banana"),
            "I couldn't understand the math problem. Try something like '5 + 3' or 'what is 10 * 2?'"
        );
    }

    #[test]
    fn test_fractional_operands_and_results() {
        assert_eq!(evaluator().evaluate("what is 2.5 * 4"), "2.5 * 4 = 10.0");
        assert_eq!(evaluator().evaluate("what is 7 / 2"), "7.0 / 2 = 3.5");
        assert_eq!(evaluator().evaluate("what is 0.1 + 0.2"), "0.1 + 0.2 = 0.30000000000000004");
        assert_eq!(evaluator().evaluate("what is 3 - 10"), "3.0 - 10 = -7.0");
    }

    #[test]
    fn test_large_values_use_exponent_form() {
        assert_eq!(
            evaluator().evaluate("what is 99999999999999999999 * 10"),
            "1e+20 * 10 = 1e+21"
        );
    }

    #[test]
    fn test_leftmost_expression_wins() {
        assert_eq!(
            evaluator().evaluate("what is 1 + 2 and 3 * 4"),
            "1.0 + 2 = 3.0"
        );
    }

    #[test]
    fn test_rewrite_respects_word_boundaries() {
        // "addition" must not become "+ition".
        let e = evaluator();
        assert_eq!(e.normalize("addition of 2 plus 2"), "addition of 2 + 2");
        assert_eq!(e.normalize("sometimes 3 times 3"), "sometimes 3 * 3");
    }

    #[test]
    fn test_non_ascii_digits_are_caught() {
        // Arabic-Indic three matches `\d` but is not an f64 literal.
        let reply = evaluator().evaluate("what is \u{0663} + 4");
        assert_eq!(
            reply,
            "Sorry, I had trouble with that calculation. Try a simpler format like '5 + 3'"
        );
    }

    #[test]
    fn test_overflow_is_caught() {
        let huge = "9".repeat(400);
        let result = evaluator().calculate(&format!("{} * 2", huge));
        assert!(matches!(result, Err(EvalError::Malformed(_))));
    }
}
