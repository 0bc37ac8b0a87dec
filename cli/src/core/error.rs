//! # Campus Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the application-level error types used by the Campus
//! command handlers. Domain-specific failures that are always turned into a
//! user-facing reply (the chatbot's arithmetic evaluator) keep their own error
//! types next to the code that produces them; this module covers what can
//! actually abort a command.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CampusError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if subjects.is_empty() {
//!     return Err(CampusError::Config("At least one subject is required.".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use crate::commands::calc::operations::MathError;
use thiserror::Error;

/// Custom error type for the Campus application.
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input stream ended while a prompt was still waiting for an answer.
    #[error("Input ended unexpectedly while waiting for: {prompt}")]
    InputClosed { prompt: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Math error: {source}")]
    Math {
        #[from]
        source: MathError,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
