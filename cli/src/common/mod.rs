//! # Campus Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the organizational entry point for utilities shared across
//! the Campus command groups. It keeps cross-cutting concerns (currently the
//! interactive prompt layer) separate from command-specific logic
//! (`commands::`) and core infrastructure (`core::`).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ui::prompt::Prompter;
//!
//! let stdin = std::io::stdin();
//! let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
//! let name = prompter.ask("Enter student name: ")?;
//! ```
//!

/// Utilities for terminal user interaction (prompts and validated input).
pub mod ui;
