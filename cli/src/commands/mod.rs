//! # Campus Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level command groups that make up the
//! Campus CLI and makes them accessible to the entry point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `calc`: Basic arithmetic calculator (interactive menu and one-shot operations)
//! - `chat`: Rule-based keyword chatbot
//! - `grades`: Student grade book with class statistics
//!
//! Each command group defines its own arguments structure and handler function.
//!

/// Calculator command group. Includes the interactive `menu` and one-shot subcommands like `add`, `sqrt`, `avg`.
pub mod calc;
/// Interactive keyword chatbot.
pub mod chat;
/// Interactive grade book.
pub mod grades;
