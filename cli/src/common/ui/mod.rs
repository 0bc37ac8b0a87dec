//! # Campus UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction helpers shared by the command groups.
//!
//! - **`prompt`**: Line-based prompts with validation and retry loops
//!   (numbers, integers, bounded marks, number lists).
//! - **`format`**: Rendering of numbers in replies and reports.
//!

pub mod format;
pub mod prompt;
