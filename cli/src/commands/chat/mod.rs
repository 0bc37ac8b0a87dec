//! # Campus Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! This module implements `campus chat`, a rule-based text chatbot. Each line
//! the user types is classified by keyword containment into one intent
//! (greeting, time, weather, arithmetic question, ...) and answered with a
//! fixed reply, a random pick from a fixed list, or a computed answer.
//!
//! ## Architecture
//!
//! - `rules.rs`: The ordered intent table (first match wins)
//! - `expression.rs`: Extraction and evaluation of `<number> <op> <number>` questions
//! - `responder.rs`: Text in, reply out; owns the random source and clock
//! - this file: Arguments, the read-eval-print loop, and exit handling
//!
//! ## Examples
//!
//! ```bash
//! # Chat with the default bot
//! campus chat
//!
//! # Reproducible replies, custom display name
//! campus chat --seed 7 --name Rusty
//! ```
//!
//! Session flow:
//! 1. Print the banner
//! 2. Read a line; stop on an exit keyword or end of input
//! 3. Ask again on empty input
//! 4. Print the responder's reply and repeat
//!
use crate::common::ui::prompt::Prompter;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::info;

pub mod expression;
pub mod responder;
pub mod rules;

use responder::Responder;

/// Raw inputs that end the session before reaching the responder.
const EXIT_KEYWORDS: &[&str] = &["bye", "goodbye", "exit", "quit"];

/// Arguments for the `chat` command.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Seed for reply selection (overrides `chat.seed` in the config).
    #[arg(long)]
    seed: Option<u64>,
    /// Name shown in front of each reply (overrides `chat.bot_name`).
    #[arg(long)]
    name: Option<String>,
}

/// Handler for `campus chat`. Runs an interactive session on stdin/stdout.
pub fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    let seed = args.seed.or(config.chat.seed);
    let name = args.name.unwrap_or_else(|| config.chat.bot_name.clone());
    info!("Starting chat session (name: {}, seed: {:?})", name, seed);

    let mut responder = Responder::seeded(seed)?;
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    run_session(&mut prompter, &mut responder, &name)
}

/// Runs the read-eval-print loop until an exit keyword or end of input.
///
/// Both ways out print the farewell line. Blank lines get a nudge and are
/// not passed to the responder.
///
/// # Arguments
///
/// * `prompter` - Input and output for the session.
/// * `responder` - Produces the reply for each non-empty line.
/// * `name` - Display name printed in front of every bot line.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` when the session ends.
///
/// # Errors
///
/// Returns an `Err` only if reading input or writing output fails.
pub fn run_session<R, W, G>(
    prompter: &mut Prompter<R, W>,
    responder: &mut Responder<G>,
    name: &str,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    prompter.say(format!(
        "{}: Hello! I'm a simple chatbot. Type 'bye' to exit.",
        name
    ))?;
    prompter.say("You can ask me about AI, programming, time, date, or just chat!")?;
    prompter.say("-".repeat(50))?;

    let mut turns = 0usize;
    loop {
        let Some(line) = prompter.read_line("\nYou: ")? else {
            prompter.say("")?;
            break;
        };
        let input = line.trim();

        if is_exit_keyword(input) {
            break;
        }
        if input.is_empty() {
            prompter.say(format!("{}: Please say something!", name))?;
            continue;
        }

        turns += 1;
        let reply = responder.respond(input);
        prompter.say(format!("{}: {}", name, reply))?;
    }

    prompter.say(format!("{}: Goodbye! Have a great day!", name))?;
    info!("Chat session ended after {} turns", turns);
    Ok(())
}

fn is_exit_keyword(input: &str) -> bool {
    let lowered = input.to_lowercase();
    EXIT_KEYWORDS.contains(&lowered.as_str())
}
