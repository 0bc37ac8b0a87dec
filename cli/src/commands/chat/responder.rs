//! # Chat Responder
//!
//! File: cli/src/commands/chat/responder.rs
//!
//! ## Overview
//!
//! Turns one line of user text into one reply. The input is trimmed and
//! lower-cased, classified against the rule table in `rules.rs`, and the
//! matching rule's response policy produces the text.
//!
//! The random source and the clock are both injected: the binary uses an
//! entropy-seeded (or config-seeded) `StdRng` and the local wall clock, tests
//! use a fixed seed and a fixed instant.
//!
use super::expression::ExpressionEvaluator;
use super::rules::{self, ResponsePolicy, FALLBACK_REPLIES};
use crate::core::error::Result;
use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Source of the current local time.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Stateless apart from its random source.
pub struct Responder<G = StdRng> {
    rng: G,
    clock: Clock,
    evaluator: ExpressionEvaluator,
}

impl Responder<StdRng> {
    /// Builds a responder over `StdRng`.
    ///
    /// # Arguments
    ///
    /// * `seed` - Fixed seed for reproducible replies. `None` seeds from entropy.
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - A responder reading the local wall clock.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the arithmetic patterns fail to compile.
    pub fn seeded(seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => {
                debug!("Seeding responder with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<G: Rng> Responder<G> {
    /// Builds a responder over any random source.
    ///
    /// # Arguments
    ///
    /// * `rng` - Generator used to pick among candidate replies.
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - A responder reading the local wall clock.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the arithmetic patterns fail to compile.
    pub fn new(rng: G) -> Result<Self> {
        let evaluator =
            ExpressionEvaluator::new().context("Failed to compile arithmetic patterns")?;
        Ok(Self {
            rng,
            clock: local_now,
            evaluator,
        })
    }

    /// Replaces the wall clock used by the time and date intents.
    #[allow(dead_code)] // Only tests pin the clock; the binary uses the wall clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Produces the reply for one line of input.
    ///
    /// The text is trimmed and lower-cased, then the first matching rule in
    /// `RULES` decides the reply. Input no rule matches, including empty
    /// input, gets a random fallback reply.
    ///
    /// # Arguments
    ///
    /// * `text` - One line of user input, as typed.
    ///
    /// # Returns
    ///
    /// * `String` - The reply. This never fails.
    pub fn respond(&mut self, text: &str) -> String {
        let normalized = normalize(text);
        let Some(rule) = rules::classify(&normalized) else {
            debug!("No rule matched {:?}", normalized);
            return self.pick(FALLBACK_REPLIES);
        };
        debug!("Classified {:?} as {}", normalized, rule.intent);

        match rule.policy {
            ResponsePolicy::Fixed(reply) => reply.to_string(),
            ResponsePolicy::OneOf(candidates) => self.pick(candidates),
            ResponsePolicy::CurrentTime => {
                format!("The current time is {}", (self.clock)().format("%H:%M:%S"))
            }
            ResponsePolicy::CurrentDate => {
                format!("Today's date is {}", (self.clock)().format("%B %d, %Y"))
            }
            ResponsePolicy::Arithmetic => self.evaluator.evaluate(&normalized),
        }
    }

    fn pick(&mut self, candidates: &[&str]) -> String {
        // Candidate lists are non-empty; see the rules tests.
        candidates
            .choose(&mut self.rng)
            .map(|reply| reply.to_string())
            .unwrap_or_default()
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::chat::rules::{
        FAREWELL_REPLIES, GRATITUDE_REPLIES, GREETING_REPLIES, WELL_BEING_REPLIES,
    };
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 3))
            .expect("valid instant")
    }

    fn responder(seed: u64) -> Responder {
        Responder::seeded(Some(seed))
            .expect("responder builds")
            .with_clock(fixed_clock)
    }

    /// Calls `respond` many times and checks every reply is a candidate and
    /// every candidate shows up at least once.
    fn assert_covers(input: &str, candidates: &[&str]) {
        let mut bot = responder(11);
        let mut seen = HashSet::new();
        for _ in 0..400 {
            let reply = bot.respond(input);
            assert!(candidates.contains(&reply.as_str()), "unexpected reply {:?}", reply);
            seen.insert(reply);
        }
        assert_eq!(seen.len(), candidates.len(), "not every candidate was produced");
    }

    #[test]
    fn test_random_categories_cover_their_candidates() {
        assert_covers("Hello there", GREETING_REPLIES);
        assert_covers("how are you", WELL_BEING_REPLIES);
        assert_covers("bye now", FAREWELL_REPLIES);
        assert_covers("thank you", GRATITUDE_REPLIES);
        assert_covers("banana", FALLBACK_REPLIES);
    }

    #[test]
    fn test_input_is_trimmed_and_lowercased() {
        let mut bot = responder(1);
        assert_eq!(bot.respond("   PYTHON  "), rules::PROGRAMMING_REPLY);
    }

    #[test]
    fn test_empty_input_falls_back() {
        let mut bot = responder(2);
        let reply = bot.respond("");
        assert!(FALLBACK_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn test_greeting_outranks_farewell() {
        let mut bot = responder(3);
        for _ in 0..20 {
            let reply = bot.respond("hi, bye");
            assert!(GREETING_REPLIES.contains(&reply.as_str()));
        }
    }

    #[test]
    fn test_time_and_date_use_clock() {
        let mut bot = responder(4);
        assert_eq!(bot.respond("what time is it"), "The current time is 09:05:03");
        assert_eq!(bot.respond("What date is it"), "Today's date is March 07, 2024");
    }

    #[test]
    fn test_arithmetic_is_delegated() {
        let mut bot = responder(5);
        assert_eq!(bot.respond("What is 5 + 3?"), "5.0 + 3 = 8.0");
        assert_eq!(bot.respond("what is 7 times 6"), "7.0 * 6 = 42.0");
        assert_eq!(bot.respond("what is 8 / 0"), "Sorry, I can't divide by zero!");
    }

    #[test]
    fn test_fixed_replies() {
        let mut bot = responder(6);
        assert_eq!(bot.respond("Who are you?"), rules::IDENTITY_REPLY);
        assert_eq!(bot.respond("what is the weather"), rules::WEATHER_REPLY);
        assert_eq!(bot.respond("please calculate"), rules::MATH_HINT_REPLY);
    }

    #[test]
    fn test_same_seed_same_replies() {
        let mut a = responder(42);
        let mut b = responder(42);
        let inputs = ["hello", "banana", "thanks", "see you", "what's up"];
        for input in inputs {
            assert_eq!(a.respond(input), b.respond(input));
        }
    }
}
