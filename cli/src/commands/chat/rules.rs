//! # Chat Intent Rules
//!
//! File: cli/src/commands/chat/rules.rs
//!
//! ## Overview
//!
//! The chatbot's fixed rule table. Each `IntentRule` pairs a trigger matcher
//! with a response policy; rules are checked top to bottom and the first match
//! wins, even when a later rule would also match. Matching is plain substring
//! containment on the normalized (trimmed, lower-cased) input, so "hi" also
//! fires inside "this".
//!
//! Adding an intent means adding a row to `RULES`; the responder's control
//! flow does not change.
//!
use std::fmt;

/// The conversational bucket an input was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    WellBeing,
    Identity,
    Time,
    Date,
    ArtificialIntelligence,
    Programming,
    Weather,
    Help,
    MathMention,
    Arithmetic,
    Farewell,
    Gratitude,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::WellBeing => "well-being",
            Intent::Identity => "identity",
            Intent::Time => "time",
            Intent::Date => "date",
            Intent::ArtificialIntelligence => "ai",
            Intent::Programming => "programming",
            Intent::Weather => "weather",
            Intent::Help => "help",
            Intent::MathMention => "math-mention",
            Intent::Arithmetic => "arithmetic",
            Intent::Farewell => "farewell",
            Intent::Gratitude => "gratitude",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether a rule fires for a normalized input.
#[derive(Debug)]
pub enum Matcher {
    /// At least one trigger is a substring of the input.
    AnyOf(&'static [&'static str]),
    /// The input contains `phrase` and at least one of `any_of`.
    PhraseWithAnyOf {
        phrase: &'static str,
        any_of: &'static [&'static str],
    },
}

impl Matcher {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Matcher::AnyOf(triggers) => contains_any(normalized, triggers),
            Matcher::PhraseWithAnyOf { phrase, any_of } => {
                normalized.contains(phrase) && contains_any(normalized, any_of)
            }
        }
    }
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// How the reply is produced once a rule has matched.
#[derive(Debug)]
pub enum ResponsePolicy {
    Fixed(&'static str),
    /// One candidate chosen uniformly at random per call. Never empty.
    OneOf(&'static [&'static str]),
    /// "The current time is HH:MM:SS".
    CurrentTime,
    /// "Today's date is Month DD, YYYY".
    CurrentDate,
    /// Handed to the expression evaluator.
    Arithmetic,
}

#[derive(Debug)]
pub struct IntentRule {
    pub intent: Intent,
    pub matcher: Matcher,
    pub policy: ResponsePolicy,
}

pub const GREETING_REPLIES: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! What would you like to know?",
    "Hey! I'm here to assist you.",
    "Greetings! How may I assist you?",
];

pub const WELL_BEING_REPLIES: &[&str] = &[
    "I'm doing great! Thanks for asking. How are you?",
    "I'm functioning perfectly! How about you?",
    "All systems running smoothly! How can I help you today?",
];

pub const FAREWELL_REPLIES: &[&str] = &[
    "Goodbye! Have a great day!",
    "See you later! Take care!",
    "Bye! It was nice chatting with you!",
    "Until next time! Have a wonderful day!",
];

pub const GRATITUDE_REPLIES: &[&str] = &[
    "You're welcome! Happy to help!",
    "No problem! Anything else I can help with?",
    "Glad I could help! Is there anything else?",
];

/// Replies for input no rule recognizes.
pub const FALLBACK_REPLIES: &[&str] = &[
    "I'm not sure I understand. Could you rephrase that?",
    "That's interesting! Can you tell me more?",
    "I'm still learning. Could you try asking something else?",
    "Hmm, I don't quite get that. Try asking about AI, programming, or the time!",
    "I'm a simple chatbot. Try greeting me or asking about AI!",
];

pub const IDENTITY_REPLY: &str = "I'm ChatBot, your friendly AI assistant! What's your name?";
pub const AI_REPLY: &str = "AI (Artificial Intelligence) is the simulation of human intelligence in machines. It includes machine learning, neural networks, and various algorithms that help computers learn and make decisions!";
pub const PROGRAMMING_REPLY: &str = "Python is a fantastic programming language for AI and machine learning! It's beginner-friendly and has powerful libraries like NumPy, Pandas, and TensorFlow.";
pub const WEATHER_REPLY: &str = "I don't have access to real-time weather data, but I recommend checking your local weather app or website for accurate information!";
pub const HELP_REPLY: &str = "I'm here to help! I can chat about AI, programming, tell you the time/date, or just have a friendly conversation. What would you like to know?";
pub const MATH_HINT_REPLY: &str = "I can help with basic math! Try asking me something like 'what is 5 + 3?' or 'calculate 10 * 7'";

/// Rules in priority order, highest first.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Greeting,
        matcher: Matcher::AnyOf(&[
            "hello",
            "hi",
            "hey",
            "good morning",
            "good afternoon",
            "good evening",
        ]),
        policy: ResponsePolicy::OneOf(GREETING_REPLIES),
    },
    IntentRule {
        intent: Intent::WellBeing,
        matcher: Matcher::AnyOf(&["how are you", "how do you do", "what's up"]),
        policy: ResponsePolicy::OneOf(WELL_BEING_REPLIES),
    },
    IntentRule {
        intent: Intent::Identity,
        matcher: Matcher::AnyOf(&["what is your name", "your name", "who are you"]),
        policy: ResponsePolicy::Fixed(IDENTITY_REPLY),
    },
    IntentRule {
        intent: Intent::Time,
        matcher: Matcher::AnyOf(&["what time", "current time", "time now"]),
        policy: ResponsePolicy::CurrentTime,
    },
    IntentRule {
        intent: Intent::Date,
        matcher: Matcher::AnyOf(&["what date", "today's date", "current date"]),
        policy: ResponsePolicy::CurrentDate,
    },
    IntentRule {
        intent: Intent::ArtificialIntelligence,
        matcher: Matcher::AnyOf(&[
            "what is ai",
            "artificial intelligence",
            "machine learning",
        ]),
        policy: ResponsePolicy::Fixed(AI_REPLY),
    },
    IntentRule {
        intent: Intent::Programming,
        matcher: Matcher::AnyOf(&["python", "programming", "coding"]),
        policy: ResponsePolicy::Fixed(PROGRAMMING_REPLY),
    },
    IntentRule {
        intent: Intent::Weather,
        matcher: Matcher::AnyOf(&["weather", "temperature", "climate"]),
        policy: ResponsePolicy::Fixed(WEATHER_REPLY),
    },
    IntentRule {
        intent: Intent::Help,
        matcher: Matcher::AnyOf(&["help", "assist", "support"]),
        policy: ResponsePolicy::Fixed(HELP_REPLY),
    },
    IntentRule {
        intent: Intent::MathMention,
        matcher: Matcher::AnyOf(&[
            "calculate",
            "math",
            "add",
            "subtract",
            "multiply",
            "divide",
        ]),
        policy: ResponsePolicy::Fixed(MATH_HINT_REPLY),
    },
    IntentRule {
        intent: Intent::Arithmetic,
        matcher: Matcher::PhraseWithAnyOf {
            phrase: "what is",
            any_of: &["+", "-", "*", "/", "plus", "minus", "times", "divided"],
        },
        policy: ResponsePolicy::Arithmetic,
    },
    IntentRule {
        intent: Intent::Farewell,
        matcher: Matcher::AnyOf(&["bye", "goodbye", "see you", "exit", "quit"]),
        policy: ResponsePolicy::OneOf(FAREWELL_REPLIES),
    },
    IntentRule {
        intent: Intent::Gratitude,
        matcher: Matcher::AnyOf(&["thank you", "thanks", "appreciate"]),
        policy: ResponsePolicy::OneOf(GRATITUDE_REPLIES),
    },
];

/// Returns the first rule whose matcher fires, or `None` for the fallback bucket.
pub fn classify(normalized: &str) -> Option<&'static IntentRule> {
    RULES.iter().find(|rule| rule.matcher.matches(normalized))
}
