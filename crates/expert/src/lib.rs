#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]
#![deny(missing_docs, unused_must_use)]

//! Expert: a tiny learning chatbot
//!
//! Replies come from a JSON knowledge base of intents (trigger patterns plus
//! candidate responses). User lines are matched with token-set Jaccard
//! similarity; when nothing scores above the threshold the bot asks the
//! user to teach it a reply and persists the new association.
//!
//! Layout (important files):
//! - `tokenizer.rs` — text normalization and token sets
//! - `similarity.rs` — Jaccard score over token sets
//! - `knowledge.rs` — `KnowledgeBase` / `Intent` and the seed base
//! - `store.rs` — `KnowledgeStore` trait, JSON file and in-memory stores
//! - `matcher.rs` — best-intent scan with stable tie-breaking
//! - `responder.rs` — random response choice with an injectable RNG
//! - `acquisition.rs` — interactive learning on no-match
//! - `session.rs` — the console state machine
//! - `bin/chat.rs` — REPL wiring stdin/stdout to a `Session`

/// Session settings and defaults.
pub mod config;
/// Crate error type.
pub mod error;
/// Text normalization and tokenization.
pub mod tokenizer;
pub use tokenizer::{normalize, token_set};
/// Token-set similarity.
pub mod similarity;
pub use similarity::jaccard_tokens;
/// Knowledge data model.
pub mod knowledge;
pub use knowledge::{Intent, KnowledgeBase};
/// Knowledge persistence.
pub mod store;
pub use store::{JsonFileStore, KnowledgeStore, MemoryStore};
/// Intent matching.
pub mod matcher;
pub use matcher::{find_best_intent, IntentMatch, DEFAULT_THRESHOLD};
/// Response selection.
pub mod responder;
pub use responder::select_response;
/// Line sources for interactive prompts.
pub mod input;
pub use input::{ConsoleReader, LineSource, ScriptedReader};
/// Interactive knowledge acquisition.
pub mod acquisition;
pub use acquisition::{acquire, learn, Learned};
/// Conversation loop.
pub mod session;
pub use session::{Session, SessionState};

pub use config::ChatConfig;
pub use error::{ExpertError, Result};
