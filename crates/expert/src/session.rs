#![forbid(unsafe_code)]

//! Console conversation loop.
//!
//! The session owns the knowledge base and hands it by reference to the
//! matcher, the responder and acquisition. Its lifecycle:
//!
//! ```text
//! Greeting -> Prompting -> Matching -> Responding -> Prompting
//!                 |            \-----> Acquiring  -> Prompting
//!                 \-> Closed (exit keyword or end of input)
//! ```

use std::io::Write;

use rand::Rng;
use tracing::debug;

use crate::acquisition::acquire;
use crate::config::ChatConfig;
use crate::error::Result;
use crate::input::LineSource;
use crate::knowledge::KnowledgeBase;
use crate::matcher::find_best_intent;
use crate::responder::{select_response, NO_RESPONSE_FALLBACK};
use crate::store::KnowledgeStore;

const RULE: &str = "===========================================";
const TITLE: &str = "  Mini Sistema Experto con Aprendizaje 🧠  ";
/// Marker in front of every bot line.
pub const BOT: &str = "🤖";
/// Prompt shown before each user line.
pub const PROMPT: &str = "Tú: ";
/// Line printed when the user leaves.
pub const FAREWELL: &str = "¡Hasta luego!";

/// Where the session is in its loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// banner and startup lines not shown yet
    Greeting,
    /// waiting for the next user line
    Prompting,
    /// scoring a user line against the knowledge base
    Matching(String),
    /// replying from an accepted intent
    Responding {
        /// accepted intent index
        intent: usize,
        /// score of the winning pattern
        similarity: f64,
    },
    /// nothing matched, asking the user to teach a reply
    Acquiring(String),
    /// terminal
    Closed,
}

/// One interactive conversation.
pub struct Session<S, L, W, R> {
    config: ChatConfig,
    kb: KnowledgeBase,
    store: S,
    input: L,
    out: W,
    rng: R,
    state: SessionState,
}

impl<S, L, W, R> Session<S, L, W, R>
where
    S: KnowledgeStore,
    L: LineSource,
    W: Write,
    R: Rng,
{
    /// Load the knowledge base from `store` and prepare a session.
    pub fn open(config: ChatConfig, mut store: S, input: L, out: W, rng: R) -> Result<Self> {
        let kb = store.load()?;
        Ok(Self {
            config,
            kb,
            store,
            input,
            out,
            rng,
            state: SessionState::Greeting,
        })
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Knowledge base as currently held in memory.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Drive the loop until the session is closed.
    pub fn run(&mut self) -> Result<()> {
        while self.state != SessionState::Closed {
            self.step()?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Perform one transition.
    pub fn step(&mut self) -> Result<()> {
        let state = std::mem::replace(&mut self.state, SessionState::Closed);
        self.state = match state {
            SessionState::Greeting => {
                self.greet()?;
                SessionState::Prompting
            }
            SessionState::Prompting => self.prompt()?,
            SessionState::Matching(message) => {
                let found = find_best_intent(&message, &self.kb, self.config.threshold);
                match found.intent {
                    Some(intent) => SessionState::Responding {
                        intent,
                        similarity: found.similarity,
                    },
                    None => SessionState::Acquiring(message),
                }
            }
            SessionState::Responding { intent, similarity } => {
                let answer = match self.kb.intents.get(intent) {
                    Some(found) => select_response(found, &mut self.rng),
                    None => NO_RESPONSE_FALLBACK,
                };
                writeln!(self.out, "{BOT} {answer}  (match≈{similarity:.2})")?;
                SessionState::Prompting
            }
            SessionState::Acquiring(message) => {
                let status = acquire(
                    &message,
                    &mut self.kb,
                    &mut self.store,
                    &mut self.input,
                    &mut self.out,
                )?;
                writeln!(self.out, "{BOT} {status}")?;
                SessionState::Prompting
            }
            SessionState::Closed => SessionState::Closed,
        };
        Ok(())
    }

    fn greet(&mut self) -> Result<()> {
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "{TITLE}")?;
        writeln!(self.out, "{RULE}\n")?;
        for line in &self.kb.startup_lines {
            writeln!(self.out, "{BOT} {line}")?;
        }
        writeln!(self.out, "\nEscribe 'salir' para terminar.\n")?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<SessionState> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()?;
        let Some(line) = self.input.next_line()? else {
            debug!("end of input, closing session");
            writeln!(self.out)?;
            return Ok(SessionState::Closed);
        };
        let line = line.trim();
        if line.is_empty() {
            return Ok(SessionState::Prompting);
        }
        if self.config.is_exit(line) {
            writeln!(self.out, "{BOT} {FAREWELL}")?;
            return Ok(SessionState::Closed);
        }
        Ok(SessionState::Matching(line.to_string()))
    }
}
