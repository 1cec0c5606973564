#![forbid(unsafe_code)]

//! Interactive learning when no intent matches.
//!
//! Acquisition is strictly additive: it may append a response to an
//! existing intent or append a new intent, never edit or remove anything.

use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::input::LineSource;
use crate::knowledge::{Intent, KnowledgeBase};
use crate::store::KnowledgeStore;
use crate::tokenizer::normalize;

/// Status returned when the user skips teaching.
pub const SKIPPED: &str = "Entendido. Sigamos.";
/// Status returned after a new association was stored.
pub const LEARNED: &str = "¡Gracias! He aprendido una nueva asociación.";

/// Where a taught response ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Learned {
    /// appended to the responses of an existing intent
    Attached(usize),
    /// stored as a brand new intent at this index
    Created(usize),
}

/// Split a `;`-separated pattern line, falling back to `message` when the
/// line holds no usable pattern.
pub fn parse_patterns(line: &str, message: &str) -> Vec<String> {
    let patterns: Vec<String> = line
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if patterns.is_empty() {
        vec![message.to_string()]
    } else {
        patterns
    }
}

/// Merge `response` into `kb`.
///
/// The first intent owning a pattern whose normalized form equals the
/// normalized form of any of `patterns` receives the response. Otherwise a
/// new intent is appended.
pub fn learn(kb: &mut KnowledgeBase, patterns: Vec<String>, response: String) -> Learned {
    let wanted: Vec<String> = patterns.iter().map(|p| normalize(p)).collect();

    let owner = kb.intents.iter().position(|intent| {
        intent
            .patterns
            .iter()
            .any(|existing| wanted.contains(&normalize(existing)))
    });

    if let Some(i) = owner {
        if let Some(intent) = kb.intents.get_mut(i) {
            intent.responses.push(response);
            return Learned::Attached(i);
        }
    }

    kb.intents.push(Intent {
        patterns,
        responses: vec![response],
    });
    Learned::Created(kb.intents.len() - 1)
}

fn ask<L, W>(input: &mut L, out: &mut W, prompt: &str) -> Result<String>
where
    L: LineSource + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{prompt}")?;
    out.flush()?;
    Ok(input.next_line()?.unwrap_or_default().trim().to_string())
}

/// Ask the user to teach a reply for `message`, update `kb` and persist it.
///
/// Returns the status line to show. An empty answer (or end of input)
/// aborts without touching `kb` or the store.
pub fn acquire<S, L, W>(
    message: &str,
    kb: &mut KnowledgeBase,
    store: &mut S,
    input: &mut L,
    out: &mut W,
) -> Result<String>
where
    S: KnowledgeStore + ?Sized,
    L: LineSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "\n🤖 No encontré una respuesta exacta para tu pregunta.")?;
    writeln!(
        out,
        "Para enseñarme, escribe la respuesta que te gustaría que yo diga la próxima vez."
    )?;
    writeln!(out, "(O presiona Enter sin texto para saltar.)")?;
    let response = ask(input, out, "Tu respuesta deseada: ")?;
    if response.is_empty() {
        return Ok(SKIPPED.to_string());
    }

    writeln!(
        out,
        "\n¿Quieres guardar también una o más frases de activación (patrones) para asociar esta respuesta?"
    )?;
    writeln!(out, "Si dejas vacío, usaré tu pregunta actual como patrón.")?;
    let line = ask(input, out, "Patrones separados por ';' (opcional): ")?;
    let patterns = parse_patterns(&line, message);

    let outcome = learn(kb, patterns, response);
    info!(?outcome, intents = kb.intents.len(), "learned new association");
    store.save(kb)?;

    Ok(LEARNED.to_string())
}
