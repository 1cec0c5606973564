#![forbid(unsafe_code)]

use tracing::debug;

use crate::knowledge::KnowledgeBase;
use crate::similarity::jaccard_tokens;

/// Default acceptance threshold for a match.
pub const DEFAULT_THRESHOLD: f64 = 0.45;

/// Outcome of scanning every pattern of a knowledge base.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentMatch {
    /// index of the accepted intent, `None` when the best score is below threshold
    pub intent: Option<usize>,
    /// best similarity seen during the scan
    pub similarity: f64,
    /// pattern that produced `similarity` (empty if nothing scored above zero)
    pub pattern: String,
}

impl IntentMatch {
    /// True when an intent was accepted.
    pub fn is_match(&self) -> bool {
        self.intent.is_some()
    }
}

/// Find the best intent for `message`.
///
/// Raw message and raw patterns go straight to the scorer, which does the
/// normalization. The first pattern reaching the highest score wins, so
/// ties resolve to the lowest intent index (then the earliest pattern).
pub fn find_best_intent(message: &str, kb: &KnowledgeBase, threshold: f64) -> IntentMatch {
    let mut best: Option<usize> = None;
    let mut best_sim = 0.0_f64;
    let mut best_pat = "";

    for (i, intent) in kb.intents.iter().enumerate() {
        for pat in &intent.patterns {
            let sim = jaccard_tokens(message, pat);
            if sim > best_sim {
                best = Some(i);
                best_sim = sim;
                best_pat = pat.as_str();
            }
        }
    }

    debug!(input = message, best_sim, pattern = best_pat, "intent scan finished");

    IntentMatch {
        intent: best.filter(|_| best_sim >= threshold),
        similarity: best_sim,
        pattern: best_pat.to_string(),
    }
}
