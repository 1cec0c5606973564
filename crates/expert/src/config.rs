#![forbid(unsafe_code)]

use std::path::PathBuf;

use crate::matcher::DEFAULT_THRESHOLD;

/// Knowledge file used when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_KNOWLEDGE_FILE: &str = "knowledge_base.json";

/// Session configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
    /// where the knowledge base is persisted
    pub knowledge_path: PathBuf,
    /// minimum similarity for a match to be accepted
    pub threshold: f64,
    /// words that end the session, compared case-insensitively
    pub exit_keywords: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            knowledge_path: PathBuf::from(DEFAULT_KNOWLEDGE_FILE),
            threshold: DEFAULT_THRESHOLD,
            exit_keywords: ["salir", "exit", "quit"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl ChatConfig {
    /// True when `line` (already trimmed) is one of the exit keywords.
    pub fn is_exit(&self, line: &str) -> bool {
        let lowered = line.to_lowercase();
        self.exit_keywords
            .iter()
            .any(|k| k.to_lowercase() == lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ChatConfig::default();
        assert_eq!(cfg.threshold, 0.45);
        assert_eq!(cfg.knowledge_path, PathBuf::from("knowledge_base.json"));
    }

    #[test]
    fn exit_keywords_ignore_case() {
        let cfg = ChatConfig::default();
        assert!(cfg.is_exit("SALIR"));
        assert!(cfg.is_exit("Quit"));
        assert!(cfg.is_exit("exit"));
        assert!(!cfg.is_exit("salir ya"));
        assert!(!cfg.is_exit("hola"));
    }
}
