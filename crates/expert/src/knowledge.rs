#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// A group of equivalent trigger phrases sharing a pool of replies.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Intent {
    /// raw, unnormalized trigger phrases
    #[serde(default)]
    pub patterns: Vec<String>,
    /// candidate replies
    #[serde(default)]
    pub responses: Vec<String>,
}

impl Intent {
    /// Build an intent from string slices.
    pub fn new<P, R>(patterns: &[P], responses: &[R]) -> Self
    where
        P: AsRef<str>,
        R: AsRef<str>,
    {
        Self {
            patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
            responses: responses.iter().map(|r| r.as_ref().to_string()).collect(),
        }
    }
}

/// Everything the bot knows: greeting lines plus ordered intents.
///
/// Intent order matters only for tie-breaking in the matcher and in
/// acquisition merges.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    /// lines shown once when a session starts
    #[serde(default)]
    pub startup_lines: Vec<String>,
    /// known intents in insertion order
    #[serde(default)]
    pub intents: Vec<Intent>,
}

impl KnowledgeBase {
    /// Built-in seed used when no knowledge file exists yet.
    pub fn seed() -> Self {
        Self {
            startup_lines: vec![
                "Hola 👋".to_string(),
                "¿Cómo estás?".to_string(),
                "¿De qué te gustaría hablar?".to_string(),
            ],
            intents: vec![
                Intent::new(
                    &["hola", "buenas", "hey", "que onda", "que tal"],
                    &[
                        "¡Hola! ¿En qué puedo ayudarte?",
                        "¡Hey! ¿Qué tema te interesa hoy?",
                    ],
                ),
                Intent::new(
                    &["como estas", "que tal estas"],
                    &["¡A toda máquina! ¿Y tú?", "Muy bien, listo para ayudarte."],
                ),
                Intent::new(
                    &["de que te gustaria hablar", "temas", "sugerencias"],
                    &["Podemos hablar de motores, electrónica, IA, emprendimiento… tú eliges."],
                ),
                // sample domain: best tuning engines
                Intent::new(
                    &[
                        "mejores motores tuning de la historia",
                        "cuales son los mejores motores para tuning",
                        "top motores para modificar",
                        "mejor motor para tuneo",
                    ],
                    &[
                        "Algunos clásicos del tuning: Toyota 2JZ-GTE, Nissan RB26DETT, Honda B16/B18/K20, Mitsubishi 4G63T, VW 1.8T/2.0T, GM LS (LS1/LS3), Ford Coyote 5.0, BMW S54/S55, Subaru EJ20/EJ25.",
                        "Lista rápida: 2JZ-GTE, RB26DETT, 4G63T, K20, LS3, Coyote 5.0, 1.8T VAG. ¿Quieres pros/contras de alguno?",
                    ],
                ),
                Intent::new(
                    &["por que el 2jz es tan bueno", "ventajas del 2jz", "2jz gte fuerte"],
                    &["El 2JZ-GTE es famoso por su bloque de hierro súper robusto, bielas fuertes, culata eficiente y soporte aftermarket enorme; aguanta potencias altas con preparación adecuada."],
                ),
                Intent::new(
                    &["rb26 vs 2jz", "comparacion rb26 2jz", "cual es mejor rb26 o 2jz"],
                    &["RB26DETT: sonido icónico, alto potencial pero requiere cariño en lubricación; 2JZ-GTE: más robusto de serie, fácil de llevar a potencias altas. La elección depende de presupuesto, disponibilidad y objetivo."],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_patterns_and_responses_everywhere() {
        let kb = KnowledgeBase::seed();
        assert_eq!(kb.startup_lines.len(), 3);
        assert_eq!(kb.intents.len(), 6);
        for intent in &kb.intents {
            assert!(!intent.patterns.is_empty());
            assert!(!intent.responses.is_empty());
        }
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let kb: KnowledgeBase = serde_json::from_str(r#"{"intents":[{"patterns":["x"]}]}"#)
            .unwrap();
        assert!(kb.startup_lines.is_empty());
        assert_eq!(kb.intents[0].patterns, vec!["x".to_string()]);
        assert!(kb.intents[0].responses.is_empty());
    }
}
