#![forbid(unsafe_code)]

use rand::seq::SliceRandom;
use rand::Rng;

use crate::knowledge::Intent;

/// Reply used when an intent has no stored responses.
pub const NO_RESPONSE_FALLBACK: &str = "No tengo una respuesta guardada aún.";

/// Pick one response uniformly at random from `intent`.
pub fn select_response<'a, R: Rng + ?Sized>(intent: &'a Intent, rng: &mut R) -> &'a str {
    intent
        .responses
        .choose(rng)
        .map(String::as_str)
        .unwrap_or(NO_RESPONSE_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn empty_intent_uses_fallback() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let intent = Intent::new(&["hola"], &[] as &[&str]);
        assert_eq!(select_response(&intent, &mut rng), NO_RESPONSE_FALLBACK);
    }

    #[test]
    fn single_response_is_always_chosen() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let intent = Intent::new(&["hola"], &["solo"]);
        for _ in 0..10 {
            assert_eq!(select_response(&intent, &mut rng), "solo");
        }
    }

    #[test]
    fn same_seed_same_choice_and_all_reachable() {
        let intent = Intent::new(&["hola"], &["a", "b", "c"]);
        let mut r1 = ChaCha8Rng::seed_from_u64(1);
        let mut r2 = ChaCha8Rng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let a = select_response(&intent, &mut r1);
            assert_eq!(a, select_response(&intent, &mut r2));
            seen.insert(a);
        }
        assert_eq!(seen.len(), 3);
    }
}
