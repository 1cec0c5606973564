#![forbid(unsafe_code)]

use crate::tokenizer::token_set;

/// Jaccard similarity of the token sets of `a` and `b`.
///
/// Both inputs are normalized here, so callers pass raw text. Two empty
/// token sets are identical (1.0); exactly one empty set scores 0.0.
/// Repeated words do not change the score.
pub fn jaccard_tokens(a: &str, b: &str) -> f64 {
    let ta = token_set(a);
    let tb = token_set(b);
    match (ta.is_empty(), tb.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }
    let inter = ta.intersection(&tb).count();
    let union = ta.union(&tb).count();
    inter as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn degenerate_cases() {
        assert_eq!(jaccard_tokens("", ""), 1.0);
        assert_eq!(jaccard_tokens("!!", "  "), 1.0);
        assert_eq!(jaccard_tokens("a", ""), 0.0);
        assert_eq!(jaccard_tokens("", "a"), 0.0);
    }

    #[test]
    fn order_and_case_independent() {
        assert_eq!(jaccard_tokens("hola mundo", "mundo hola"), 1.0);
        assert_eq!(jaccard_tokens("HOLA, Mundo!", "mundo hola"), 1.0);
    }

    #[test]
    fn partial_overlap() {
        let s = jaccard_tokens("a b", "a b c");
        assert!((s - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(jaccard_tokens("a", "b"), 0.0);
    }

    #[test]
    fn repetition_does_not_matter() {
        assert_eq!(jaccard_tokens("hola hola hola", "hola"), 1.0);
    }

    proptest! {
        #[test]
        fn bounded_and_symmetric(a in "[a-z ]{0,20}", b in "[a-z ]{0,20}") {
            let ab = jaccard_tokens(&a, &b);
            prop_assert!((0.0..=1.0).contains(&ab));
            prop_assert_eq!(ab, jaccard_tokens(&b, &a));
        }
    }
}
