use proptest::prelude::*;
use toktrim_core::{Result, Tokenizer, TokenizerError, Truncator};

/// One token per character; decode fails on invalid scalar values so the
/// engine's recovery path stays reachable.
struct CharTokenizer;

impl Tokenizer for CharTokenizer {
    fn encode(&self, text: &str) -> Vec<u32> {
        text.chars().map(|c| c as u32).collect()
    }

    fn decode(&self, tokens: &[u32]) -> Result<String> {
        tokens
            .iter()
            .map(|&t| {
                char::from_u32(t)
                    .ok_or_else(|| TokenizerError::Decode(format!("invalid token id {t}")))
            })
            .collect()
    }
}

proptest! {
    #[test]
    fn truncated_text_fits_budget(s in ".{0,200}", budget in 0usize..50) {
        let tokenizer = CharTokenizer;
        let truncator = Truncator::new(&tokenizer);
        let out = truncator.truncate(&s, budget, true).unwrap();
        prop_assert!(truncator.count(&out) <= budget);
    }

    #[test]
    fn truncate_is_idempotent(s in ".{0,200}", budget in 1usize..50) {
        let tokenizer = CharTokenizer;
        let truncator = Truncator::new(&tokenizer);
        let once = truncator.truncate(&s, budget, false).unwrap();
        let twice = truncator.truncate(&once, budget, false).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn short_text_passes_untouched(s in ".{0,200}", budget in 0usize..400) {
        let tokenizer = CharTokenizer;
        let truncator = Truncator::new(&tokenizer);
        let out = truncator.truncate(&s, budget, false).unwrap();
        if truncator.count(&s) <= budget {
            prop_assert_eq!(out, s);
        }
    }

    #[test]
    fn strict_below_limit_matches_count(s in ".{0,200}", limit in 0usize..400) {
        let tokenizer = CharTokenizer;
        let truncator = Truncator::new(&tokenizer);
        prop_assert_eq!(
            truncator.below_limit(&s, limit, true),
            truncator.count(&s) < limit
        );
    }
}
