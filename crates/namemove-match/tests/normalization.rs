//! Property tests for canonical key generation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use namemove_match::key_variants;

proptest! {
    /// A string that is already lowercase, accent-free, punctuation-free,
    /// single-spaced, and trimmed is a fixed point: it normalizes to exactly
    /// itself.
    #[test]
    fn canonical_strings_are_fixed_points(s in "[a-z]{1,10}( [a-z]{1,10}){0,3}") {
        let keys: BTreeSet<String> = key_variants(&s)
            .into_iter()
            .map(|k| k.as_str().to_string())
            .collect();
        prop_assert_eq!(keys, BTreeSet::from([s]));
    }

    /// Normalizing any key of any input reproduces that key (keys are
    /// themselves canonical).
    #[test]
    fn keys_are_stable_under_renormalization(s in "\\PC{0,24}") {
        for key in key_variants(&s) {
            let again = key_variants(key.as_str());
            prop_assert!(
                again.contains(&key),
                "key {:?} of {:?} not stable, got {:?}",
                key,
                s,
                again
            );
        }
    }

    /// The normalizer is total and bounded: it never panics and never
    /// produces more than four keys.
    #[test]
    fn never_more_than_four_keys(s in "\\PC{0,40}") {
        prop_assert!(key_variants(&s).len() <= 4);
    }

    /// Case differences never change the key set.
    #[test]
    fn case_insensitive(s in "[a-zA-Z' ,.-]{0,24}") {
        prop_assert_eq!(key_variants(&s), key_variants(&s.to_lowercase()));
    }
}
