//! Canonical key generation.
//!
//! Every raw string yields up to four canonical forms, the cross product of
//! two independent transforms: accent folding (compatibility decomposition
//! with combining marks dropped) and punctuation stripping. Each form is then
//! whitespace-collapsed, trimmed, and lowercased. Duplicate forms collapse
//! into the set.

use std::collections::BTreeSet;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use namemove_model::CanonicalKey;

/// Punctuation that joins the surrounding letters when stripped: apostrophes
/// and backticks, so that "O'Brien" and "OBrien" share a key.
const JOINING_PUNCT: [char; 3] = ['\'', '\u{2019}', '`'];

/// Punctuation that separates name parts when stripped: it becomes a space,
/// so that "jose-perez" and "jose perez" share a key.
const SEPARATING_PUNCT: [char; 5] = [',', '.', '-', '(', ')'];

/// Collapse internal whitespace runs to single spaces and trim.
pub fn collapse_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for part in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

fn fold_accents(raw: &str) -> String {
    raw.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

fn strip_punctuation(raw: &str) -> String {
    raw.chars()
        .filter(|c| !JOINING_PUNCT.contains(c))
        .map(|c| if SEPARATING_PUNCT.contains(&c) { ' ' } else { c })
        .collect()
}

/// All canonical keys for one raw string.
///
/// Pure and total: any input is accepted, and blank input yields the empty
/// set. Forms that strip down to nothing (e.g. a string of punctuation) are
/// excluded.
pub fn key_variants(raw: &str) -> BTreeSet<CanonicalKey> {
    if raw.trim().is_empty() {
        return BTreeSet::new();
    }
    let base = collapse_whitespace(raw).to_lowercase();
    let folded = collapse_whitespace(&fold_accents(raw)).to_lowercase();
    let stripped = collapse_whitespace(&strip_punctuation(&base));
    let stripped_folded = collapse_whitespace(&strip_punctuation(&folded));

    [base, folded, stripped, stripped_folded]
        .into_iter()
        .filter(|form| !form.is_empty())
        .map(CanonicalKey::new)
        .collect()
}
