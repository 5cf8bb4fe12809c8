//! Whole-name candidate generation.
//!
//! Folders are named by at most two name parts, so candidates are the three
//! standalone fields plus the orderings of surname with one secondary field.
//! Candidates are raw strings: accent and punctuation handling is the
//! normalizer's job, composed afterwards by the caller.

use std::collections::BTreeSet;

use namemove_model::NameRecord;

use crate::normalize::collapse_whitespace;

/// The plausible whole-name strings a folder might be named after.
///
/// Empty fields are excluded from every combination they would appear in;
/// no combination is generated without a surname, and no three-way
/// combination is generated at all.
pub fn name_candidates(record: &NameRecord) -> BTreeSet<String> {
    let surname = collapse_whitespace(&record.surname);
    let given = collapse_whitespace(&record.given);
    let preferred = collapse_whitespace(&record.preferred);

    let mut candidates = BTreeSet::new();
    for standalone in [&preferred, &given, &surname] {
        if !standalone.is_empty() {
            candidates.insert(standalone.clone());
        }
    }
    if !surname.is_empty() {
        for secondary in [&given, &preferred] {
            if secondary.is_empty() {
                continue;
            }
            candidates.insert(format!("{secondary} {surname}"));
            candidates.insert(format!("{surname} {secondary}"));
            candidates.insert(format!("{surname}, {secondary}"));
        }
    }
    candidates
}
