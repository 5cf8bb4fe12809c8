#![deny(unsafe_code)]

//! The name-matching engine.
//!
//! Matching is exact equality on canonical keys, never similarity scoring.
//! A roster record becomes a set of whole-name candidate strings
//! ([`candidates`]), each candidate becomes up to four canonical keys
//! ([`normalize`]), and folder names are indexed under their own key sets
//! ([`index`]). The resolver ([`resolver`]) joins the two sides so that each
//! physical folder is acted on exactly once, and the destination planner
//! ([`destination`]) assigns collision-free destination names that stay
//! correct in simulate mode.

pub mod candidates;
pub mod destination;
pub mod index;
pub mod normalize;
pub mod resolver;

pub use candidates::name_candidates;
pub use destination::DestinationPlanner;
pub use index::{FolderIndex, ScanReport, scan_source_roots};
pub use normalize::key_variants;
pub use resolver::{MatchOutcome, record_key_set, resolve_matches};
