#![deny(unsafe_code)]

//! Roster ingestion for the namemove pipeline.
//!
//! Reads the tabular input into a thin string table, resolves the three name
//! columns by fuzzy header lookup, and produces typed [`NameRecord`]s before
//! any matching logic runs.
//!
//! [`NameRecord`]: namemove_model::NameRecord

pub mod columns;
pub mod error;
pub mod roster;

pub use columns::{NameColumns, ResolvedColumn, extract_records, resolve_name_columns};
pub use error::{IngestError, Result};
pub use roster::{RosterTable, read_roster};
