#![deny(unsafe_code)]

//! Library surface of the namemove CLI.
//!
//! The pipeline lives here so integration tests can drive a whole run
//! without spawning the binary.

pub mod logging;
pub mod pipeline;
pub mod types;
