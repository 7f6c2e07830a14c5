//! Shared types for the ipsift suspicious-IP scanner.
//!
//! Holds the line classifiers, the scan accumulator, the error type and the
//! CLI settings shared by the pipeline and binary crates.

pub mod error;
pub mod models;
pub mod patterns;
pub mod settings;
