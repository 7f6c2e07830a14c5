//! I/O pipeline for ipsift.
//!
//! Responsible for reading server logs through a permissive Latin-1 decoder,
//! running the single-pass classification scan and writing the suspicious-IP
//! CSV report.

pub mod reader;
pub mod report;
pub mod scanner;

pub use sift_core as core;
