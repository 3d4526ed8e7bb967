//! # Garden IO
//!
//! I/O and persistence layer for Pixel Garden.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization helpers
//! - Versioned save files and a file-backed `StateStore`
//! - CSV import/export of the finance ledger

/// Finance ledger CSV interchange
pub mod csv;
/// Error types and result aliases for I/O operations
pub mod error;
/// Versioned save files and the file-backed state store
pub mod persistence;
/// Validated JSON serialization helpers
pub mod serialization;

pub use error::{IoError, Result};
pub use persistence::{load_state, save_state, FileStore, CURRENT_SAVE_VERSION};
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};
