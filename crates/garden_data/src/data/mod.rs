//! Core data structures for the Pixel Garden.

pub mod finance;
pub mod garden;
pub mod organism;
pub mod state;
