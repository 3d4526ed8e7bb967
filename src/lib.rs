//! Pixel Garden: a pastel finance ledger that pays for a tiny pixel garden.
//!
//! The terminal front end lives in [`app`]; the browser build exposes
//! [`GardenSim`] through wasm-bindgen instead.

#[cfg(not(target_arch = "wasm32"))]
pub mod app;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::GardenSim;
