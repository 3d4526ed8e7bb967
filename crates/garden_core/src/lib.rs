//! # Garden Core
//!
//! The deterministic engine behind Pixel Garden: a tiny virtual garden
//! paid for with coins earned from keeping a personal finance ledger.
//!
//! This crate contains:
//! - A cross-platform deterministic pixel sprite generator (Mulberry32)
//! - The garden slot state machine (purchase, water, feed, harvest, tick)
//! - The shared coin ledger and the finance book
//! - A session controller that persists after every change
//! - Configuration, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use garden_core::{AppConfig, MemoryStore, OrganismCatalog, Session};
//!
//! let mut session = Session::open(
//!     &AppConfig::default(),
//!     OrganismCatalog::builtin(),
//!     MemoryStore::default(),
//! );
//! let slot = session.purchase("sprout").unwrap();
//! session.water(slot).unwrap();
//! let sprite = session.render(slot).unwrap();
//! assert_eq!(sprite.width(), 8);
//! ```

/// Organism catalog with fallback lookup
pub mod catalog;
/// Configuration management for garden parameters
pub mod config;
/// Recoverable operation errors
pub mod error;
/// Earnings/expenses ledger and summaries
pub mod finance;
/// Garden slot state machine
pub mod garden;
/// Shared coin balance
pub mod ledger;
/// Gameplay counters and logging setup
pub mod metrics;
/// Mulberry32 PRNG
pub mod rng;
/// State owner and persistence seam
pub mod session;
/// Procedural pixel sprites
pub mod sprite;

pub use catalog::OrganismCatalog;
pub use config::AppConfig;
pub use error::GardenError;
pub use finance::{FinanceBook, Summary};
pub use garden::{Garden, GardenState, HarvestOutcome, TickReport};
pub use ledger::CoinLedger;
pub use metrics::{init_logging, GardenMetrics};
pub use session::{ImportMode, MemoryStore, Session, StateStore};
pub use sprite::{generate_sprite, Sprite};
