//! # flatkv
//!
//! A minimal single-process key-value store with:
//! - Line-oriented text protocol over stdin/stdout
//! - One flat insertion-ordered in-memory table
//! - Restricted wildcard key listing (`*`, `pre*`, `*sub*`)
//! - Flat-file persistence with counter-driven auto-save
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     stdin / stdout                           │
//! │                   (one line per query)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Dispatcher                              │
//! │           (parse → execute → reply → tick)                   │
//! └─────────┬────────────────┬────────────────┬─────────────────┘
//!           │                │                │
//!           ▼                ▼                ▼
//!    ┌─────────────┐  ┌─────────────┐  ┌─────────────┐
//!    │   Pattern   │  │    Table    │  │  DataFile   │
//!    │   (KEYS)    │  │  (ordered)  │  │ (load/save) │
//!    └─────────────┘  └─────────────┘  └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod pattern;
pub mod table;
pub mod storage;
pub mod protocol;
pub mod dispatch;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FlatKvError, Result};
pub use config::Config;
pub use dispatch::Dispatcher;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of flatkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
