//! # netscope-core - Core Domain Types
//!
//! Foundation crate for netscope. Provides the snapshot store, switch
//! classification, row-template interpolation, error handling, and logging
//! setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Snapshot Store (`store`)
//! - [`StateStore`] - Category → last-fetched JSON snapshot
//! - [`TreeViewer`] - Display seam for the JSON tree widget
//! - [`CATEGORIES`], [`SWITCH_STATE`] - Well-known category names
//!
//! ### Classification (`classify`)
//! - [`find_t1_switches()`] / [`find_t2_switches()`] - Tier grouping by
//!   name marker, sorted ascending
//!
//! ### Templates (`template`)
//! - [`interpolate()`] - `${name}` substitution from an explicit value map
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod classify;
pub mod error;
pub mod logging;
pub mod store;
pub mod template;

/// Prelude for common imports used throughout all netscope crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use classify::{find_t1_switches, find_t2_switches};
pub use error::{Error, Result};
pub use store::{NullViewer, StateStore, TreeViewer, CATEGORIES, SWITCH_STATE};
pub use template::{interpolate, UNDEFINED};
