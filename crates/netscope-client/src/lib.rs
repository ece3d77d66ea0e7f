//! # netscope-client - Snapshot Fetching
//!
//! HTTP transport for the dashboard: the [`SnapshotSource`] seam, its
//! [`HttpSource`] implementation, and the per-category fetch helpers.
//!
//! Enable the `test-helpers` feature to get [`FakeSource`], an in-memory
//! source for integration tests.

pub mod fetch;
pub mod source;

pub use fetch::{endpoint_url, fetch_snapshot, host_path_category, host_path_url};
#[cfg(any(test, feature = "test-helpers"))]
pub use source::FakeSource;
pub use source::{HttpSource, SnapshotSource};
