//! netscope-tui - Terminal UI for netscope
//!
//! The ratatui-based dashboard: terminal setup, event polling, layout,
//! the snapshot tree viewer, and the event loop driving `netscope-app`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod viewer;

// Re-export main entry points
pub use runner::run;
pub use viewer::JsonTreeViewer;
