//! Message types for the application (TEA pattern)

use serde_json::Value;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// A snapshot fetch completed for one category
    Snapshot { category: String, value: Value },

    /// Re-fetch every category (user request or poll interval elapsed)
    Refresh,

    /// Scroll the snapshot tree up one line
    ScrollUp,
    /// Scroll the snapshot tree down one line
    ScrollDown,

    /// Tick event for periodic updates
    Tick,

    /// Quit the dashboard
    Quit,
}
