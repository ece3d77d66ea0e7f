//! Application state (Model in TEA pattern)
//!
//! One `AppState` object owns everything the dashboard knows; it is passed
//! by reference into handlers. No globals, no statics.

use chrono::{DateTime, Local};
use serde_json::Value;

use netscope_core::{StateStore, TreeViewer, SWITCH_STATE};

use crate::message::Message;
use crate::settings::Settings;
use crate::store_ops::data_update;
use crate::table::{populate_table, SwitchTable};

/// Runtime state for the dashboard.
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Last-fetched snapshot per category.
    pub store: StateStore,

    /// Rendered switch table.
    pub table: SwitchTable,

    /// Wall-clock time of the last applied snapshot.
    pub last_refresh: Option<DateTime<Local>>,

    /// Scroll offset into the snapshot tree (top visible line).
    pub tree_scroll: usize,

    /// Set when the user asks to exit.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            store: StateStore::new(),
            table: SwitchTable::new(),
            last_refresh: None,
            tree_scroll: 0,
            should_quit: false,
        }
    }

    /// Apply one fetched snapshot: store write, viewer refresh, and for
    /// `switch_state`, table repopulation. Runs to completion before the
    /// next message is handled, so a category's update is atomic.
    pub fn apply_snapshot<V: TreeViewer>(&mut self, viewer: &mut V, category: &str, value: Value) {
        let repopulate = category == SWITCH_STATE;
        data_update(&mut self.store, viewer, category, value);
        if repopulate {
            populate_table(&self.store, &mut self.table, &self.settings.templates);
        }
        self.last_refresh = Some(Local::now());
    }

    /// Handle a state-mutating message. `Refresh` is a no-op here: issuing
    /// fetches needs the transport and is the event loop's job.
    pub fn update<V: TreeViewer>(&mut self, viewer: &mut V, message: Message) {
        match message {
            Message::Snapshot { category, value } => {
                self.apply_snapshot(viewer, &category, value)
            }
            Message::ScrollUp => self.tree_scroll = self.tree_scroll.saturating_sub(1),
            Message::ScrollDown => self.tree_scroll = self.tree_scroll.saturating_add(1),
            Message::Quit => self.should_quit = true,
            Message::Refresh | Message::Tick => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::NO_SWITCHES_MSG;
    use netscope_core::NullViewer;
    use serde_json::json;

    #[test]
    fn test_switch_state_snapshot_populates_table() {
        let mut state = AppState::new(Settings::default());
        let mut viewer = NullViewer;
        state.apply_snapshot(
            &mut viewer,
            SWITCH_STATE,
            json!({"switches": {"t1-a": 1, "t1-b": 2, "t2-x": 3}}),
        );

        assert_eq!(state.table.rows().len(), 2);
        assert!(state.last_refresh.is_some());
    }

    #[test]
    fn test_other_snapshot_leaves_table_alone() {
        let mut state = AppState::new(Settings::default());
        let mut viewer = NullViewer;
        state.apply_snapshot(&mut viewer, "cpn_state", json!({"up": 1}));

        assert!(state.table.rows().is_empty());
        assert!(state.table.placeholder().is_none());
        assert_eq!(state.store.get("cpn_state"), Some(&json!({"up": 1})));
    }

    #[test]
    fn test_switch_state_without_switches_shows_placeholder() {
        let mut state = AppState::new(Settings::default());
        let mut viewer = NullViewer;
        state.update(
            &mut viewer,
            Message::Snapshot {
                category: SWITCH_STATE.to_string(),
                value: json!({}),
            },
        );
        assert_eq!(state.table.placeholder(), Some(NO_SWITCHES_MSG));
    }

    #[test]
    fn test_quit_and_scroll_messages() {
        let mut state = AppState::new(Settings::default());
        let mut viewer = NullViewer;

        state.update(&mut viewer, Message::ScrollUp);
        assert_eq!(state.tree_scroll, 0); // saturates at top

        state.update(&mut viewer, Message::ScrollDown);
        assert_eq!(state.tree_scroll, 1);

        state.update(&mut viewer, Message::Quit);
        assert!(state.should_quit);
    }
}
