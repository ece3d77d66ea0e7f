//! In-memory snapshot store
//!
//! The dashboard keeps the last-fetched JSON snapshot per category. A
//! category is a plain string key ("system_state", "switch_state",
//! "host_path_01_02", ...). Categories are created on first insert and
//! never removed; a later insert for the same category replaces the
//! previous snapshot wholesale.

use serde_json::Value;
use std::collections::BTreeMap;

/// Well-known snapshot categories served by the orchestrator.
///
/// `SWITCH_STATE` is special: its completion triggers switch-table
/// population. Everything else is display-only via the tree viewer.
pub const CATEGORIES: &[&str] = &[
    "system_state",
    "dataplane_state",
    "switch_state",
    "cpn_state",
    "process_state",
    "host_path",
    "list_hosts",
    "sys_config",
];

/// The category whose snapshot drives the switch table.
pub const SWITCH_STATE: &str = "switch_state";

/// Mapping from category to last-fetched JSON value.
///
/// Last write wins; no history. Keys iterate in sorted order, which keeps
/// the tree viewer stable across refreshes.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    entries: BTreeMap<String, Value>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot stored under `category`.
    pub fn insert(&mut self, category: impl Into<String>, value: Value) {
        self.entries.insert(category.into(), value);
    }

    pub fn get(&self, category: &str) -> Option<&Value> {
        self.entries.get(category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (category, snapshot) pairs in sorted category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The whole store as one JSON object, for the tree viewer and for
    /// headless output.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Switch names from the `switch_state` snapshot, if present.
    ///
    /// Returns `None` when the snapshot is missing, or when it has no
    /// `switches` object; the caller surfaces a placeholder in that case.
    pub fn switch_names(&self) -> Option<Vec<String>> {
        let switches = self.get(SWITCH_STATE)?.get("switches")?.as_object()?;
        Some(switches.keys().cloned().collect())
    }
}

/// A widget that displays the whole snapshot store as a JSON tree.
///
/// The dashboard refreshes the viewer after every successful fetch, handing
/// it the entire store. Implementations only display; they never mutate.
pub trait TreeViewer {
    fn refresh(&mut self, store: &StateStore);
}

/// Viewer that ignores refreshes (headless mode).
#[derive(Debug, Default)]
pub struct NullViewer;

impl TreeViewer for NullViewer {
    fn refresh(&mut self, _store: &StateStore) {}
}
