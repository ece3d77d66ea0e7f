//! Switch table model and population
//!
//! The table shows one distribution row (tier-1 pair) followed by one
//! access row per tier-2 switch. Rows are rendered from the configured
//! templates; when the `switch_state` snapshot has no `switches` object
//! the whole table is replaced by a placeholder message.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use netscope_core::prelude::*;
use netscope_core::{find_t1_switches, find_t2_switches, interpolate, StateStore};

/// Placeholder shown when the switch_state snapshot has no switches.
pub const NO_SWITCHES_MSG: &str = "No switches to be found!";

/// Row templates for the two switch tiers.
///
/// The distribution template may reference `${switch_left}` and
/// `${switch_right}`; the access template `${switch_name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowTemplates {
    pub distribution: String,
    pub access: String,
}

impl Default for RowTemplates {
    fn default() -> Self {
        Self {
            distribution: "dist   | ${switch_left} | ${switch_right}".to_string(),
            access: "access | ${switch_name}".to_string(),
        }
    }
}

/// The switch table: an ordered list of rendered rows, or a placeholder
/// message that replaces all rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchTable {
    rows: Vec<String>,
    placeholder: Option<String>,
}

impl SwitchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all rows and any placeholder.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.placeholder = None;
    }

    /// Append one rendered row.
    pub fn push_row(&mut self, row: String) {
        self.rows.push(row);
    }

    /// Replace the table's entire content with a message.
    pub fn set_placeholder(&mut self, message: impl Into<String>) {
        self.rows.clear();
        self.placeholder = Some(message.into());
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }
}

/// Append the distribution row for the tier-1 pair.
///
/// Exactly one row per call. Only two tier-1 names are ever shown; a
/// missing side renders as `undefined` through the template.
pub fn render_t1_switches(
    table: &mut SwitchTable,
    templates: &RowTemplates,
    switch_left: Option<&str>,
    switch_right: Option<&str>,
) {
    let mut values = HashMap::new();
    if let Some(left) = switch_left {
        values.insert("switch_left", left);
    }
    if let Some(right) = switch_right {
        values.insert("switch_right", right);
    }
    table.push_row(interpolate(&templates.distribution, &values));
}

/// Append one access row for a tier-2 switch.
pub fn render_t2_switch(table: &mut SwitchTable, templates: &RowTemplates, switch_name: &str) {
    let values = HashMap::from([("switch_name", switch_name)]);
    table.push_row(interpolate(&templates.access, &values));
}

/// Rebuild the switch table from the current `switch_state` snapshot.
///
/// One distribution row from the first two tier-1 names (sorted), then one
/// access row per tier-2 name in sorted order. Tier-1 names beyond the
/// first two are ignored.
pub fn populate_table(store: &StateStore, table: &mut SwitchTable, templates: &RowTemplates) {
    let Some(switch_names) = store.switch_names() else {
        info!("No switches in switch_state snapshot");
        table.set_placeholder(NO_SWITCHES_MSG);
        return;
    };
    table.clear();

    let t1_switches = find_t1_switches(&switch_names);
    debug!("t1_switches: {t1_switches:?}");
    render_t1_switches(
        table,
        templates,
        t1_switches.first().map(String::as_str),
        t1_switches.get(1).map(String::as_str),
    );

    let t2_switches = find_t2_switches(&switch_names);
    debug!("t2_switches: {t2_switches:?}");
    for switch_name in &t2_switches {
        render_t2_switch(table, templates, switch_name);
    }
}
