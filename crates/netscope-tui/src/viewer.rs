//! Snapshot tree viewer
//!
//! Flattens the whole snapshot store into indented text lines, one per
//! JSON node. Rebuilt on every store refresh; scrolling over the flat
//! line list is handled at render time.

use serde_json::Value;

use netscope_core::{StateStore, TreeViewer};

const INDENT: &str = "  ";

/// [`TreeViewer`] implementation holding the flattened tree lines.
#[derive(Debug, Default)]
pub struct JsonTreeViewer {
    lines: Vec<String>,
}

impl JsonTreeViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl TreeViewer for JsonTreeViewer {
    fn refresh(&mut self, store: &StateStore) {
        self.lines.clear();
        for (category, value) in store.iter() {
            flatten_into(&mut self.lines, category, value, 0);
        }
    }
}

/// Append `key: value` lines for one JSON node and its children.
fn flatten_into(lines: &mut Vec<String>, key: &str, value: &Value, depth: usize) {
    let pad = INDENT.repeat(depth);
    match value {
        Value::Object(map) if map.is_empty() => lines.push(format!("{pad}{key}: {{}}")),
        Value::Object(map) => {
            lines.push(format!("{pad}{key}"));
            for (child_key, child) in map {
                flatten_into(lines, child_key, child, depth + 1);
            }
        }
        Value::Array(items) if items.is_empty() => lines.push(format!("{pad}{key}: []")),
        Value::Array(items) => {
            lines.push(format!("{pad}{key}"));
            for (index, child) in items.iter().enumerate() {
                flatten_into(lines, &format!("[{index}]"), child, depth + 1);
            }
        }
        Value::String(s) => lines.push(format!("{pad}{key}: {s}")),
        leaf => lines.push(format!("{pad}{key}: {leaf}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refresh_flattens_store() {
        let mut store = StateStore::new();
        store.insert(
            "switch_state",
            json!({"switches": {"t1-a": {"up": true}, "t2-x": {"up": false}}}),
        );
        let mut viewer = JsonTreeViewer::new();
        viewer.refresh(&store);

        assert_eq!(
            viewer.lines(),
            [
                "switch_state",
                "  switches",
                "    t1-a",
                "      up: true",
                "    t2-x",
                "      up: false",
            ]
        );
    }

    #[test]
    fn test_arrays_and_leaves() {
        let mut store = StateStore::new();
        store.insert("host_path", json!({"path": [{"switch": "t2-a"}, "end"], "hops": 2}));
        let mut viewer = JsonTreeViewer::new();
        viewer.refresh(&store);

        assert_eq!(
            viewer.lines(),
            [
                "host_path",
                "  hops: 2",
                "  path",
                "    [0]",
                "      switch: t2-a",
                "    [1]: end",
            ]
        );
    }

    #[test]
    fn test_empty_containers_inline() {
        let mut store = StateStore::new();
        store.insert("cpn_state", json!({"nodes": {}, "alerts": []}));
        let mut viewer = JsonTreeViewer::new();
        viewer.refresh(&store);

        assert_eq!(
            viewer.lines(),
            ["cpn_state", "  alerts: []", "  nodes: {}"]
        );
    }

    #[test]
    fn test_refresh_replaces_previous_lines() {
        let mut store = StateStore::new();
        store.insert("system_state", json!(1));
        let mut viewer = JsonTreeViewer::new();
        viewer.refresh(&store);
        viewer.refresh(&store);
        assert_eq!(viewer.lines(), ["system_state: 1"]);
    }
}
