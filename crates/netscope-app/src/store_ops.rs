//! Store update pipeline
//!
//! `fetch_data` is the single completion path for a category fetch: parse
//! succeeded → store write, viewer refresh, then the caller's completion.
//! On failure nothing below the fetch runs, so a category that never
//! fetches successfully simply stays absent from the store.

use serde_json::Value;

use netscope_client::{fetch_snapshot, SnapshotSource};
use netscope_core::prelude::*;
use netscope_core::{StateStore, TreeViewer};

/// Store `value` under `category` and refresh the viewer with the whole
/// store.
pub fn data_update<V: TreeViewer>(
    store: &mut StateStore,
    viewer: &mut V,
    category: &str,
    value: Value,
) {
    info!("Updating {category}");
    trace!("{category} snapshot: {value}");
    store.insert(category, value);
    viewer.refresh(store);
}

/// Fetch one category and, on success, run the update pipeline followed by
/// `on_complete`. A failed fetch leaves the store untouched and never
/// invokes the completion.
pub async fn fetch_data<S, V, F>(
    source: &S,
    store: &mut StateStore,
    viewer: &mut V,
    category: &str,
    url: &str,
    on_complete: Option<F>,
) where
    S: SnapshotSource,
    V: TreeViewer,
    F: FnOnce(&StateStore),
{
    let Some(value) = fetch_snapshot(source, category, url).await else {
        return;
    };
    data_update(store, viewer, category, value);
    if let Some(complete) = on_complete {
        complete(store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netscope_client::FakeSource;
    use netscope_core::NullViewer;
    use serde_json::json;
    use std::cell::Cell;

    /// Viewer that counts refreshes and remembers the last store size.
    #[derive(Default)]
    struct RecordingViewer {
        refreshes: usize,
        last_len: usize,
    }

    impl TreeViewer for RecordingViewer {
        fn refresh(&mut self, store: &StateStore) {
            self.refreshes += 1;
            self.last_len = store.len();
        }
    }

    #[tokio::test]
    async fn test_fetch_data_updates_store_and_viewer() {
        let source = FakeSource::new().respond("http://x/system_state", json!({"ok": true}));
        let mut store = StateStore::new();
        let mut viewer = RecordingViewer::default();
        let completed = Cell::new(false);

        fetch_data(
            &source,
            &mut store,
            &mut viewer,
            "system_state",
            "http://x/system_state",
            Some(|_: &StateStore| completed.set(true)),
        )
        .await;

        assert_eq!(store.get("system_state"), Some(&json!({"ok": true})));
        assert_eq!(viewer.refreshes, 1);
        assert_eq!(viewer.last_len, 1);
        assert!(completed.get());
    }

    #[tokio::test]
    async fn test_failed_fetch_is_silent() {
        let source = FakeSource::new();
        let mut store = StateStore::new();
        let mut viewer = RecordingViewer::default();
        let completed = Cell::new(false);

        fetch_data(
            &source,
            &mut store,
            &mut viewer,
            "system_state",
            "http://x/system_state",
            Some(|_: &StateStore| completed.set(true)),
        )
        .await;

        assert!(store.is_empty());
        assert_eq!(viewer.refreshes, 0);
        assert!(!completed.get());
    }

    #[tokio::test]
    async fn test_fetch_data_without_completion() {
        let source = FakeSource::new().respond("http://x/cpn_state", json!([1, 2]));
        let mut store = StateStore::new();
        let mut viewer = NullViewer;

        fetch_data(
            &source,
            &mut store,
            &mut viewer,
            "cpn_state",
            "http://x/cpn_state",
            None::<fn(&StateStore)>,
        )
        .await;

        assert_eq!(store.get("cpn_state"), Some(&json!([1, 2])));
    }
}
