//! Dashboard refresh orchestration
//!
//! A refresh issues one GET per category plus one per configured host-path
//! probe. In the TUI the fetches run as concurrent tasks delivering
//! [`Message::Snapshot`]s to the update loop; completion order is
//! unconstrained. Headless mode runs the same set sequentially and returns
//! the populated state.

use tokio::sync::mpsc::UnboundedSender;
use url::Url;

use netscope_client::{
    endpoint_url, fetch_snapshot, host_path_category, host_path_url, SnapshotSource,
};
use netscope_core::prelude::*;
use netscope_core::{NullViewer, StateStore, TreeViewer, CATEGORIES, SWITCH_STATE};

use crate::message::Message;
use crate::settings::Settings;
use crate::state::AppState;
use crate::store_ops::fetch_data;
use crate::table::populate_table;

/// The (category, URL) pairs one refresh fetches: every well-known
/// category endpoint, then one host-path query per configured probe.
pub fn refresh_targets(settings: &Settings) -> Result<Vec<(String, Url)>> {
    let base = Url::parse(&settings.base_url).map_err(|e| Error::Url(e.to_string()))?;

    let mut targets = Vec::with_capacity(CATEGORIES.len() + settings.probes.len());
    for category in CATEGORIES {
        targets.push((category.to_string(), endpoint_url(&base, category)?));
    }
    for probe in &settings.probes {
        targets.push((
            host_path_category(&probe.eth_src, &probe.eth_dst),
            host_path_url(&base, &probe.eth_src, &probe.eth_dst)?,
        ));
    }
    Ok(targets)
}

/// Spawn one fetch task per refresh target. Each successful fetch sends a
/// [`Message::Snapshot`]; failures are logged inside the task and produce
/// no message at all.
pub fn spawn_refresh<S>(source: &S, settings: &Settings, tx: &UnboundedSender<Message>)
where
    S: SnapshotSource + Clone + Send + Sync + 'static,
{
    let targets = match refresh_targets(settings) {
        Ok(targets) => targets,
        Err(e) => {
            warn!("Refresh skipped: {e}");
            return;
        }
    };

    for (category, url) in targets {
        let source = source.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(value) = fetch_snapshot(&source, &category, url.as_str()).await {
                // The update loop may already be gone during shutdown.
                let _ = tx.send(Message::Snapshot { category, value });
            }
        });
    }
}

/// Fetch the dataplane path between two hosts.
///
/// The snapshot lands under a category derived from the last two
/// characters of each address (`host_path_01_02` for `...:01` → `...:02`),
/// so repeated probes for the same pair overwrite each other while
/// distinct pairs accumulate.
pub async fn fetch_path<S, V>(
    source: &S,
    store: &mut StateStore,
    viewer: &mut V,
    base: &Url,
    eth_src: &str,
    eth_dst: &str,
) -> Result<()>
where
    S: SnapshotSource,
    V: TreeViewer,
{
    let category = host_path_category(eth_src, eth_dst);
    let url = host_path_url(base, eth_src, eth_dst)?;
    fetch_data(
        source,
        store,
        viewer,
        &category,
        url.as_str(),
        None::<fn(&StateStore)>,
    )
    .await;
    Ok(())
}

/// Fetch every refresh target sequentially and return the resulting state.
///
/// Used by `--headless` mode: no viewer, no event loop, one pass.
pub async fn run_headless<S: SnapshotSource>(source: &S, settings: &Settings) -> Result<AppState> {
    let targets = refresh_targets(settings)?;
    let mut state = AppState::new(settings.clone());
    let mut viewer = NullViewer;

    for (category, url) in targets {
        if category == SWITCH_STATE {
            let table = &mut state.table;
            let templates = &state.settings.templates;
            fetch_data(
                source,
                &mut state.store,
                &mut viewer,
                &category,
                url.as_str(),
                Some(|store: &StateStore| populate_table(store, table, templates)),
            )
            .await;
        } else {
            fetch_data(
                source,
                &mut state.store,
                &mut viewer,
                &category,
                url.as_str(),
                None::<fn(&StateStore)>,
            )
            .await;
        }
    }

    state.last_refresh = Some(chrono::Local::now());
    Ok(state)
}
