//! Dashboard event loop
//!
//! Fetch tasks deliver snapshots over a channel; this loop is the only
//! place that touches `AppState`, so each completion handler runs to
//! completion before the next one starts.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use netscope_app::{spawn_refresh, AppState, Message, Settings};
use netscope_client::SnapshotSource;
use netscope_core::prelude::*;

use crate::event;
use crate::render;
use crate::terminal;
use crate::viewer::JsonTreeViewer;

/// Run the dashboard until the user quits.
pub async fn run<S>(source: S, settings: Settings) -> Result<()>
where
    S: SnapshotSource + Clone + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut state = AppState::new(settings);
    let mut viewer = JsonTreeViewer::new();

    let poll_interval = Duration::from_secs(state.settings.poll_interval_secs);
    let mut last_refresh_issued = Instant::now();
    spawn_refresh(&source, &state.settings, &tx);

    while !state.should_quit {
        // Drain completed fetches before drawing.
        while let Ok(message) = rx.try_recv() {
            state.update(&mut viewer, message);
        }

        term.draw(|frame| render::view(frame, &mut state, &viewer))
            .map_err(|e| Error::terminal(e.to_string()))?;

        match event::poll()? {
            Some(Message::Refresh) => {
                debug!("Manual refresh requested");
                last_refresh_issued = Instant::now();
                spawn_refresh(&source, &state.settings, &tx);
            }
            Some(Message::Tick) => {
                if !poll_interval.is_zero() && last_refresh_issued.elapsed() >= poll_interval {
                    last_refresh_issued = Instant::now();
                    spawn_refresh(&source, &state.settings, &tx);
                }
            }
            Some(message) => state.update(&mut viewer, message),
            None => {}
        }
    }

    terminal::restore();
    Ok(())
}
