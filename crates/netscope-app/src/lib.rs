//! # netscope-app - Application State and Orchestration
//!
//! The dashboard's model layer: settings, the TEA-style [`Message`] enum
//! and [`AppState`], the switch table ([`table`]), the store update
//! pipeline ([`store_ops`]), and refresh orchestration ([`refresh`]).
//!
//! The TUI crate drives this layer through [`AppState::update`]; headless
//! mode uses [`refresh::run_headless`] directly.

pub mod message;
pub mod refresh;
pub mod settings;
pub mod state;
pub mod store_ops;
pub mod table;

pub use message::Message;
pub use refresh::{fetch_path, refresh_targets, run_headless, spawn_refresh};
pub use settings::{init_config_dir, load_settings, load_settings_from, Probe, Settings};
pub use state::AppState;
pub use store_ops::{data_update, fetch_data};
pub use table::{
    populate_table, render_t1_switches, render_t2_switch, RowTemplates, SwitchTable,
    NO_SWITCHES_MSG,
};
