//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `inspect.rs` — resolve/layout/winner/presets/check.
//! - `spin.rs` — the frame loop behind `spin`.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate wheel logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod inspect;
pub mod spin;

pub use inspect::handle_inspect_commands;
pub use spin::handle_spin;

use crate::cli::ItemArgs;
use crate::domain::models::{ItemEntry, ResolvedItem, WheelConfig};
use crate::services::entries::collect_entries;
use crate::services::preset::{select_preset, TrapState, WheelPreset};

/// Everything a command needs after input has been collected and validated.
pub struct PreparedWheel {
    pub entries: Vec<ItemEntry>,
    pub preset: WheelPreset,
    pub trap: TrapState,
    pub items: Vec<ResolvedItem>,
}

pub fn prepare_wheel(args: &ItemArgs, config: &WheelConfig) -> anyhow::Result<PreparedWheel> {
    let entries = collect_entries(&args.items, args.file.as_deref(), config.input.max_items)?;
    let mut trap = TrapState::default();
    let preset = select_preset(&entries, &config.trap, &mut trap);
    let items = preset.items(&entries)?;
    Ok(PreparedWheel {
        entries,
        preset,
        trap,
        items,
    })
}
