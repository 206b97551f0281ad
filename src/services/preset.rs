//! Preset selection happens before the wheel engine sees any items.
//!
//! A preset decides where the items come from (the resolver or a fixed
//! wheel) and how the spin is started. The engine never knows which preset
//! produced its input.

use crate::domain::models::{ItemEntry, ResolvedItem, SpinSettings, TrapOutcome, TrapSettings};
use crate::services::resolver::{resolve, validate_resolved, ResolveError};
use crate::services::wheel::FULL_TURN;
use rand::Rng;

/// Session flag recording whether the trap has fired for the current
/// configuration. Created fresh per configuration and cleared by
/// `SpinController::reconfigure`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrapState {
    fired: bool,
}

impl TrapState {
    pub fn fired(&self) -> bool {
        self.fired
    }

    pub fn fire(&mut self) {
        self.fired = true;
    }

    pub fn reset(&mut self) {
        self.fired = false;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrapPreset {
    pub items: Vec<ResolvedItem>,
    pub escape_item: String,
    pub redirect_url: String,
    pub speed: f64,
}

impl TrapPreset {
    pub fn from_settings(settings: &TrapSettings) -> Self {
        Self {
            items: settings.items.clone(),
            escape_item: settings.escape_item.clone(),
            redirect_url: settings.redirect_url.clone(),
            speed: settings.speed,
        }
    }

    pub fn outcome(&self, winner: &str) -> TrapOutcome {
        if winner == self.escape_item {
            TrapOutcome::Released
        } else {
            TrapOutcome::Redirected {
                url: self.redirect_url.clone(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WheelPreset {
    Standard,
    Trap(TrapPreset),
}

impl WheelPreset {
    pub fn name(&self) -> &'static str {
        match self {
            WheelPreset::Standard => "standard",
            WheelPreset::Trap(_) => "trap",
        }
    }

    /// Trap wheels start on their own; standard wheels wait for the user.
    pub fn auto_start(&self) -> bool {
        matches!(self, WheelPreset::Trap(_))
    }

    pub fn items(&self, entries: &[ItemEntry]) -> Result<Vec<ResolvedItem>, ResolveError> {
        match self {
            WheelPreset::Standard => resolve(entries),
            WheelPreset::Trap(trap) => {
                validate_resolved(&trap.items)?;
                Ok(trap.items.clone())
            }
        }
    }

    /// Initial speed in degrees per tick.
    pub fn initial_speed<R: Rng>(&self, rng: &mut R, spin: &SpinSettings) -> f64 {
        match self {
            WheelPreset::Standard if spin.speed_min < spin.speed_max => {
                rng.gen_range(spin.speed_min..spin.speed_max)
            }
            WheelPreset::Standard => spin.speed_min,
            WheelPreset::Trap(trap) => trap.speed,
        }
    }

    /// Rotation the wheel is turned to before it starts moving. Both presets
    /// draw it uniformly from `[0, 360)`.
    pub fn initial_angle<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(0.0..FULL_TURN)
    }

    pub fn outcome(&self, winner: &str) -> Option<TrapOutcome> {
        match self {
            WheelPreset::Standard => None,
            WheelPreset::Trap(trap) => Some(trap.outcome(winner)),
        }
    }
}

/// Picks the preset for a configuration and updates the trap flag to match.
///
/// The keyword is matched as a plain substring of each raw name, blank rows
/// included.
pub fn select_preset(
    entries: &[ItemEntry],
    trap: &TrapSettings,
    state: &mut TrapState,
) -> WheelPreset {
    let hit = trap.enabled
        && !trap.keyword.is_empty()
        && entries.iter().any(|e| e.name.contains(&trap.keyword));
    if hit {
        state.fire();
        tracing::info!(keyword = %trap.keyword, "trap preset selected");
        WheelPreset::Trap(TrapPreset::from_settings(trap))
    } else {
        state.reset();
        WheelPreset::Standard
    }
}
