use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One raw row of user input. The name may be blank and the weight unset.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItemEntry {
    pub name: String,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl ItemEntry {
    pub fn new(name: impl Into<String>, weight: Option<f64>) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A normalized item. Within one resolved set the shares sum to 100, even
/// when only explicit weights below 100 were given (they get rescaled).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolvedItem {
    pub name: String,
    pub share: f64,
}

impl ResolvedItem {
    pub fn new(name: impl Into<String>, share: f64) -> Self {
        Self {
            name: name.into(),
            share,
        }
    }

    /// Angular size of this item's wedge in degrees.
    pub fn extent_deg(&self) -> f64 {
        self.share / 100.0 * 360.0
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub name: String,
    pub share: f64,
    pub start_deg: f64,
    pub end_deg: f64,
    pub extent_deg: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrapOutcome {
    Released,
    Redirected { url: String },
}

#[derive(Serialize)]
pub struct LayoutReport {
    pub angle: f64,
    pub wedges: Vec<Wedge>,
}

#[derive(Serialize)]
pub struct WinnerReport {
    pub angle: f64,
    pub target_angle: f64,
    pub index: usize,
    pub name: String,
}

#[derive(Serialize)]
pub struct SpinReport {
    pub preset: String,
    pub wheel_id: String,
    pub policy: String,
    pub seed: Option<u64>,
    pub start_angle: f64,
    pub initial_speed: f64,
    pub final_angle: f64,
    pub ticks: u64,
    pub winner_index: usize,
    pub winner: String,
    pub trap_outcome: Option<TrapOutcome>,
}

#[derive(Serialize)]
pub struct PresetReport {
    pub name: String,
    pub auto_start: bool,
    pub items: Option<Vec<ResolvedItem>>,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub status: String,
    pub preset: String,
    pub entry_count: usize,
    pub item_count: usize,
    pub wheel_id: String,
}

fn default_decay_factor() -> f64 {
    0.985
}

fn default_min_speed() -> f64 {
    0.1
}

fn default_brake_factor() -> f64 {
    0.95
}

fn default_speed_min() -> f64 {
    25.0
}

fn default_speed_max() -> f64 {
    50.0
}

fn default_frame_ms() -> u64 {
    16
}

fn default_max_ticks() -> u64 {
    100_000
}

fn default_max_items() -> usize {
    20
}

fn default_true() -> bool {
    true
}

fn default_trap_keyword() -> String {
    "こはく".to_string()
}

fn default_redirect_url() -> String {
    "https://youtu.be/cM7uKegVG-E".to_string()
}

fn default_trap_speed() -> f64 {
    50.0
}

fn default_escape_item() -> String {
    "Escape".to_string()
}

fn default_trap_items() -> Vec<ResolvedItem> {
    vec![ResolvedItem::new("Doom", 80.0), ResolvedItem::new("Escape", 20.0)]
}

/// Contents of `config.toml`. Every field is optional in the file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct WheelConfig {
    #[serde(default)]
    pub spin: SpinSettings,
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub trap: TrapSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SpinSettings {
    #[serde(default = "default_decay_factor")]
    pub decay_factor: f64,
    #[serde(default = "default_min_speed")]
    pub min_speed: f64,
    #[serde(default = "default_brake_factor")]
    pub brake_factor: f64,
    #[serde(default = "default_speed_min")]
    pub speed_min: f64,
    #[serde(default = "default_speed_max")]
    pub speed_max: f64,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            decay_factor: default_decay_factor(),
            min_speed: default_min_speed(),
            brake_factor: default_brake_factor(),
            speed_min: default_speed_min(),
            speed_max: default_speed_max(),
            frame_ms: default_frame_ms(),
            max_ticks: default_max_ticks(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputSettings {
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrapSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_trap_keyword")]
    pub keyword: String,
    #[serde(default = "default_redirect_url")]
    pub redirect_url: String,
    #[serde(default = "default_trap_speed")]
    pub speed: f64,
    #[serde(default = "default_escape_item")]
    pub escape_item: String,
    #[serde(default = "default_trap_items")]
    pub items: Vec<ResolvedItem>,
}

impl Default for TrapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            keyword: default_trap_keyword(),
            redirect_url: default_redirect_url(),
            speed: default_trap_speed(),
            escape_item: default_escape_item(),
            items: default_trap_items(),
        }
    }
}
