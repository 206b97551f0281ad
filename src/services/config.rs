use crate::domain::models::WheelConfig;
use std::path::{Path, PathBuf};

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/wheelspin/config.toml"))
}

/// Loads the config file. An explicit path must exist; the default path may
/// be missing, in which case built-in defaults apply.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<WheelConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Ok(p) if p.exists() => p,
            _ => return Ok(WheelConfig::default()),
        },
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", path.display(), e))?;
    let cfg: WheelConfig = toml::from_str(&raw)?;
    validate_config(&cfg)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

fn validate_config(cfg: &WheelConfig) -> anyhow::Result<()> {
    let s = &cfg.spin;
    if !(s.decay_factor > 0.0 && s.decay_factor < 1.0) {
        anyhow::bail!("spin.decay_factor must be in (0, 1)");
    }
    if !(s.brake_factor > 0.0 && s.brake_factor < 1.0) {
        anyhow::bail!("spin.brake_factor must be in (0, 1)");
    }
    if s.min_speed <= 0.0 {
        anyhow::bail!("spin.min_speed must be positive");
    }
    if !(s.speed_min > 0.0 && s.speed_min <= s.speed_max) {
        anyhow::bail!("spin.speed_min must be positive and not above spin.speed_max");
    }
    if cfg.input.max_items == 0 {
        anyhow::bail!("input.max_items must be at least 1");
    }
    if cfg.trap.enabled && cfg.trap.keyword.is_empty() {
        anyhow::bail!("trap.keyword must not be empty when the trap is enabled");
    }
    Ok(())
}
