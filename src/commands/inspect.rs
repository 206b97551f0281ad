use crate::cli::{Cli, Commands};
use crate::commands::prepare_wheel;
use crate::domain::models::{CheckReport, LayoutReport, PresetReport, WheelConfig, WinnerReport};
use crate::services::entries::collect_entries;
use crate::services::fingerprint::wheel_id;
use crate::services::output::{print_report, print_rows};
use crate::services::preset::{TrapPreset, WheelPreset};
use crate::services::resolver::resolve;
use crate::services::wheel::{normalize_angle, target_angle, winner_index, WheelState};

pub fn handle_inspect_commands(cli: &Cli, config: &WheelConfig) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Resolve { items } => {
            let wheel = prepare_wheel(items, config)?;
            print_rows(cli.json, &wheel.items)?;
        }
        Commands::Layout { items, angle } => {
            check_angle(*angle)?;
            let wheel = prepare_wheel(items, config)?;
            let mut state = WheelState::new(wheel.items);
            state.advance(*angle);
            let report = LayoutReport {
                angle: state.angle(),
                wedges: state.layout(),
            };
            print_report(cli.json, &report)?;
        }
        Commands::Winner { items, angle } => {
            check_angle(*angle)?;
            let wheel = prepare_wheel(items, config)?;
            let index = winner_index(&wheel.items, *angle);
            let report = WinnerReport {
                angle: normalize_angle(*angle),
                target_angle: target_angle(*angle),
                index,
                name: wheel.items[index].name.clone(),
            };
            print_report(cli.json, &report)?;
        }
        Commands::Presets { items } => {
            let entries =
                collect_entries(&items.items, items.file.as_deref(), config.input.max_items)?;
            let standard_items = if entries.is_empty() {
                None
            } else {
                Some(resolve(&entries)?)
            };
            let trap = WheelPreset::Trap(TrapPreset::from_settings(&config.trap));
            let mut reports = vec![PresetReport {
                name: WheelPreset::Standard.name().to_string(),
                auto_start: WheelPreset::Standard.auto_start(),
                items: standard_items,
            }];
            if config.trap.enabled {
                reports.push(PresetReport {
                    name: trap.name().to_string(),
                    auto_start: trap.auto_start(),
                    items: Some(trap.items(&[])?),
                });
            }
            print_rows(cli.json, &reports)?;
        }
        Commands::Check { items } => {
            let wheel = prepare_wheel(items, config)?;
            let report = CheckReport {
                status: "ok".to_string(),
                preset: wheel.preset.name().to_string(),
                entry_count: wheel.entries.len(),
                item_count: wheel.items.len(),
                wheel_id: wheel_id(&wheel.items),
            };
            print_report(cli.json, &report)?;
        }
        Commands::Spin { .. } => anyhow::bail!("spin is not an inspection command"),
    }
    Ok(())
}

fn check_angle(angle: f64) -> anyhow::Result<()> {
    if !angle.is_finite() {
        anyhow::bail!("angle must be a finite number of degrees");
    }
    Ok(())
}
