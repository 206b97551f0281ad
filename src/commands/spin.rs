use crate::cli::{Cli, Commands, PolicyKind};
use crate::commands::prepare_wheel;
use crate::domain::models::{SpinReport, TrapOutcome, WheelConfig};
use crate::services::controller::{FrameSignal, SpinController, StopPolicy};
use crate::services::fingerprint::{seed_from_phrase, wheel_id};
use crate::services::output::print_report;
use crate::services::preset::WheelPreset;
use crate::services::render::frame_line;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::mpsc;
use std::time::Duration;

const AUTO_START_DELAY: Duration = Duration::from_millis(1000);

pub fn handle_spin(cli: &Cli, config: &WheelConfig) -> anyhow::Result<()> {
    let Commands::Spin {
        items,
        policy,
        speed,
        stop_after,
        seed,
        seed_phrase,
        animate,
        frame_ms,
        countdown,
    } = &cli.command
    else {
        anyhow::bail!("handle_spin called for a non-spin command");
    };

    let wheel = prepare_wheel(items, config)?;
    let seed = (*seed).or_else(|| seed_phrase.as_deref().map(seed_from_phrase));
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    // auto-starting presets have no stop button, so they always decay
    let stop_policy = match (wheel.preset.auto_start(), policy) {
        (true, _) | (false, PolicyKind::Decay) => StopPolicy::decay(&config.spin),
        (false, PolicyKind::Brake) => StopPolicy::brake(&config.spin),
    };
    // the start angle is drawn first so `--speed` does not shift it
    let start_angle = wheel.preset.initial_angle(&mut rng);
    let initial_speed = match (&wheel.preset, speed) {
        (WheelPreset::Standard, Some(s)) => *s,
        _ => wheel.preset.initial_speed(&mut rng, &config.spin),
    };

    let id = wheel_id(&wheel.items);
    let mut controller = SpinController::new(wheel.items, stop_policy, wheel.trap)?;

    let interactive = matches!(stop_policy, StopPolicy::Brake { .. }) && stop_after.is_none();
    let enter = interactive.then(spawn_enter_listener);
    let pace = Duration::from_millis(frame_ms.unwrap_or(config.spin.frame_ms));
    let show_frames = *animate && !cli.json;

    if wheel.preset.auto_start() && show_frames {
        std::thread::sleep(AUTO_START_DELAY);
    }
    if interactive {
        eprintln!("spinning... press Enter to brake");
    }

    tracing::info!(
        preset = wheel.preset.name(),
        policy = stop_policy.name(),
        initial_speed,
        start_angle,
        ?seed,
        "starting spin"
    );
    controller.start_at(start_angle, initial_speed)?;
    let wheel_items = controller.items().to_vec();
    let outcome = controller.run_to_completion(config.spin.max_ticks, |frame| {
        if show_frames {
            eprintln!("{}", frame_line(frame, &wheel_items));
        }
        if show_frames || interactive {
            std::thread::sleep(pace);
        }
        let stop = match (stop_after, &enter) {
            (Some(n), _) => frame.tick >= *n,
            (None, Some(rx)) => rx.try_recv().is_ok(),
            (None, None) => false,
        };
        if stop {
            FrameSignal::Stop
        } else {
            FrameSignal::Continue
        }
    })?;

    if *countdown > 0 && !cli.json {
        for n in (1..=*countdown).rev() {
            eprintln!("{}...", n);
            if show_frames {
                std::thread::sleep(Duration::from_secs(1));
            }
        }
    }

    let trap_outcome = if controller.trap_state().fired() {
        wheel.preset.outcome(&outcome.winner)
    } else {
        None
    };
    if let Some(TrapOutcome::Redirected { url }) = &trap_outcome {
        tracing::warn!(%url, "trap wheel landed on a redirect");
    }

    let report = SpinReport {
        preset: wheel.preset.name().to_string(),
        wheel_id: id,
        policy: stop_policy.name().to_string(),
        seed,
        start_angle,
        initial_speed,
        final_angle: outcome.angle,
        ticks: outcome.ticks,
        winner_index: outcome.winner_index,
        winner: outcome.winner,
        trap_outcome,
    };
    print_report(cli.json, &report)
}

fn spawn_enter_listener() -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut line = String::new();
        // EOF also counts, so a closed stdin cannot leave the wheel spinning
        let _ = std::io::stdin().read_line(&mut line);
        let _ = tx.send(());
    });
    rx
}
