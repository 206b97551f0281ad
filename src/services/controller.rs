//! Spin driver built on top of the wheel engine.
//!
//! The controller owns the rotation between start and stop. It has no clock:
//! callers invoke `tick` once per frame and decide how long a frame lasts.
//!
//! Phases: `Idle -> Spinning -> Resolving -> Idle`.

use crate::domain::models::{ResolvedItem, SpinSettings, Wedge};
use crate::services::preset::TrapState;
use crate::services::wheel::{winner_index, WheelState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopPolicy {
    /// Speed shrinks by `factor` every tick from the first frame on.
    Decay { factor: f64, min_speed: f64 },
    /// Speed holds until a stop is requested, then shrinks by `factor`.
    Brake { factor: f64, min_speed: f64 },
}

impl StopPolicy {
    pub fn decay(spin: &SpinSettings) -> Self {
        StopPolicy::Decay {
            factor: spin.decay_factor,
            min_speed: spin.min_speed,
        }
    }

    pub fn brake(spin: &SpinSettings) -> Self {
        StopPolicy::Brake {
            factor: spin.brake_factor,
            min_speed: spin.min_speed,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StopPolicy::Decay { .. } => "decay",
            StopPolicy::Brake { .. } => "brake",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Resolving,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SpinError {
    #[error("wheel has no items")]
    EmptyWheel,
    #[error("wheel is already spinning")]
    AlreadySpinning,
    #[error("wheel is not spinning")]
    NotSpinning,
    #[error("wheel has not stopped yet")]
    NotStopped,
    #[error("initial speed must be a positive number (got {0})")]
    InvalidSpeed(f64),
    #[error("start angle must be a finite number of degrees (got {0})")]
    InvalidAngle(f64),
    #[error("spin did not stop within {0} ticks")]
    TickBudgetExhausted(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub angle: f64,
    pub speed: f64,
    pub under_pointer: usize,
    pub stopped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSignal {
    Continue,
    Stop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub winner_index: usize,
    pub winner: String,
    pub angle: f64,
    pub ticks: u64,
}

#[derive(Debug)]
pub struct SpinController {
    wheel: WheelState,
    policy: StopPolicy,
    trap: TrapState,
    phase: SpinPhase,
    speed: f64,
    ticks: u64,
    stop_requested: bool,
}

impl SpinController {
    pub fn new(
        items: Vec<ResolvedItem>,
        policy: StopPolicy,
        trap: TrapState,
    ) -> Result<Self, SpinError> {
        if items.is_empty() {
            return Err(SpinError::EmptyWheel);
        }
        Ok(Self {
            wheel: WheelState::new(items),
            policy,
            trap,
            phase: SpinPhase::Idle,
            speed: 0.0,
            ticks: 0,
            stop_requested: false,
        })
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn angle(&self) -> f64 {
        self.wheel.angle()
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn policy(&self) -> StopPolicy {
        self.policy
    }

    pub fn trap_state(&self) -> TrapState {
        self.trap
    }

    pub fn items(&self) -> &[ResolvedItem] {
        self.wheel.items()
    }

    pub fn layout(&self) -> Vec<Wedge> {
        self.wheel.layout()
    }

    /// Index of the item under the pointer right now.
    pub fn under_pointer(&self) -> usize {
        self.wheel.winner_index()
    }

    pub fn start(&mut self, speed: f64) -> Result<(), SpinError> {
        self.start_at(self.wheel.angle(), speed)
    }

    /// Like `start`, but first turns the wheel to `angle`. Stopping angles
    /// are only uniform when `angle` is.
    pub fn start_at(&mut self, angle: f64, speed: f64) -> Result<(), SpinError> {
        if self.phase != SpinPhase::Idle {
            return Err(SpinError::AlreadySpinning);
        }
        if !speed.is_finite() || speed <= 0.0 {
            return Err(SpinError::InvalidSpeed(speed));
        }
        if !angle.is_finite() {
            return Err(SpinError::InvalidAngle(angle));
        }
        self.wheel.set_angle(angle);
        self.phase = SpinPhase::Spinning;
        self.speed = speed;
        self.ticks = 0;
        self.stop_requested = false;
        tracing::debug!(
            speed,
            angle = self.wheel.angle(),
            policy = self.policy.name(),
            "spin started"
        );
        Ok(())
    }

    /// Asks a braking spin to start slowing down. Decaying spins already
    /// slow down on their own, so the request only gets recorded.
    pub fn request_stop(&mut self) -> Result<(), SpinError> {
        if self.phase != SpinPhase::Spinning {
            return Err(SpinError::NotSpinning);
        }
        self.stop_requested = true;
        Ok(())
    }

    pub fn tick(&mut self) -> Result<Frame, SpinError> {
        if self.phase != SpinPhase::Spinning {
            return Err(SpinError::NotSpinning);
        }
        let (factor, min_speed, slowing) = match self.policy {
            StopPolicy::Decay { factor, min_speed } => (factor, min_speed, true),
            StopPolicy::Brake { factor, min_speed } => (factor, min_speed, self.stop_requested),
        };
        if slowing {
            self.speed *= factor;
        }
        self.wheel.advance(self.speed);
        self.ticks += 1;

        let stopped = slowing && self.speed < min_speed;
        if stopped {
            self.phase = SpinPhase::Resolving;
        }
        Ok(Frame {
            tick: self.ticks,
            angle: self.wheel.angle(),
            speed: self.speed,
            under_pointer: self.wheel.winner_index(),
            stopped,
        })
    }

    pub fn resolve(&mut self) -> Result<SpinOutcome, SpinError> {
        if self.phase != SpinPhase::Resolving {
            return Err(SpinError::NotStopped);
        }
        let angle = self.wheel.angle();
        let idx = winner_index(self.wheel.items(), angle);
        self.phase = SpinPhase::Idle;
        self.speed = 0.0;
        let outcome = SpinOutcome {
            winner_index: idx,
            winner: self.wheel.items()[idx].name.clone(),
            angle,
            ticks: self.ticks,
        };
        tracing::info!(winner = %outcome.winner, angle, ticks = self.ticks, "spin resolved");
        Ok(outcome)
    }

    /// Ticks until the wheel stops, then resolves. `on_frame` sees every
    /// frame and may return `FrameSignal::Stop` to begin braking.
    pub fn run_to_completion(
        &mut self,
        max_ticks: u64,
        mut on_frame: impl FnMut(&Frame) -> FrameSignal,
    ) -> Result<SpinOutcome, SpinError> {
        loop {
            let frame = self.tick()?;
            let signal = on_frame(&frame);
            if frame.stopped {
                break;
            }
            if signal == FrameSignal::Stop && !self.stop_requested {
                self.request_stop()?;
            }
            if frame.tick >= max_ticks {
                tracing::warn!(max_ticks, "spin exceeded tick budget");
                self.phase = SpinPhase::Idle;
                self.speed = 0.0;
                return Err(SpinError::TickBudgetExhausted(max_ticks));
            }
        }
        self.resolve()
    }

    /// Swaps in a new wheel. Rotation, phase and the trap flag start over.
    pub fn reconfigure(&mut self, items: Vec<ResolvedItem>) -> Result<(), SpinError> {
        if items.is_empty() {
            return Err(SpinError::EmptyWheel);
        }
        self.wheel = WheelState::new(items);
        self.phase = SpinPhase::Idle;
        self.speed = 0.0;
        self.ticks = 0;
        self.stop_requested = false;
        self.trap.reset();
        Ok(())
    }
}
