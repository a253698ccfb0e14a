//! Debounce state machine
//!
//! ```text
//!            raw            next tick            cooldown_ticks
//!   Idle ─────────▶ Active ──────────▶ Cooldown ───────────────▶ Idle
//!                                          │
//!                                          │ cooldown_ticks (recalibrating sensors)
//!                                          ▼
//!                                    Recalibrating ──settle_ticks──▶ Idle
//! ```
//!
//! `Active` lasts exactly one tick. The raw condition is only evaluated in
//! `Idle`, so a condition that stays true through the cooldown is not seen
//! again until the machine is idle.

use crate::config::DebounceConfig;

/// Debounce phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorPhase {
    /// Armed, waiting for the raw condition
    #[default]
    Idle,
    /// Triggered this tick
    Active,
    /// Ignoring the raw condition
    Cooldown,
    /// Waiting between the two drift samples (motion sensor only)
    Recalibrating,
}

impl SensorPhase {
    /// Phases in which the cooldown counter runs
    pub fn is_waiting(&self) -> bool {
        matches!(self, SensorPhase::Cooldown | SensorPhase::Recalibrating)
    }

    /// Phase and event once the wait of the current phase has elapsed
    ///
    /// Only meaningful for waiting phases; the others are returned as-is.
    pub fn on_expiry(self, config: &DebounceConfig) -> (SensorPhase, DebounceEvent) {
        match (self, config.recalibration) {
            (SensorPhase::Cooldown, Some(_)) => {
                (SensorPhase::Recalibrating, DebounceEvent::CaptureReference)
            }
            (SensorPhase::Cooldown, None) => (SensorPhase::Idle, DebounceEvent::Rearmed),
            (SensorPhase::Recalibrating, _) => (SensorPhase::Idle, DebounceEvent::CheckDrift),
            (phase, _) => (phase, DebounceEvent::None),
        }
    }
}

/// Something the owning sensor may need to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceEvent {
    /// Nothing changed that the owner cares about
    None,
    /// Raw condition seen; the sensor is active for this tick
    Triggered,
    /// Cooldown over; take the first drift sample now
    CaptureReference,
    /// Settle delay over; take the second sample and compare
    CheckDrift,
    /// Cooldown over; armed again
    Rearmed,
}

/// Debounce state of one sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorState {
    pub phase: SensorPhase,
    /// Ticks spent in the current waiting phase
    pub cooldown_counter: u16,
}

/// Generic debouncer, one instance per sensor
#[derive(Debug, Clone)]
pub struct Debouncer {
    config: DebounceConfig,
    state: SensorState,
}

impl Debouncer {
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            state: SensorState::default(),
        }
    }

    pub fn config(&self) -> &DebounceConfig {
        &self.config
    }

    pub fn state(&self) -> SensorState {
        self.state
    }

    pub fn phase(&self) -> SensorPhase {
        self.state.phase
    }

    /// True only on the tick the raw condition was accepted
    pub fn is_active(&self) -> bool {
        self.state.phase == SensorPhase::Active
    }

    /// Advance one frame
    ///
    /// `raw` is only called while idle.
    pub fn tick(&mut self, raw: impl FnOnce() -> bool) -> DebounceEvent {
        let mut event = DebounceEvent::None;

        match self.state.phase {
            SensorPhase::Idle => {
                if raw() {
                    self.enter(SensorPhase::Active);
                    event = DebounceEvent::Triggered;
                }
            }
            SensorPhase::Active => self.enter(SensorPhase::Cooldown),
            SensorPhase::Cooldown | SensorPhase::Recalibrating => {}
        }

        if self.state.phase.is_waiting() {
            self.state.cooldown_counter = self.state.cooldown_counter.saturating_add(1);
            if self.state.cooldown_counter >= self.wait_ticks() {
                let (next, expired) = self.state.phase.on_expiry(&self.config);
                self.enter(next);
                event = expired;
            }
        }

        event
    }

    /// Length of the current waiting phase
    fn wait_ticks(&self) -> u16 {
        match (self.state.phase, self.config.recalibration) {
            (SensorPhase::Recalibrating, Some(r)) => r.settle_ticks,
            _ => self.config.cooldown_ticks,
        }
    }

    fn enter(&mut self, phase: SensorPhase) {
        self.state.phase = phase;
        self.state.cooldown_counter = 0;
    }
}
