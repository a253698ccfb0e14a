//! Reaction state machine definition
//!
//! The next phase is a pure function of the current phase and what the
//! controller observed this tick. Side effects live in the controller and
//! fire on transitions only.

use crate::config::ControllerConfig;
use crate::traits::AudioChannel;

/// Top controller phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Power-on, one tick
    #[default]
    Init,
    /// Waiting for a shake or a touch
    Sense,
    /// Sound clip triggered; waiting to release the trigger line
    SuppressAudio,
    /// New joint targets issued this tick
    CommandMove,
    /// Waiting for a joint to reach its target
    AwaitSettle,
    /// Reaction finished; ignoring sensors for a while
    CooldownSense,
}

impl Phase {
    /// Phases belonging to a reaction in progress
    pub fn is_reacting(&self) -> bool {
        matches!(
            self,
            Phase::SuppressAudio | Phase::CommandMove | Phase::AwaitSettle
        )
    }

    /// Phases that count ticks in the delay counter
    pub fn is_timed(&self) -> bool {
        matches!(self, Phase::SuppressAudio | Phase::CooldownSense)
    }

    /// Next phase for this tick
    ///
    /// Every `(phase, observation)` pair maps to exactly one phase.
    pub fn transition(self, obs: &Observation, config: &ControllerConfig) -> Self {
        use Phase::*;

        match self {
            Init => Sense,

            Sense if obs.trigger().is_some() => SuppressAudio,
            Sense => Sense,

            SuppressAudio if obs.delay_ticks >= config.audio_ticks => CommandMove,
            SuppressAudio => SuppressAudio,

            CommandMove => AwaitSettle,

            AwaitSettle if obs.move_count >= config.moves_per_cycle => CooldownSense,
            AwaitSettle if obs.any_settled => CommandMove,
            AwaitSettle => AwaitSettle,

            CooldownSense if obs.delay_ticks >= config.rest_ticks => Sense,
            CooldownSense => CooldownSense,
        }
    }
}

/// What the controller sees at the start of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Observation {
    /// Motion sensor active this tick
    pub motion: bool,
    /// Touch pad active this tick
    pub touch: bool,
    /// At least one joint is at its target
    pub any_settled: bool,
    /// Ticks counted in the current timed phase
    pub delay_ticks: u16,
    /// Moves issued in the current reaction
    pub move_count: u8,
}

impl Observation {
    /// Sound to play for this tick's stimulus; a shake wins over a touch
    pub fn trigger(&self) -> Option<AudioChannel> {
        if self.motion {
            Some(AudioChannel::Motion)
        } else if self.touch {
            Some(AudioChannel::Touch)
        } else {
            None
        }
    }
}
