//! Top-level reaction controller
//!
//! Watches the debounced motion and touch signals. A stimulus plays a
//! sound, then the joints are sent through a series of random poses before
//! the controller rests and listens again:
//!
//! ```text
//! Init ─▶ Sense ─stimulus─▶ SuppressAudio ─7 ticks─▶ CommandMove ─▶ AwaitSettle
//!           ▲                                             ▲              │
//!           │                                             └─joint settled┤
//!           └──────────── 160 ticks ── CooldownSense ◀──── 6 moves ──────┘
//! ```
//!
//! The controller never touches sensor or joint internals: it reads the
//! debounced flags and `at_target`, and writes joint targets.

use super::machine::{Observation, Phase};
use crate::config::{ControllerConfig, CONTROLLER};
use crate::motion::Joints;
use crate::traits::{AudioChannel, AudioTrigger, FreeRunningCounter, Joint, JointActuator};

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TopControlState {
    pub phase: Phase,
    /// Moves issued in the current reaction
    pub move_count: u8,
    /// Ticks spent in the current timed phase
    pub delay_counter: u16,
}

/// Debounced sensor flags for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stimulus {
    pub motion: bool,
    pub touch: bool,
}

/// The reaction state machine
#[derive(Debug, Clone)]
pub struct TopController {
    config: ControllerConfig,
    state: TopControlState,
    /// Channel playing (or last played) the reaction sound
    last_trigger: Option<AudioChannel>,
}

impl Default for TopController {
    fn default() -> Self {
        Self::new()
    }
}

impl TopController {
    pub fn new() -> Self {
        Self::with_config(CONTROLLER)
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            config,
            state: TopControlState::default(),
            last_trigger: None,
        }
    }

    pub fn state(&self) -> TopControlState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn move_count(&self) -> u8 {
        self.state.move_count
    }

    pub fn last_trigger(&self) -> Option<AudioChannel> {
        self.last_trigger
    }

    /// Advance one frame
    ///
    /// Must run after the sensors ticked, so `stimulus` reflects this frame.
    /// Returns the new phase when a transition happened.
    pub fn tick<J, Au, C>(
        &mut self,
        stimulus: Stimulus,
        joints: &mut Joints<J>,
        audio: &mut Au,
        counter: &mut C,
    ) -> Option<Phase>
    where
        J: JointActuator,
        Au: AudioTrigger,
        C: FreeRunningCounter,
    {
        let obs = Observation {
            motion: stimulus.motion,
            touch: stimulus.touch,
            any_settled: joints.any_settled(),
            delay_ticks: self.state.delay_counter,
            move_count: self.state.move_count,
        };

        let from = self.state.phase;
        let to = from.transition(&obs, &self.config);
        if to != from {
            self.state.phase = to;
            self.state.delay_counter = 0;
            self.on_transition(from, to, &obs, joints, audio, counter);
        }

        if self.state.phase.is_timed() {
            self.state.delay_counter = self.state.delay_counter.saturating_add(1);
        }

        (to != from).then_some(to)
    }

    /// Entry actions; each fires exactly once per transition
    fn on_transition<J, Au, C>(
        &mut self,
        from: Phase,
        to: Phase,
        obs: &Observation,
        joints: &mut Joints<J>,
        audio: &mut Au,
        counter: &mut C,
    ) where
        J: JointActuator,
        Au: AudioTrigger,
        C: FreeRunningCounter,
    {
        match to {
            Phase::SuppressAudio => {
                if let Some(channel) = obs.trigger() {
                    audio.enable(channel);
                    self.last_trigger = Some(channel);
                }
            }
            Phase::CommandMove => {
                if from == Phase::SuppressAudio {
                    audio.disable_all();
                }
                self.state.move_count = self.state.move_count.saturating_add(1);
                self.command_move(joints, counter);
            }
            Phase::CooldownSense => {
                self.state.move_count = 0;
            }
            Phase::Init | Phase::Sense | Phase::AwaitSettle => {}
        }
    }

    /// Send every joint still travelling to a freshly picked pose
    ///
    /// Joints already at their target keep it.
    fn command_move<J, C>(&self, joints: &mut Joints<J>, counter: &mut C)
    where
        J: JointActuator,
        C: FreeRunningCounter,
    {
        for joint in Joint::ALL {
            if !joints.at_target(joint) {
                let angle = self.config.pose_for(counter.read());
                joints.set_target(joint, angle);
            }
        }
    }
}
