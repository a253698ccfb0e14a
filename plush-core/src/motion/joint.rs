//! Single-joint step controller
//!
//! `set_target` records where the joint should go; every `tick` moves the
//! joint at most `max_step` degrees closer. When the remaining distance is
//! below the step the joint snaps onto the target, so it can neither
//! overshoot nor dither around it.

use crate::config::{JointConfig, JOINT};
use crate::traits::{Joint, JointActuator};

/// Direction the joint moved on its last tick
///
/// Purely descriptive: the step itself is computed from the signed
/// distance, not from this label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorPhase {
    /// Not ticked yet
    #[default]
    Idle,
    /// Angle rising toward the target
    Increasing,
    /// Angle falling toward the target
    Decreasing,
    /// At target
    Holding,
}

/// Motion state of one joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorState {
    /// Angle last written to the servo (degrees)
    pub current_angle: i16,
    /// Angle the joint is heading to (degrees)
    pub target_angle: i16,
    pub phase: ActuatorPhase,
}

/// Step controller for one joint
#[derive(Debug, Clone)]
pub struct ActuatorController {
    joint: Joint,
    config: JointConfig,
    state: ActuatorState,
}

impl ActuatorController {
    /// Controller resting at the home pose
    pub fn new(joint: Joint) -> Self {
        Self::with_config(joint, JOINT)
    }

    pub fn with_config(joint: Joint, config: JointConfig) -> Self {
        let home = config.clamp(config.home_angle);
        Self {
            joint,
            config,
            state: ActuatorState {
                current_angle: home,
                target_angle: home,
                phase: ActuatorPhase::Idle,
            },
        }
    }

    /// Adopt the angle the servo reports, holding there
    pub fn sync_from<A: JointActuator>(&mut self, actuator: &A) {
        let angle = self.config.clamp(actuator.angle_degrees(self.joint));
        self.state.current_angle = angle;
        self.state.target_angle = angle;
    }

    /// Set a new target, clamped to the joint's range
    pub fn set_target(&mut self, angle: i16) {
        self.state.target_angle = self.config.clamp(angle);
    }

    /// Advance one frame, writing the new angle to the servo if it moved
    pub fn tick<A: JointActuator>(&mut self, actuator: &mut A) -> ActuatorPhase {
        let current = self.state.current_angle;
        let target = self.state.target_angle;
        let distance = target - current;

        self.state.phase = match distance {
            d if d > 0 => ActuatorPhase::Increasing,
            d if d < 0 => ActuatorPhase::Decreasing,
            _ => ActuatorPhase::Holding,
        };

        if distance != 0 {
            let next = if distance.abs() < self.config.max_step {
                target
            } else {
                current + self.config.max_step * distance.signum()
            };
            self.state.current_angle = self.config.clamp(next);
            actuator.set_angle_degrees(self.joint, self.state.current_angle);
        }

        self.state.phase
    }

    /// The joint has settled on its target
    pub fn at_target(&self) -> bool {
        self.state.current_angle == self.state.target_angle
    }

    pub fn joint(&self) -> Joint {
        self.joint
    }

    pub fn current_angle(&self) -> i16 {
        self.state.current_angle
    }

    pub fn target_angle(&self) -> i16 {
        self.state.target_angle
    }

    pub fn phase(&self) -> ActuatorPhase {
        self.state.phase
    }

    pub fn state(&self) -> ActuatorState {
        self.state
    }
}
