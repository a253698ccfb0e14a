//! The three joints and the servo output they share

use super::joint::ActuatorController;
use crate::traits::{Joint, JointActuator};

/// All joint controllers plus the servo hardware
///
/// Ticking writes each joint's new angle through the shared actuator.
pub struct Joints<A> {
    actuator: A,
    controllers: [ActuatorController; 3],
}

impl<A: JointActuator> Joints<A> {
    /// Take over the servos at whatever angle they report
    pub fn new(actuator: A) -> Self {
        let mut controllers = Joint::ALL.map(ActuatorController::new);
        for controller in controllers.iter_mut() {
            controller.sync_from(&actuator);
        }
        Self {
            actuator,
            controllers,
        }
    }

    /// Advance every joint one frame
    pub fn tick(&mut self) {
        for controller in self.controllers.iter_mut() {
            controller.tick(&mut self.actuator);
        }
    }

    pub fn get(&self, joint: Joint) -> &ActuatorController {
        &self.controllers[joint.index()]
    }

    pub fn set_target(&mut self, joint: Joint, angle: i16) {
        self.controllers[joint.index()].set_target(angle);
    }

    pub fn at_target(&self, joint: Joint) -> bool {
        self.get(joint).at_target()
    }

    /// At least one joint has settled
    pub fn any_settled(&self) -> bool {
        self.controllers.iter().any(|c| c.at_target())
    }

    pub fn all_settled(&self) -> bool {
        self.controllers.iter().all(|c| c.at_target())
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn actuator_mut(&mut self) -> &mut A {
        &mut self.actuator
    }
}
