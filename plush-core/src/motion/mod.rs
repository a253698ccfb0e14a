//! Joint motion
//!
//! Each joint is driven toward its target in bounded steps so the servos
//! never snap across the full range in one frame.

pub mod joint;
pub mod joints;

pub use joint::{ActuatorController, ActuatorPhase, ActuatorState};
pub use joints::Joints;
