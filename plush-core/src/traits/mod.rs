//! Hardware abstraction traits
//!
//! These traits define the narrow interface between the control core and
//! the hardware drivers. None of them can fail: a driver that hits a bus
//! error answers with its documented fallback instead.

pub mod audio;
pub mod counter;
pub mod joint;
pub mod sensor;

pub use audio::{AudioChannel, AudioTrigger};
pub use counter::FreeRunningCounter;
pub use joint::{Joint, JointActuator};
pub use sensor::{Axis, MotionSensorBus, ThermalSensor, TouchPin};
