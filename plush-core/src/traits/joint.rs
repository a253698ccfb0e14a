//! Joint actuator trait

/// The three driven joints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Joint {
    LeftShoulder,
    RightShoulder,
    Spine,
}

impl Joint {
    /// All joints in tick order
    pub const ALL: [Joint; 3] = [Joint::LeftShoulder, Joint::RightShoulder, Joint::Spine];

    /// Index into per-joint arrays
    pub const fn index(self) -> usize {
        match self {
            Joint::LeftShoulder => 0,
            Joint::RightShoulder => 1,
            Joint::Spine => 2,
        }
    }
}

/// Positional servo output for all joints
///
/// Angles are in degrees in a shared angle space: a driver for a
/// mirrored servo converts internally.
pub trait JointActuator {
    /// Command a joint to an angle
    fn set_angle_degrees(&mut self, joint: Joint, angle: i16);

    /// Last angle the joint was commanded to
    fn angle_degrees(&self, joint: Joint) -> i16;
}
