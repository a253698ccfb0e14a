//! Hobby servos on 50 Hz PWM
//!
//! A servo angle maps linearly onto a 500–2500 µs pulse in a 20 ms period.
//! The right shoulder servo is mounted facing the other way, so its angle
//! is mirrored (`180 - angle`) to keep both shoulders in one angle space.
//!
//! The bank remembers the angle it last commanded per joint and reports
//! that back; PWM duty registers are too coarse to read one degree back
//! reliably.

use embedded_hal::pwm::SetDutyCycle;
use plush_core::config::JOINT;
use plush_core::traits::{Joint, JointActuator};

/// PWM period (µs)
pub const SERVO_PERIOD_US: u16 = 20_000;

/// Pulse width at 0 degrees (µs)
pub const PULSE_MIN_US: u16 = 500;

/// Pulse width at 180 degrees (µs)
pub const PULSE_MAX_US: u16 = 2_500;

/// Servo travel (degrees)
const SERVO_RANGE_DEG: i32 = 180;

/// Pulse width for a servo-space angle, clamped to the servo's travel
pub fn pulse_width_us(servo_angle: i16) -> u16 {
    let angle = (servo_angle as i32).clamp(0, SERVO_RANGE_DEG);
    let span = (PULSE_MAX_US - PULSE_MIN_US) as i32;
    (PULSE_MIN_US as i32 + angle * span / SERVO_RANGE_DEG) as u16
}

/// Servo-space angle for a joint-space angle
fn servo_angle(joint: Joint, angle: i16) -> i16 {
    match joint {
        Joint::RightShoulder => SERVO_RANGE_DEG as i16 - angle,
        Joint::LeftShoulder | Joint::Spine => angle,
    }
}

/// Three servo channels, indexed by [`Joint::index`]
pub struct ServoBank<P> {
    channels: [P; 3],
    /// Last commanded joint-space angle
    angles: [i16; 3],
    /// Duty writes that failed
    error_count: u32,
}

impl<P: SetDutyCycle> ServoBank<P> {
    /// Take over the channels and drive every joint to the home pose
    pub fn new(channels: [P; 3]) -> Self {
        let mut bank = Self {
            channels,
            angles: [JOINT.home_angle; 3],
            error_count: 0,
        };
        for joint in Joint::ALL {
            bank.set_angle_degrees(joint, JOINT.home_angle);
        }
        bank
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    pub fn channel(&self, joint: Joint) -> &P {
        &self.channels[joint.index()]
    }
}

impl<P: SetDutyCycle> JointActuator for ServoBank<P> {
    fn set_angle_degrees(&mut self, joint: Joint, angle: i16) {
        let index = joint.index();
        self.angles[index] = angle;

        let pulse = pulse_width_us(servo_angle(joint, angle));
        if self.channels[index]
            .set_duty_cycle_fraction(pulse, SERVO_PERIOD_US)
            .is_err()
        {
            self.error_count = self.error_count.saturating_add(1);
        }
    }

    fn angle_degrees(&self, joint: Joint) -> i16 {
        self.angles[joint.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::pwm::{ErrorKind, ErrorType};

    /// PWM slice counting 1 µs per step
    struct MockPwm {
        duty: u16,
        fail: bool,
    }

    impl MockPwm {
        fn new() -> Self {
            Self {
                duty: 0,
                fail: false,
            }
        }
    }

    impl ErrorType for MockPwm {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            SERVO_PERIOD_US
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.duty = duty;
            Ok(())
        }
    }

    fn bank() -> ServoBank<MockPwm> {
        ServoBank::new([MockPwm::new(), MockPwm::new(), MockPwm::new()])
    }

    #[test]
    fn test_pulse_mapping() {
        assert_eq!(pulse_width_us(0), 500);
        assert_eq!(pulse_width_us(90), 1_500);
        assert_eq!(pulse_width_us(180), 2_500);
        assert_eq!(pulse_width_us(45), 1_000);
        assert_eq!(pulse_width_us(-10), 500);
        assert_eq!(pulse_width_us(200), 2_500);
    }

    #[test]
    fn test_starts_at_home() {
        let bank = bank();
        for joint in Joint::ALL {
            assert_eq!(bank.angle_degrees(joint), 90);
            assert_eq!(bank.channel(joint).duty, 1_500);
        }
    }

    #[test]
    fn test_right_shoulder_mirrored() {
        let mut bank = bank();
        bank.set_angle_degrees(Joint::LeftShoulder, 45);
        bank.set_angle_degrees(Joint::RightShoulder, 45);

        assert_eq!(bank.channel(Joint::LeftShoulder).duty, 1_000);
        assert_eq!(bank.channel(Joint::RightShoulder).duty, 2_000);
        // Both report the same joint-space angle
        assert_eq!(bank.angle_degrees(Joint::RightShoulder), 45);
    }

    #[test]
    fn test_spine_reports_commanded_angle() {
        let mut bank = bank();
        bank.set_angle_degrees(Joint::Spine, 91);
        assert_eq!(bank.angle_degrees(Joint::Spine), 91);
    }

    #[test]
    fn test_pwm_error_counted() {
        let mut bank = bank();
        bank.channels[2].fail = true;
        bank.set_angle_degrees(Joint::Spine, 100);
        assert_eq!(bank.error_count(), 1);
        assert_eq!(bank.angle_degrees(Joint::Spine), 100);
    }
}
