//! One execution frame
//!
//! [`Frame`] owns every component and runs them in a fixed order each tick:
//! sensors, then joints, then the top controller. Targets the controller
//! writes are acted on by the joints starting with the next frame.

use crate::motion::Joints;
use crate::sensing::{DebounceEvent, MotionSensor, Recalibration, ThermalTrigger, TouchSensor};
use crate::state::{Phase, Stimulus, TopController};
use crate::traits::{
    AudioTrigger, FreeRunningCounter, JointActuator, MotionSensorBus, ThermalSensor, TouchPin,
};

/// Hardware a frame runs on
///
/// Groups the concrete driver types so the frame has a single type
/// parameter.
pub trait Board {
    type Touch: TouchPin;
    type Thermal: ThermalSensor;
    type Motion: MotionSensorBus;
    type Servos: JointActuator;
    type Audio: AudioTrigger;
    type Counter: FreeRunningCounter;
}

/// Drivers handed to [`Frame::new`]
pub struct Peripherals<B: Board> {
    pub touch: B::Touch,
    pub thermal: B::Thermal,
    pub motion: B::Motion,
    pub servos: B::Servos,
    pub audio: B::Audio,
    pub counter: B::Counter,
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    pub touch: DebounceEvent,
    pub thermal: DebounceEvent,
    pub motion: DebounceEvent,
    /// Drift check result, only on the frame the check ran
    pub recalibration: Option<Recalibration>,
    /// New controller phase, only on the frame it changed
    pub transition: Option<Phase>,
}

pub struct Frame<B: Board> {
    touch: TouchSensor<B::Touch>,
    thermal: ThermalTrigger<B::Thermal>,
    motion: MotionSensor<B::Motion>,
    joints: Joints<B::Servos>,
    audio: B::Audio,
    counter: B::Counter,
    controller: TopController,
    ticks: u32,
}

impl<B: Board> Frame<B> {
    /// Assemble the frame
    ///
    /// Silences the sound board and takes the motion baseline, so the toy
    /// should be at rest.
    pub fn new(peripherals: Peripherals<B>) -> Self {
        let Peripherals {
            touch,
            thermal,
            motion,
            servos,
            mut audio,
            counter,
        } = peripherals;

        audio.disable_all();

        Self {
            touch: TouchSensor::new(touch),
            thermal: ThermalTrigger::new(thermal),
            motion: MotionSensor::new(motion),
            joints: Joints::new(servos),
            audio,
            counter,
            controller: TopController::new(),
            ticks: 0,
        }
    }

    /// Run one frame
    pub fn tick(&mut self) -> FrameReport {
        let touch = self.touch.tick();
        let thermal = self.thermal.tick();
        let motion = self.motion.tick();
        let recalibration = match motion {
            DebounceEvent::CheckDrift => self.motion.last_recalibration(),
            _ => None,
        };

        self.joints.tick();

        let stimulus = Stimulus {
            motion: self.motion.is_active(),
            touch: self.touch.is_active(),
        };
        let transition = self.controller.tick(
            stimulus,
            &mut self.joints,
            &mut self.audio,
            &mut self.counter,
        );

        self.ticks = self.ticks.wrapping_add(1);

        FrameReport {
            touch,
            thermal,
            motion,
            recalibration,
            transition,
        }
    }

    /// Frames run since startup
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn controller(&self) -> &TopController {
        &self.controller
    }

    pub fn joints(&self) -> &Joints<B::Servos> {
        &self.joints
    }

    pub fn touch(&self) -> &TouchSensor<B::Touch> {
        &self.touch
    }

    pub fn thermal(&self) -> &ThermalTrigger<B::Thermal> {
        &self.thermal
    }

    pub fn motion(&self) -> &MotionSensor<B::Motion> {
        &self.motion
    }

    pub fn audio(&self) -> &B::Audio {
        &self.audio
    }

    pub fn touch_mut(&mut self) -> &mut TouchSensor<B::Touch> {
        &mut self.touch
    }

    pub fn thermal_mut(&mut self) -> &mut ThermalTrigger<B::Thermal> {
        &mut self.thermal
    }

    pub fn joints_mut(&mut self) -> &mut Joints<B::Servos> {
        &mut self.joints
    }

    pub fn motion_mut(&mut self) -> &mut MotionSensor<B::Motion> {
        &mut self.motion
    }

    pub fn counter_mut(&mut self) -> &mut B::Counter {
        &mut self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensing::SensorPhase;
    use crate::traits::{AudioChannel, Axis, Joint};

    struct Pad(bool);

    impl TouchPin for Pad {
        fn is_pressed(&mut self) -> bool {
            self.0
        }
    }

    struct Thermistor(u16);

    impl ThermalSensor for Thermistor {
        fn read_raw(&mut self) -> u16 {
            self.0
        }
    }

    struct Accel([i16; 3]);

    impl MotionSensorBus for Accel {
        fn read_axis(&mut self, axis: Axis) -> i16 {
            self.0[axis as usize]
        }

        fn write_register(&mut self, _addr: u8, _value: u8) {}
    }

    struct Servos([i16; 3]);

    impl JointActuator for Servos {
        fn set_angle_degrees(&mut self, joint: Joint, angle: i16) {
            self.0[joint.index()] = angle;
        }

        fn angle_degrees(&self, joint: Joint) -> i16 {
            self.0[joint.index()]
        }
    }

    /// Trigger lines as levels; true means the clip is playing
    struct Audio([bool; 3]);

    impl AudioTrigger for Audio {
        fn enable(&mut self, channel: AudioChannel) {
            self.0[channel as usize] = true;
        }

        fn disable(&mut self, channel: AudioChannel) {
            self.0[channel as usize] = false;
        }
    }

    struct Counter(u32);

    impl FreeRunningCounter for Counter {
        fn read(&mut self) -> u32 {
            self.0
        }
    }

    struct TestBoard;

    impl Board for TestBoard {
        type Touch = Pad;
        type Thermal = Thermistor;
        type Motion = Accel;
        type Servos = Servos;
        type Audio = Audio;
        type Counter = Counter;
    }

    fn frame() -> Frame<TestBoard> {
        Frame::new(Peripherals {
            touch: Pad(false),
            thermal: Thermistor(3_000),
            motion: Accel([0, 0, 16_384]),
            servos: Servos([90; 3]),
            audio: Audio([true; 3]),
            counter: Counter(0),
        })
    }

    fn send_all(frame: &mut Frame<TestBoard>, angle: i16) {
        for joint in Joint::ALL {
            frame.joints_mut().set_target(joint, angle);
        }
    }

    #[test]
    fn test_new_silences_audio() {
        let frame = frame();
        assert_eq!(frame.audio().0, [false; 3]);
        assert_eq!(frame.phase(), Phase::Init);
    }

    #[test]
    fn test_quiet_toy_stays_in_sense() {
        let mut frame = frame();
        let report = frame.tick();
        assert_eq!(report.transition, Some(Phase::Sense));

        for _ in 0..120 {
            let report = frame.tick();
            assert_eq!(report.transition, None);
            assert_eq!(report.touch, DebounceEvent::None);
        }
        assert_eq!(frame.ticks(), 121);
    }

    #[test]
    fn test_touch_reacts_in_same_frame() {
        let mut frame = frame();
        frame.tick();

        frame.touch_mut().pin_mut().0 = true;
        let report = frame.tick();
        assert_eq!(report.touch, DebounceEvent::Triggered);
        assert_eq!(report.transition, Some(Phase::SuppressAudio));
        assert!(frame.audio().0[AudioChannel::Touch as usize]);
    }

    #[test]
    fn test_targets_applied_next_frame() {
        let mut frame = frame();
        send_all(&mut frame, 135);
        frame.tick();
        frame.touch_mut().pin_mut().0 = true;
        frame.tick();
        frame.touch_mut().pin_mut().0 = false;

        let mut transition = None;
        while transition != Some(Phase::CommandMove) {
            transition = frame.tick().transition;
        }
        assert_eq!(frame.audio().0, [false; 3]);

        // Retargeted during the controller step; servos still heading up
        let joint = frame.joints().get(Joint::LeftShoulder);
        assert_eq!(joint.target_angle(), 45);
        assert_eq!(joint.current_angle(), 126);
        assert_eq!(frame.joints().actuator().0, [126; 3]);

        frame.tick();
        assert_eq!(frame.joints().get(Joint::LeftShoulder).current_angle(), 122);
        assert_eq!(frame.joints().actuator().0, [122; 3]);
    }

    #[test]
    fn test_warm_hand_does_not_start_reaction() {
        let mut frame = frame();
        frame.tick();

        frame.thermal_mut().sensor_mut().0 = 1_000;
        let report = frame.tick();
        assert_eq!(report.thermal, DebounceEvent::Triggered);
        assert!(frame.thermal().holding_hand());
        assert_eq!(report.transition, None);
        assert_eq!(frame.phase(), Phase::Sense);
    }

    #[test]
    fn test_full_reaction_cycle() {
        let mut frame = frame();
        frame.counter_mut().0 = 16_000; // 135 degrees
        send_all(&mut frame, 45);
        frame.tick();

        frame.motion_mut().bus_mut().0 = [20_000, 0, 16_384];
        let report = frame.tick();
        assert_eq!(report.motion, DebounceEvent::Triggered);
        assert!(frame.audio().0[AudioChannel::Motion as usize]);
        frame.motion_mut().bus_mut().0 = [0, 0, 16_384];

        let mut guard = 0;
        while frame.phase() != Phase::CooldownSense {
            frame.tick();
            guard += 1;
            assert!(guard < 500);
        }
        assert_eq!(frame.joints().actuator().0, [135; 3]);

        // Rest, then the motion sensor finishes its drift check. Both samples
        // read the same still toy, so the baseline stays.
        let mut recalibrated = None;
        while frame.phase() != Phase::Sense {
            let report = frame.tick();
            recalibrated = recalibrated.or(report.recalibration);
        }
        while frame.motion().phase() != SensorPhase::Idle {
            let report = frame.tick();
            recalibrated = recalibrated.or(report.recalibration);
        }
        assert_eq!(recalibrated, Some(Recalibration::Rejected { drift: 0 }));
        assert_eq!(frame.motion().baseline(), [0, 0, 16_384]);
    }
}
