//! Shake detection with drift recalibration
//!
//! The accelerometer magnitude is compared against a fixed threshold. After
//! every trigger the sensor sits out a cooldown, then checks whether the toy
//! has come to rest: two magnitude samples taken a couple of seconds apart
//! that differ by a nonzero amount below the drift window mean the current
//! axis readings are a fair rest pose, and they become the new calibration
//! baseline.
//!
//! The magnitude is taken from the raw axes, not baseline-corrected ones.

use super::debounce::{DebounceEvent, Debouncer, SensorPhase};
use crate::config::{DebounceConfig, MOTION_DEBOUNCE, MOTION_THRESHOLD};
use crate::math::magnitude;
use crate::traits::MotionSensorBus;

/// Outcome of the last drift check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Recalibration {
    /// Drift inside the window; baseline refreshed
    Applied { drift: u32 },
    /// Still moving; baseline kept
    Rejected { drift: u32 },
}

/// Debounced shake sensor
pub struct MotionSensor<B> {
    bus: B,
    threshold: u32,
    debouncer: Debouncer,
    /// Rest-pose reading per axis
    baseline: [i16; 3],
    /// First drift sample
    reference: u32,
    last_recalibration: Option<Recalibration>,
}

impl<B: MotionSensorBus> MotionSensor<B> {
    /// Wrap an initialized sensor and take the initial baseline
    ///
    /// The toy should be at rest when this runs; a bad baseline is corrected
    /// by the first successful drift check.
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, MOTION_DEBOUNCE, MOTION_THRESHOLD)
    }

    /// # Arguments
    /// - `threshold`: magnitudes strictly above this count as a shake
    pub fn with_config(bus: B, config: DebounceConfig, threshold: u32) -> Self {
        let mut sensor = Self {
            bus,
            threshold,
            debouncer: Debouncer::new(config),
            baseline: [0; 3],
            reference: 0,
            last_recalibration: None,
        };
        sensor.calibrate();
        sensor
    }

    /// Advance one frame
    pub fn tick(&mut self) -> DebounceEvent {
        let bus = &mut self.bus;
        let threshold = self.threshold;
        let event = self.debouncer.tick(|| read_magnitude(bus) > threshold);

        match event {
            DebounceEvent::CaptureReference => {
                self.reference = self.magnitude();
            }
            DebounceEvent::CheckDrift => {
                let drift = self.reference.abs_diff(self.magnitude());
                let window = self
                    .debouncer
                    .config()
                    .recalibration
                    .map_or(0, |r| r.drift_window);

                // Zero drift never re-baselines
                let outcome = if drift != 0 && drift < window {
                    self.calibrate();
                    Recalibration::Applied { drift }
                } else {
                    Recalibration::Rejected { drift }
                };
                self.last_recalibration = Some(outcome);
            }
            _ => {}
        }

        event
    }

    /// Shaken, reported once per shake
    pub fn is_active(&self) -> bool {
        self.debouncer.is_active()
    }

    pub fn phase(&self) -> SensorPhase {
        self.debouncer.phase()
    }

    /// Current magnitude of the raw axes
    pub fn magnitude(&mut self) -> u32 {
        read_magnitude(&mut self.bus)
    }

    /// Current axis readings with the rest pose subtracted
    pub fn calibrated_axes(&mut self) -> [i16; 3] {
        let raw = self.bus.read_axes();
        let mut out = [0i16; 3];
        for (i, value) in out.iter_mut().enumerate() {
            *value = raw[i].saturating_sub(self.baseline[i]);
        }
        out
    }

    /// Rest pose in use
    pub fn baseline(&self) -> [i16; 3] {
        self.baseline
    }

    pub fn last_recalibration(&self) -> Option<Recalibration> {
        self.last_recalibration
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Take the current readings as the rest pose
    fn calibrate(&mut self) {
        self.baseline = self.bus.read_axes();
    }
}

fn read_magnitude<B: MotionSensorBus>(bus: &mut B) -> u32 {
    let [x, y, z] = bus.read_axes();
    magnitude(x, y, z)
}
