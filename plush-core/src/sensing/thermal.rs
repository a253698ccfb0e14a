//! Warm-hand detection
//!
//! The thermistor reading drops as it warms up, so a hand wrapped around the
//! toy's paw shows up as a reading below a fixed threshold.

use super::debounce::{DebounceEvent, Debouncer, SensorPhase};
use crate::config::{DebounceConfig, THERMAL_DEBOUNCE, WARM_HAND_RAW_THRESHOLD};
use crate::traits::ThermalSensor;

/// Debounced warm-hand trigger
pub struct ThermalTrigger<T> {
    sensor: T,
    threshold: u16,
    debouncer: Debouncer,
}

impl<T: ThermalSensor> ThermalTrigger<T> {
    pub fn new(sensor: T) -> Self {
        Self::with_config(sensor, THERMAL_DEBOUNCE, WARM_HAND_RAW_THRESHOLD)
    }

    /// # Arguments
    /// - `threshold`: raw readings strictly below this count as warm
    pub fn with_config(sensor: T, config: DebounceConfig, threshold: u16) -> Self {
        Self {
            sensor,
            threshold,
            debouncer: Debouncer::new(config),
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) -> DebounceEvent {
        let sensor = &mut self.sensor;
        let threshold = self.threshold;
        self.debouncer.tick(|| sensor.read_raw() < threshold)
    }

    pub fn is_active(&self) -> bool {
        self.debouncer.is_active()
    }

    /// A hand started warming the sensor this tick
    pub fn holding_hand(&self) -> bool {
        self.is_active()
    }

    pub fn phase(&self) -> SensorPhase {
        self.debouncer.phase()
    }

    pub fn sensor_mut(&mut self) -> &mut T {
        &mut self.sensor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockThermistor {
        raw: u16,
    }

    impl ThermalSensor for MockThermistor {
        fn read_raw(&mut self) -> u16 {
            self.raw
        }
    }

    #[test]
    fn test_cold_reading_does_not_trigger() {
        let mut thermal = ThermalTrigger::new(MockThermistor { raw: 3_000 });
        for _ in 0..10 {
            assert_eq!(thermal.tick(), DebounceEvent::None);
            assert!(!thermal.holding_hand());
        }
    }

    #[test]
    fn test_warm_reading_triggers_once() {
        let mut thermal = ThermalTrigger::new(MockThermistor { raw: 3_000 });
        thermal.tick();

        thermal.sensor_mut().raw = 1_200;
        assert_eq!(thermal.tick(), DebounceEvent::Triggered);
        assert!(thermal.holding_hand());

        thermal.tick();
        assert!(!thermal.holding_hand());
        assert_eq!(thermal.phase(), SensorPhase::Cooldown);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut thermal =
            ThermalTrigger::with_config(MockThermistor { raw: 500 }, THERMAL_DEBOUNCE, 500);
        assert_eq!(thermal.tick(), DebounceEvent::None);

        thermal.sensor_mut().raw = 499;
        assert_eq!(thermal.tick(), DebounceEvent::Triggered);
    }
}
