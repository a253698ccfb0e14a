//! Touch pad sensor

use super::debounce::{DebounceEvent, Debouncer, SensorPhase};
use crate::config::{DebounceConfig, TOUCH_DEBOUNCE};
use crate::traits::TouchPin;

/// Debounced touch pad
pub struct TouchSensor<P> {
    pin: P,
    debouncer: Debouncer,
}

impl<P: TouchPin> TouchSensor<P> {
    /// Touch pad with the default ~2.7 s cooldown
    pub fn new(pin: P) -> Self {
        Self::with_config(pin, TOUCH_DEBOUNCE)
    }

    pub fn with_config(pin: P, config: DebounceConfig) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(config),
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) -> DebounceEvent {
        let pin = &mut self.pin;
        self.debouncer.tick(|| pin.is_pressed())
    }

    /// Pressed, reported once per press
    pub fn is_active(&self) -> bool {
        self.debouncer.is_active()
    }

    pub fn phase(&self) -> SensorPhase {
        self.debouncer.phase()
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}
