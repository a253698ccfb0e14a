//! Touch button on a GPIO input
//!
//! The pad pulls the pin to ground when pressed, so the input is read
//! active-low by default. A pin read error counts as "not pressed".

use embedded_hal::digital::InputPin;
use plush_core::traits::TouchPin;

pub struct Button<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> Button<P> {
    /// # Arguments
    /// - `pin`: input with a pull resistor toward the released level
    /// - `active_low`: if true, the button reads pressed when the pin is LOW
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button to ground with the internal pull-up enabled
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }
}

impl<P: InputPin> TouchPin for Button<P> {
    fn is_pressed(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high != self.active_low,
            Err(_) => false,
        }
    }
}
