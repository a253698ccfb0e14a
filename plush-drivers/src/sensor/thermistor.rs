//! NTC thermistor on an ADC channel
//!
//! Circuit: VCC -- pullup -- ADC_PIN -- NTC -- GND
//!
//! The NTC's resistance falls as it warms, pulling the ADC reading down, so
//! the raw value is inversely proportional to temperature. The core only
//! compares raw readings against a threshold; no conversion to degrees is
//! needed.

use plush_core::traits::ThermalSensor;

/// Full-scale reading of a 12-bit ADC
pub const ADC_MAX_12BIT: u16 = 4095;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Thermistor read as a raw ADC value
pub struct Thermistor<ADC> {
    adc: ADC,
    /// Returned when the ADC read fails: the coldest possible reading, so a
    /// fault never looks like a warm hand
    fallback: u16,
}

impl<ADC: AdcReader> Thermistor<ADC> {
    /// Thermistor on a 12-bit ADC
    pub fn new(adc: ADC) -> Self {
        Self::with_full_scale(adc, ADC_MAX_12BIT)
    }

    pub fn with_full_scale(adc: ADC, full_scale: u16) -> Self {
        Self {
            adc,
            fallback: full_scale,
        }
    }

    /// Raw reading, or the error from the ADC
    #[allow(clippy::result_unit_err)]
    pub fn try_read(&mut self) -> Result<u16, ()> {
        self.adc.read()
    }
}

impl<ADC: AdcReader> ThermalSensor for Thermistor<ADC> {
    fn read_raw(&mut self) -> u16 {
        self.adc.read().unwrap_or(self.fallback)
    }
}
