//! RP2040 wiring of the plush
//!
//! | Function          | Pins                    |
//! |-------------------|-------------------------|
//! | MPU-6050 (I2C0)   | SDA GPIO8, SCL GPIO9    |
//! | Touch button      | GPIO15 (pull-up)        |
//! | Thermistor (ADC0) | GPIO26                  |
//! | Servos (PWM A)    | GPIO10, GPIO12, GPIO14  |
//! | Sound triggers    | GPIO16, GPIO17, GPIO18  |

use embassy_rp::adc::{Adc, Blocking as AdcBlocking, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::pwm::PwmOutput;
use embassy_time::Instant;

use plush_core::traits::FreeRunningCounter;
use plush_core::Board;
use plush_drivers::{AdcReader, Button, Mpu6050, ServoBank, SoundBoard, Thermistor};

/// Servo PWM: 125 MHz / 125 = 1 MHz count, so one count is one microsecond
pub const SERVO_PWM_DIVIDER: u8 = 125;

/// Servo PWM wrap value: 20 ms period (50 Hz)
pub const SERVO_PWM_TOP: u16 = 20_000;

/// I2C clock for the accelerometer
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

pub struct PlushBoard;

impl Board for PlushBoard {
    type Touch = Button<Input<'static>>;
    type Thermal = Thermistor<RpAdc>;
    type Motion = Mpu6050<I2c<'static, I2C0, Blocking>>;
    type Servos = ServoBank<PwmOutput<'static>>;
    type Audio = SoundBoard<Output<'static>>;
    type Counter = UptimeCounter;
}

/// Blocking one-shot reads of a single ADC channel
pub struct RpAdc {
    adc: Adc<'static, AdcBlocking>,
    channel: Channel<'static>,
}

impl RpAdc {
    pub fn new(adc: Adc<'static, AdcBlocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for RpAdc {
    fn read(&mut self) -> Result<u16, ()> {
        self.adc.blocking_read(&mut self.channel).map_err(|_| ())
    }
}

/// Microsecond uptime, truncated to 32 bits
///
/// The frame samples it at a point unrelated to the 16.6 ms tick, so the
/// low digits are effectively random.
pub struct UptimeCounter;

impl FreeRunningCounter for UptimeCounter {
    fn read(&mut self) -> u32 {
        Instant::now().as_micros() as u32
    }
}
