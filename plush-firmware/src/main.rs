//! Animatronic plush firmware
//!
//! Main firmware binary for the RP2040 board inside the plush. Sets up the
//! peripherals, wraps them in the drivers, and hands everything to a single
//! frame task.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use plush_core::{Frame, Peripherals};
use plush_drivers::sensor::mpu6050::registers::WHO_AM_I_VALUE;
use plush_drivers::{Button, Mpu6050, ServoBank, SoundBoard, Thermistor};

use crate::board::{
    PlushBoard, RpAdc, UptimeCounter, I2C_FREQUENCY_HZ, SERVO_PWM_DIVIDER, SERVO_PWM_TOP,
};

mod board;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Plush firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Sound board first so no clip plays while the rest comes up
    let audio = SoundBoard::new([
        Output::new(p.PIN_16, Level::High),
        Output::new(p.PIN_17, Level::High),
        Output::new(p.PIN_18, Level::High),
    ]);

    // Accelerometer on I2C0
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_9, p.PIN_8, i2c_config);

    let mut imu = Mpu6050::new(i2c);
    match imu.who_am_i() {
        Ok(WHO_AM_I_VALUE) => info!("MPU-6050 detected"),
        Ok(other) => warn!("Unexpected WHO_AM_I: {:#x}", other),
        Err(e) => warn!("MPU-6050 not responding: {}", Debug2Format(&e)),
    }
    if let Err(e) = imu.init() {
        warn!("MPU-6050 init failed: {}", Debug2Format(&e));
    }
    // Let the first conversion land before the baseline is taken
    Timer::after_millis(100).await;

    let touch = Button::new_active_low(Input::new(p.PIN_15, Pull::Up));

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let thermistor = Thermistor::new(RpAdc::new(adc, Channel::new_pin(p.PIN_26, Pull::None)));

    // Servos: one slice per joint, channel A
    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = SERVO_PWM_DIVIDER.into();
    pwm_config.top = SERVO_PWM_TOP;

    let left = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, pwm_config.clone());
    let right = Pwm::new_output_a(p.PWM_SLICE6, p.PIN_12, pwm_config.clone());
    let spine = Pwm::new_output_a(p.PWM_SLICE7, p.PIN_14, pwm_config);
    let servos = ServoBank::new([
        unwrap!(left.split().0),
        unwrap!(right.split().0),
        unwrap!(spine.split().0),
    ]);
    info!("Servos at home pose");

    let frame: Frame<PlushBoard> = Frame::new(Peripherals {
        touch,
        thermal: thermistor,
        motion: imu,
        servos,
        audio,
        counter: UptimeCounter,
    });
    info!("Motion baseline: {}", frame.motion().baseline());

    spawner.spawn(tasks::tick_task(frame)).unwrap();

    info!("All tasks spawned");
}
