//! MPU-6050 (GY-521 breakout) accelerometer over I2C
//!
//! Only the accelerometer is used. Each axis is a big-endian `i16` in a
//! register pair starting at `ACCEL_XOUT_H`.
//!
//! A failed read returns the last good sample for that axis, so a flaky
//! bus looks like a toy sitting still rather than a shake.

use embedded_hal::i2c::I2c;
use plush_core::traits::{Axis, MotionSensorBus};

/// Register map subset
pub mod registers {
    /// I2C address with AD0 low
    pub const MPU6050_ADDR: u8 = 0x68;
    /// I2C address with AD0 high
    pub const MPU6050_ADDR_ALT: u8 = 0x69;

    pub const ACCEL_CONFIG: u8 = 0x1C;
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    pub const ACCEL_YOUT_H: u8 = 0x3D;
    pub const ACCEL_ZOUT_H: u8 = 0x3F;
    pub const PWR_MGMT_1: u8 = 0x6B;
    pub const WHO_AM_I: u8 = 0x75;

    /// ±2 g full scale, 16384 LSB/g
    pub const ACCEL_FS_2G: u8 = 0x00;
    /// Clear the sleep bit, internal oscillator
    pub const PWR_MGMT_1_WAKE: u8 = 0x00;
    pub const WHO_AM_I_VALUE: u8 = 0x68;
}

use registers::*;

/// Consecutive bus errors after which the sensor reports unhealthy
const MAX_CONSECUTIVE_ERRORS: u32 = 3;

pub struct Mpu6050<I2C> {
    i2c: I2C,
    address: u8,
    /// Last good sample per axis
    last: [i16; 3],
    error_count: u32,
}

impl<I2C: I2c> Mpu6050<I2C> {
    /// Sensor at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, MPU6050_ADDR)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            last: [0; 3],
            error_count: 0,
        }
    }

    /// Select ±2 g and take the chip out of sleep
    ///
    /// Must run before the first axis read; the chip powers up asleep.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.write(ACCEL_CONFIG, ACCEL_FS_2G)?;
        self.write(PWR_MGMT_1, PWR_MGMT_1_WAKE)
    }

    /// Read the identity register
    pub fn who_am_i(&mut self) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[WHO_AM_I], &mut buf)?;
        Ok(buf[0])
    }

    /// Read one axis register pair
    pub fn try_read_axis(&mut self, axis: Axis) -> Result<i16, I2C::Error> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[axis_register(axis)], &mut buf)?;
        Ok(i16::from_be_bytes(buf))
    }

    /// False after repeated bus errors; cleared by the next good transfer
    pub fn is_healthy(&self) -> bool {
        self.error_count < MAX_CONSECUTIVE_ERRORS
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write(&mut self, reg: u8, value: u8) -> Result<(), I2C::Error> {
        let result = self.i2c.write(self.address, &[reg, value]);
        self.record(result.is_ok());
        result
    }

    fn record(&mut self, ok: bool) {
        if ok {
            self.error_count = 0;
        } else {
            self.error_count = self.error_count.saturating_add(1);
        }
    }
}

impl<I2C: I2c> MotionSensorBus for Mpu6050<I2C> {
    fn read_axis(&mut self, axis: Axis) -> i16 {
        let index = axis as usize;
        match self.try_read_axis(axis) {
            Ok(value) => {
                self.record(true);
                self.last[index] = value;
                value
            }
            Err(_) => {
                self.record(false);
                self.last[index]
            }
        }
    }

    fn write_register(&mut self, addr: u8, value: u8) {
        // Failure is already counted in `error_count`
        let _ = self.write(addr, value);
    }
}

fn axis_register(axis: Axis) -> u8 {
    match axis {
        Axis::X => ACCEL_XOUT_H,
        Axis::Y => ACCEL_YOUT_H,
        Axis::Z => ACCEL_ZOUT_H,
    }
}
