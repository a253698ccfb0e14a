//! Sensor drivers

pub mod button;
pub mod mpu6050;
pub mod thermistor;

pub use button::Button;
pub use mpu6050::Mpu6050;
pub use thermistor::{AdcReader, Thermistor};
