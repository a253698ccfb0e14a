//! Sensor traits

/// Accelerometer axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in register order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Register-level access to the motion sensor
pub trait MotionSensorBus {
    /// Read one axis as a signed raw sample
    fn read_axis(&mut self, axis: Axis) -> i16;

    /// Write a configuration register
    fn write_register(&mut self, addr: u8, value: u8);

    /// Read all three axes in X, Y, Z order
    fn read_axes(&mut self) -> [i16; 3] {
        Axis::ALL.map(|axis| self.read_axis(axis))
    }
}

/// Capacitive or mechanical touch input
pub trait TouchPin {
    /// True while the pad is pressed
    fn is_pressed(&mut self) -> bool;
}

/// Analog temperature sensor
pub trait ThermalSensor {
    /// Raw reading, inversely proportional to temperature
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_raw(&mut self) -> u16;
}
