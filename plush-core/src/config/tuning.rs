//! Tuning constants and the config structs built from them
//!
//! Durations are expressed in frames of the fixed-rate tick (see
//! [`TICK_RATE_HZ`]), so 60 ticks are one second.

/// Frame rate every tick function is driven at
pub const TICK_RATE_HZ: u32 = 60;

/// Period of one frame in microseconds
pub const TICK_PERIOD_US: u64 = 1_000_000 / TICK_RATE_HZ as u64;

/// Magnitude (raw accelerometer LSB, uncalibrated) above which the toy
/// counts as shaken. Roughly 1.5 g at the ±2 g full scale.
pub const MOTION_THRESHOLD: u32 = 24_576;

/// Raw thermal reading below which a warm hand is assumed to be holding
/// the toy (the reading falls as temperature rises)
pub const WARM_HAND_RAW_THRESHOLD: u16 = 1_900;

/// Drift recalibration applied after a debounced trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RecalibrationConfig {
    /// Ticks between the reference sample and the drift sample
    pub settle_ticks: u16,
    /// Largest magnitude change (exclusive) still treated as "at rest"
    pub drift_window: u32,
}

/// Debounce parameters for one sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Ticks the trigger is ignored after it fired
    pub cooldown_ticks: u16,
    /// Optional drift check run once the cooldown expires
    pub recalibration: Option<RecalibrationConfig>,
}

impl DebounceConfig {
    /// Plain cooldown without recalibration
    pub const fn cooldown(ticks: u16) -> Self {
        Self {
            cooldown_ticks: ticks,
            recalibration: None,
        }
    }

    /// Total ticks the sensor stays deaf after a trigger
    pub const fn deaf_ticks(&self) -> u32 {
        let settle = match self.recalibration {
            Some(r) => r.settle_ticks as u32,
            None => 0,
        };
        self.cooldown_ticks as u32 + settle
    }
}

/// Touch pad: ~2.7 s cooldown
pub const TOUCH_DEBOUNCE: DebounceConfig = DebounceConfig::cooldown(160);

/// Thermal sensor: ~2.7 s cooldown
pub const THERMAL_DEBOUNCE: DebounceConfig = DebounceConfig::cooldown(160);

/// Accelerometer: 5 s cooldown, then a 2 s drift check
pub const MOTION_DEBOUNCE: DebounceConfig = DebounceConfig {
    cooldown_ticks: 300,
    recalibration: Some(RecalibrationConfig {
        settle_ticks: 120,
        drift_window: 200,
    }),
};

/// Mechanical limits shared by all three joints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointConfig {
    /// Lowest reachable angle (degrees)
    pub min_angle: i16,
    /// Highest reachable angle (degrees)
    pub max_angle: i16,
    /// Largest change per tick (degrees)
    pub max_step: i16,
    /// Rest pose (degrees)
    pub home_angle: i16,
}

impl JointConfig {
    /// Clamp an angle into the reachable range
    pub const fn clamp(&self, angle: i16) -> i16 {
        if angle < self.min_angle {
            self.min_angle
        } else if angle > self.max_angle {
            self.max_angle
        } else {
            angle
        }
    }
}

/// Limits the plush's stuffing tolerates without straining the seams
pub const JOINT: JointConfig = JointConfig {
    min_angle: 45,
    max_angle: 135,
    max_step: 4,
    home_angle: 90,
};

/// Number of poses the target picker chooses between
pub const POSE_COUNT: usize = 5;

/// Top controller timing and pose selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Ticks the audio trigger is held before it is released
    pub audio_ticks: u16,
    /// Move commands issued per reaction
    pub moves_per_cycle: u8,
    /// Ticks the controller ignores sensors after a reaction
    pub rest_ticks: u16,
    /// Poses a joint can be sent to, lowest bucket first
    pub target_angles: [i16; POSE_COUNT],
    /// Wrap value of the free-running counter
    pub counter_period: u32,
    /// Counter span mapped to one pose bucket
    pub bucket_width: u32,
}

impl ControllerConfig {
    /// Map a raw counter value onto one of the poses
    ///
    /// Buckets past the last pose (possible when the period is not an exact
    /// multiple of the width) fall into the last pose.
    pub fn pose_for(&self, counter: u32) -> i16 {
        let bucket = (counter % self.counter_period) / self.bucket_width;
        let index = (bucket as usize).min(POSE_COUNT - 1);
        self.target_angles[index]
    }
}

/// Reaction timing: ~0.1 s sound pulse, six moves, ~2.7 s rest
pub const CONTROLLER: ControllerConfig = ControllerConfig {
    audio_ticks: 7,
    moves_per_cycle: 6,
    rest_ticks: 160,
    target_angles: [45, 70, 90, 110, 135],
    counter_period: 20_000,
    bucket_width: 4_000,
};
