//! Entropy source for pose selection

/// A hardware counter that keeps running independent of the tick
///
/// Sampled at an arbitrary point in the frame its value is unpredictable
/// enough to pick a pose.
pub trait FreeRunningCounter {
    fn read(&mut self) -> u32;
}
