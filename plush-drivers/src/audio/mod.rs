//! Sound board trigger lines
//!
//! Each clip on the sound module plays while its trigger input is held low.
//! All lines are driven high (silent) on construction.

use embedded_hal::digital::OutputPin;
use plush_core::traits::{AudioChannel, AudioTrigger};

/// Three active-low trigger outputs, indexed by [`AudioChannel`]
pub struct SoundBoard<P> {
    pins: [P; 3],
    playing: [bool; 3],
}

impl<P: OutputPin> SoundBoard<P> {
    /// Pins in motion, touch, temperature order
    pub fn new(pins: [P; 3]) -> Self {
        let mut board = Self {
            pins,
            playing: [true; 3],
        };
        board.disable_all();
        board
    }

    /// A trigger line is currently held low
    pub fn is_playing(&self, channel: AudioChannel) -> bool {
        self.playing[channel as usize]
    }

    pub fn release(self) -> [P; 3] {
        self.pins
    }
}

impl<P: OutputPin> AudioTrigger for SoundBoard<P> {
    fn enable(&mut self, channel: AudioChannel) {
        let index = channel as usize;
        // Output errors leave the clip silent
        self.playing[index] = self.pins[index].set_low().is_ok();
    }

    fn disable(&mut self, channel: AudioChannel) {
        let index = channel as usize;
        let _ = self.pins[index].set_high();
        self.playing[index] = false;
    }
}
