//! Audio trigger trait

/// Sound board trigger lines, one clip per stimulus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioChannel {
    Motion,
    Touch,
    Temperature,
}

impl AudioChannel {
    pub const ALL: [AudioChannel; 3] = [
        AudioChannel::Motion,
        AudioChannel::Touch,
        AudioChannel::Temperature,
    ];
}

/// Trigger outputs of the sound board
pub trait AudioTrigger {
    /// Start the clip on a channel
    fn enable(&mut self, channel: AudioChannel);

    /// Release a channel
    fn disable(&mut self, channel: AudioChannel);

    /// Release every channel
    fn disable_all(&mut self) {
        for channel in AudioChannel::ALL {
            self.disable(channel);
        }
    }
}
