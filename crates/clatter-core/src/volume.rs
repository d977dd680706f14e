//! Master volume policy.
//!
//! An explicit value object injected wherever a master gain is needed,
//! instead of process-global audio state. Muting captures the current
//! volume so unmuting restores exactly what the listener had before.

use crate::constants::MUTE_THRESHOLD;

#[derive(Clone, Debug)]
pub struct VolumePolicy {
    volume: f32,
    previous: f32,
}

impl Default for VolumePolicy {
    fn default() -> Self {
        Self {
            volume: 1.0,
            previous: 1.0,
        }
    }
}

impl VolumePolicy {
    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn is_muted(&self) -> bool {
        self.volume <= MUTE_THRESHOLD
    }

    /// Silence the master volume. The capture only happens while audible, so
    /// muting twice in a row keeps the original restore point.
    pub fn mute(&mut self) {
        if !self.is_muted() {
            self.previous = self.volume;
        }
        self.volume = 0.0;
        log::debug!("[volume] muted");
    }

    /// Restore the volume captured by the last [`mute`](Self::mute).
    pub fn unmute(&mut self) {
        self.volume = self.previous;
        log::debug!("[volume] unmuted, restored to {:.2}", self.volume);
    }

    pub fn set_muted(&mut self, muted: bool) {
        if muted {
            self.mute();
        } else {
            self.unmute();
        }
    }

    /// Apply the master gain to a per-request volume.
    pub fn apply(&self, request_volume: f32) -> f32 {
        (request_volume * self.volume).clamp(0.0, 1.0)
    }
}
