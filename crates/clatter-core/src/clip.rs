use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipError {
    #[error("clip has no samples")]
    Empty,
    #[error("clip sample rate must be non-zero")]
    ZeroSampleRate,
}

/// Shared, immutable mono PCM buffer. Cloning is cheap (the sample data is
/// behind an `Arc`), so every playback instance can carry its own handle.
#[derive(Clone, Debug)]
pub struct SoundClip {
    samples: Arc<[f32]>,
    sample_rate: u32,
}

impl SoundClip {
    pub fn from_samples(samples: Vec<f32>, sample_rate: u32) -> Result<Self, ClipError> {
        if samples.is_empty() {
            return Err(ClipError::Empty);
        }
        if sample_rate == 0 {
            return Err(ClipError::ZeroSampleRate);
        }
        Ok(Self {
            samples: samples.into(),
            sample_rate,
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction rejects empty buffers, so this is always false.
        self.samples.is_empty()
    }

    pub fn duration_sec(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}
