use glam::Vec3;
use rand::prelude::*;

use crate::clip::SoundClip;
use crate::constants::{
    DEFAULT_BASE_VOLUME, DEFAULT_MAX_IMPACT_VELOCITY, DEFAULT_MIN_IMPACT_VELOCITY,
    DEFAULT_PITCH_SCALE_FACTOR, DEFAULT_RANDOM_PITCH_VARIATION, DEFAULT_VOLUME_SCALE_FACTOR,
    MAX_PITCH, MIN_PITCH,
};

/// Tuning for how hard an impact must be to make a sound and how loudness
/// and pitch scale between the two velocity thresholds. Values are taken as
/// given; out-of-range settings are tolerated and the derived outputs are
/// clamped instead.
#[derive(Clone, Debug)]
pub struct MapperParams {
    pub min_impact_velocity: f32,
    pub max_impact_velocity: f32,
    pub base_volume: f32,
    pub volume_scale_factor: f32,
    pub pitch_scale_factor: f32,
    pub random_pitch_variation: f32,
}

impl Default for MapperParams {
    fn default() -> Self {
        Self {
            min_impact_velocity: DEFAULT_MIN_IMPACT_VELOCITY,
            max_impact_velocity: DEFAULT_MAX_IMPACT_VELOCITY,
            base_volume: DEFAULT_BASE_VOLUME,
            volume_scale_factor: DEFAULT_VOLUME_SCALE_FACTOR,
            pitch_scale_factor: DEFAULT_PITCH_SCALE_FACTOR,
            random_pitch_variation: DEFAULT_RANDOM_PITCH_VARIATION,
        }
    }
}

/// Instruction to an audio sink: start one independent, overlappable
/// playback instance of `clip`. Volume is in [0, 1], pitch is a playback
/// rate multiplier in [0.5, 2.0].
#[derive(Clone, Debug)]
pub struct PlaybackRequest {
    pub clip: SoundClip,
    pub volume: f32,
    pub pitch: f32,
}

/// Anything that can start a fire-and-forget playback instance. Requests
/// must overlap freely; starting one must not cut off a prior one.
pub trait AudioSink {
    fn play(&mut self, request: PlaybackRequest);
}

/// Maps collision impacts to playback parameters. Stateless across calls
/// apart from the jitter RNG; every impact is handled independently.
pub struct ImpactSoundMapper {
    pub params: MapperParams,
    clip: Option<SoundClip>,
    rng: StdRng,
}

impl ImpactSoundMapper {
    pub fn new(params: MapperParams, clip: Option<SoundClip>, seed: u64) -> Self {
        Self {
            params,
            clip,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn set_clip(&mut self, clip: SoundClip) {
        self.clip = Some(clip);
    }

    pub fn clip(&self) -> Option<&SoundClip> {
        self.clip.as_ref()
    }

    /// Derive playback parameters from a collision's relative velocity.
    ///
    /// Returns `None` when no clip is assigned (logged, never fatal) or when
    /// the impact is below the minimum velocity. Degenerate configuration
    /// (`max <= min`) still produces a request: normalization saturates to
    /// 1.0 at or above the minimum rather than dividing by zero.
    pub fn on_impact(&mut self, relative_velocity: Vec3) -> Option<PlaybackRequest> {
        let clip = match &self.clip {
            Some(c) => c.clone(),
            None => {
                log::warn!("[impact] no clip assigned; dropping collision event");
                return None;
            }
        };

        let impact_speed = relative_velocity.length();
        if impact_speed < self.params.min_impact_velocity {
            // Too soft to hear; not an error.
            return None;
        }

        let normalized = inverse_lerp(
            self.params.min_impact_velocity,
            self.params.max_impact_velocity,
            impact_speed,
        );

        let volume = (self.params.base_volume + normalized * self.params.volume_scale_factor)
            .clamp(0.0, 1.0);

        // Uniform jitter over [-v, +v]; scaling avoids an empty range when v == 0.
        let jitter = (self.rng.gen::<f32>() * 2.0 - 1.0) * self.params.random_pitch_variation;
        let pitch =
            (1.0 + normalized * self.params.pitch_scale_factor + jitter).clamp(MIN_PITCH, MAX_PITCH);

        Some(PlaybackRequest {
            clip,
            volume,
            pitch,
        })
    }

    /// Convenience wiring for hosts that hand the mapper a sink directly.
    /// Returns whether a playback instance was started.
    pub fn play_impact(&mut self, relative_velocity: Vec3, sink: &mut dyn AudioSink) -> bool {
        match self.on_impact(relative_velocity) {
            Some(request) => {
                sink.play(request);
                true
            }
            None => false,
        }
    }
}

/// Where `value` sits between `min` and `max`, clamped to [0, 1]. Values
/// outside the range saturate instead of extrapolating. A degenerate range
/// (`max <= min`) maps everything at or above `min` to 1.0 and everything
/// below to 0.0, so the result is never NaN.
#[inline]
pub fn inverse_lerp(min: f32, max: f32, value: f32) -> f32 {
    if max <= min {
        return if value >= min { 1.0 } else { 0.0 };
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}
