// Shared tuning constants used by the mapper and the frontends.

// Impact mapper defaults (tuned for a tennis-ball-sized bouncer)
pub const DEFAULT_MIN_IMPACT_VELOCITY: f32 = 0.5; // below this no sound plays
pub const DEFAULT_MAX_IMPACT_VELOCITY: f32 = 10.0; // loudness/pitch saturate here
pub const DEFAULT_BASE_VOLUME: f32 = 0.7; // floor volume for any triggered sound
pub const DEFAULT_VOLUME_SCALE_FACTOR: f32 = 0.1; // extra loudness at saturation
pub const DEFAULT_PITCH_SCALE_FACTOR: f32 = 0.05; // extra pitch at saturation
pub const DEFAULT_RANDOM_PITCH_VARIATION: f32 = 0.1; // half-width of pitch jitter

// Playback pitch is kept inside a band that still sounds like the same clip
pub const MIN_PITCH: f32 = 0.5;
pub const MAX_PITCH: f32 = 2.0;

// Master volume at or below this counts as muted
pub const MUTE_THRESHOLD: f32 = 0.001;

// Clock hand angular rates (degrees per unit)
pub const SECOND_HAND_DEG: f32 = 6.0; // 360 / 60 seconds
pub const MINUTE_HAND_DEG: f32 = 6.0; // 360 / 60 minutes
pub const HOUR_HAND_DEG: f32 = 30.0; // 360 / 12 hours
