//! Analog clock hand angles from wall-clock time.
//!
//! Pure arithmetic: the caller supplies the time (or seconds since
//! midnight) and gets back degrees for each hand. Angles grow clockwise and
//! are not wrapped to [0, 360); a rotation consumer wraps implicitly.

use crate::constants::{HOUR_HAND_DEG, MINUTE_HAND_DEG, SECOND_HAND_DEG};

/// Per-hand rotation offsets in degrees, for clock faces whose hands do not
/// rest at 12 o'clock in their neutral orientation.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandOffsets {
    pub hour_deg: f32,
    pub minute_deg: f32,
    pub second_deg: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAngles {
    pub hour_deg: f32,
    pub minute_deg: f32,
    pub second_deg: f32,
}

/// Hand angles for the given time of day. The hour folds to a 12-hour face,
/// and each hand advances continuously with its sub-units (the minute hand
/// creeps with seconds, the hour hand with minutes).
pub fn hand_angles(
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
    offsets: HandOffsets,
) -> HandAngles {
    let seconds = second as f32 + millisecond as f32 / 1000.0;
    let second_deg = seconds * SECOND_HAND_DEG + offsets.second_deg;

    let minutes = minute as f32 + seconds / 60.0;
    let minute_deg = minutes * MINUTE_HAND_DEG + offsets.minute_deg;

    let hours = (hour % 12) as f32 + minutes / 60.0;
    let hour_deg = hours * HOUR_HAND_DEG + offsets.hour_deg;

    HandAngles {
        hour_deg,
        minute_deg,
        second_deg,
    }
}

/// Same as [`hand_angles`] but from a seconds-since-midnight value, which is
/// what hosts without a calendar type usually have at hand.
pub fn hand_angles_since_midnight(seconds: f64, offsets: HandOffsets) -> HandAngles {
    let seconds = seconds.rem_euclid(86_400.0);
    let hour = (seconds / 3600.0) as u32;
    let minute = ((seconds / 60.0) as u32) % 60;
    let whole_seconds = (seconds as u32) % 60;
    let millisecond = ((seconds.fract()) * 1000.0) as u32;
    hand_angles(hour, minute, whole_seconds, millisecond, offsets)
}
