// Tests for the analog clock hand arithmetic.

use clatter_core::{hand_angles, hand_angles_since_midnight, HandOffsets};

const NO_OFFSETS: HandOffsets = HandOffsets {
    hour_deg: 0.0,
    minute_deg: 0.0,
    second_deg: 0.0,
};

#[test]
fn midnight_points_every_hand_at_twelve() {
    let angles = hand_angles(0, 0, 0, 0, NO_OFFSETS);
    assert_eq!(angles.hour_deg, 0.0);
    assert_eq!(angles.minute_deg, 0.0);
    assert_eq!(angles.second_deg, 0.0);
}

#[test]
fn three_oclock_puts_the_hour_hand_at_ninety_degrees() {
    let angles = hand_angles(3, 0, 0, 0, NO_OFFSETS);
    assert!((angles.hour_deg - 90.0).abs() < 1e-4);
    assert_eq!(angles.minute_deg, 0.0);
    assert_eq!(angles.second_deg, 0.0);
}

#[test]
fn twenty_four_hour_input_folds_to_a_twelve_hour_face() {
    let afternoon = hand_angles(15, 20, 10, 0, NO_OFFSETS);
    let morning = hand_angles(3, 20, 10, 0, NO_OFFSETS);
    assert_eq!(afternoon.hour_deg, morning.hour_deg);
    assert_eq!(afternoon.minute_deg, morning.minute_deg);
}

#[test]
fn second_hand_sweeps_six_degrees_per_second() {
    let angles = hand_angles(0, 0, 15, 0, NO_OFFSETS);
    assert!((angles.second_deg - 90.0).abs() < 1e-4);

    // Milliseconds move the hand continuously, not in ticks
    let with_ms = hand_angles(0, 0, 15, 500, NO_OFFSETS);
    assert!((with_ms.second_deg - 93.0).abs() < 1e-4);
}

#[test]
fn minute_hand_creeps_with_seconds() {
    // 30:30 -> 30.5 minutes -> 183 degrees
    let angles = hand_angles(0, 30, 30, 0, NO_OFFSETS);
    assert!((angles.minute_deg - 183.0).abs() < 1e-4);
}

#[test]
fn hour_hand_creeps_with_minutes() {
    // 6:30 -> 6.5 hours -> 195 degrees
    let angles = hand_angles(6, 30, 0, 0, NO_OFFSETS);
    assert!((angles.hour_deg - 195.0).abs() < 1e-4);
}

#[test]
fn offsets_shift_each_hand_independently() {
    let offsets = HandOffsets {
        hour_deg: 10.0,
        minute_deg: -5.0,
        second_deg: 2.5,
    };
    let plain = hand_angles(9, 41, 20, 0, NO_OFFSETS);
    let shifted = hand_angles(9, 41, 20, 0, offsets);
    assert!((shifted.hour_deg - plain.hour_deg - 10.0).abs() < 1e-4);
    assert!((shifted.minute_deg - plain.minute_deg + 5.0).abs() < 1e-4);
    assert!((shifted.second_deg - plain.second_deg - 2.5).abs() < 1e-4);
}

#[test]
fn seconds_since_midnight_agrees_with_components() {
    // 01:01:01.500
    let from_seconds = hand_angles_since_midnight(3661.5, NO_OFFSETS);
    let from_components = hand_angles(1, 1, 1, 500, NO_OFFSETS);
    assert!((from_seconds.hour_deg - from_components.hour_deg).abs() < 1e-3);
    assert!((from_seconds.minute_deg - from_components.minute_deg).abs() < 1e-3);
    assert!((from_seconds.second_deg - from_components.second_deg).abs() < 1e-3);
}

#[test]
fn seconds_since_midnight_wraps_past_a_day() {
    let day_later = hand_angles_since_midnight(86_400.0 + 3600.0, NO_OFFSETS);
    let one_am = hand_angles_since_midnight(3600.0, NO_OFFSETS);
    assert!((day_later.hour_deg - one_am.hour_deg).abs() < 1e-3);
}

#[test]
fn hands_advance_monotonically_within_an_hour() {
    let mut prev_minute = -1.0_f32;
    let mut prev_hour = -1.0_f32;
    for minute in 0..60 {
        let angles = hand_angles(2, minute, 0, 0, NO_OFFSETS);
        assert!(
            angles.minute_deg > prev_minute,
            "minute hand stalled at minute {minute}"
        );
        assert!(
            angles.hour_deg > prev_hour,
            "hour hand stalled at minute {minute}"
        );
        prev_minute = angles.minute_deg;
        prev_hour = angles.hour_deg;
    }
}
