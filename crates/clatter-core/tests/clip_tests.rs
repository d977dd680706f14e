// Tests for the shared clip buffer.

use clatter_core::{ClipError, SoundClip};

#[test]
fn construction_rejects_degenerate_buffers() {
    assert!(matches!(
        SoundClip::from_samples(Vec::new(), 48_000),
        Err(ClipError::Empty)
    ));
    assert!(matches!(
        SoundClip::from_samples(vec![0.0; 16], 0),
        Err(ClipError::ZeroSampleRate)
    ));
}

#[test]
fn clones_share_the_same_sample_data() {
    let clip = SoundClip::from_samples(vec![0.25; 1000], 44_100).unwrap();
    let copy = clip.clone();
    assert_eq!(clip.len(), copy.len());
    assert!(std::ptr::eq(clip.samples().as_ptr(), copy.samples().as_ptr()));
}

#[test]
fn duration_follows_the_sample_rate() {
    let clip = SoundClip::from_samples(vec![0.0; 44_100], 44_100).unwrap();
    assert!((clip.duration_sec() - 1.0).abs() < 1e-6);
    let clip = SoundClip::from_samples(vec![0.0; 24_000], 48_000).unwrap();
    assert!((clip.duration_sec() - 0.5).abs() < 1e-6);
}
