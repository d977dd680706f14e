use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clatter_core::{
    hand_angles_since_midnight, AudioSink, HandOffsets, ImpactSoundMapper, MapperParams,
    PlaybackRequest, SoundClip, VolumePolicy,
};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use glam::Vec3;
use rand::prelude::*;

/// One playing instance of a clip. The cursor is fractional so pitch acts as
/// a playback-rate multiplier through linear-interpolation resampling.
struct ActiveVoice {
    clip: SoundClip,
    cursor: f32,
    step: f32,
    gain: f32,
}

struct AudioState {
    sample_rate: f32,
    voices: Vec<ActiveVoice>,
}

/// Audio sink backed by the shared mixer state. Every request becomes its
/// own voice, so overlapping impacts never cut each other off. The injected
/// volume policy is applied as the master gain at enqueue time.
struct MixerSink {
    state: Arc<Mutex<AudioState>>,
    policy: VolumePolicy,
}

impl AudioSink for MixerSink {
    fn play(&mut self, request: PlaybackRequest) {
        let mut guard = self.state.lock().unwrap();
        let step = request.pitch * request.clip.sample_rate() as f32 / guard.sample_rate;
        let gain = self.policy.apply(request.volume);
        guard.voices.push(ActiveVoice {
            clip: request.clip,
            cursor: 0.0,
            step,
            gain,
        });
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let _stream = start_audio_engine()
        .ok_or_else(|| anyhow::anyhow!("no usable audio output device"))?;

    // Let the scripted driver run its full sequence, then exit.
    thread::sleep(Duration::from_secs(8));
    log::info!("audition finished");
    Ok(())
}

fn start_audio_engine() -> Option<cpal::Stream> {
    let host = cpal::default_host();
    let device = host.default_output_device()?;
    let config = device.default_output_config().ok()?;
    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;

    let state = Arc::new(Mutex::new(AudioState {
        sample_rate,
        voices: Vec::new(),
    }));

    // Driver thread feeding the mapper with scripted collision events
    {
        let state_clone = Arc::clone(&state);
        thread::Builder::new()
            .name("impact-driver".into())
            .spawn(move || run_impact_script(state_clone))
            .ok()?;
    }

    let err_fn = |err| eprintln!("audio stream error: {err}");

    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => {
            build_stream_f32(&device, &config.into(), channels, Arc::clone(&state), err_fn).ok()?
        }
        cpal::SampleFormat::I16 => {
            build_stream_i16(&device, &config.into(), channels, Arc::clone(&state), err_fn).ok()?
        }
        cpal::SampleFormat::U16 => {
            build_stream_u16(&device, &config.into(), channels, Arc::clone(&state), err_fn).ok()?
        }
        _ => return None,
    };

    stream.play().ok()?;
    Some(stream)
}

fn run_impact_script(state: Arc<Mutex<AudioState>>) {
    let sample_rate = state.lock().unwrap().sample_rate as u32;
    let clip = match synth_bounce_clip(sample_rate) {
        Ok(c) => c,
        Err(e) => {
            log::error!("clip synthesis failed: {e}");
            return;
        }
    };
    let mut mapper = ImpactSoundMapper::new(MapperParams::default(), Some(clip), 42);
    let mut sink = MixerSink {
        state,
        policy: VolumePolicy::default(),
    };

    // Same wall clock the scene's analog clock would read
    let since_midnight = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() % 86_400.0)
        .unwrap_or(0.0);
    let hands = hand_angles_since_midnight(since_midnight, HandOffsets::default());
    log::info!(
        "[clock] hour {:.1}°, minute {:.1}°, second {:.1}°",
        hands.hour_deg,
        hands.minute_deg,
        hands.second_deg
    );

    // Scripted impacts: only the velocity magnitude matters. The soft ones
    // stay silent, the hard ones saturate, and the burst overlaps.
    let script: &[(u64, Vec3)] = &[
        (300, Vec3::new(0.3, 0.0, 0.0)),   // below threshold, skipped
        (400, Vec3::new(0.8, 0.0, 0.0)),   // barely audible
        (500, Vec3::new(1.5, -2.0, 0.0)),  // |v| = 2.5
        (500, Vec3::new(0.0, -5.25, 0.0)), // halfway between the thresholds
        (600, Vec3::new(7.0, 7.0, 1.0)),   // near saturation
        (600, Vec3::new(0.0, -13.7, 0.0)), // beyond max, no louder than max
        (500, Vec3::new(3.0, 0.0, 0.0)),   // rapid burst: three overlapping
        (60, Vec3::new(3.5, 0.0, 0.0)),
        (60, Vec3::new(4.0, 0.0, 0.0)),
    ];
    for &(delay_ms, velocity) in script {
        thread::sleep(Duration::from_millis(delay_ms));
        let speed = velocity.length();
        if mapper.play_impact(velocity, &mut sink) {
            log::info!("[impact] speed {speed:.2} -> playing");
        } else {
            log::info!("[impact] speed {speed:.2} -> skipped");
        }
    }

    // Mute demo: impacts while muted still run the mapper, the master gain
    // just zeroes them out.
    thread::sleep(Duration::from_millis(600));
    sink.policy.mute();
    log::info!("[volume] muted");
    mapper.play_impact(Vec3::new(6.0, 0.0, 0.0), &mut sink);
    thread::sleep(Duration::from_millis(500));
    sink.policy.unmute();
    log::info!("[volume] unmuted, master {:.2}", sink.policy.volume());
    mapper.play_impact(Vec3::new(6.0, 0.0, 0.0), &mut sink);
}

/// Synthesize a short bounce clip: a damped sine thump with a noise click on
/// the contact. Deterministic so repeated runs sound the same.
fn synth_bounce_clip(sample_rate: u32) -> anyhow::Result<SoundClip> {
    let len = (sample_rate as f32 * 0.25) as usize;
    let mut rng = StdRng::seed_from_u64(0xB0_07CE);
    let mut samples = Vec::with_capacity(len);
    let dt = 1.0_f32 / sample_rate as f32;
    let mut t = 0.0_f32;
    for _ in 0..len {
        let body = (2.0 * std::f32::consts::PI * 170.0 * t).sin() * (-t / 0.045).exp();
        let click = (rng.gen::<f32>() * 2.0 - 1.0) * (-t / 0.004).exp() * 0.4;
        samples.push((body * 0.8 + click).clamp(-1.0, 1.0));
        t += dt;
    }
    Ok(SoundClip::from_samples(samples, sample_rate)?)
}

fn mix_sample(voices: &mut Vec<ActiveVoice>) -> f32 {
    let mut mixed = 0.0_f32;
    let mut i = 0usize;
    while i < voices.len() {
        let voice = &mut voices[i];
        let samples = voice.clip.samples();
        let idx = voice.cursor as usize;
        if idx + 1 >= samples.len() {
            voices.swap_remove(i);
            continue;
        }
        let frac = voice.cursor - idx as f32;
        let interpolated = samples[idx] + (samples[idx + 1] - samples[idx]) * frac;
        mixed += interpolated * voice.gain;
        voice.cursor += voice.step;
        i += 1;
    }
    // Soft limit so stacked impacts cannot clip the output
    mixed.tanh()
}

fn build_stream_f32(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    state: Arc<Mutex<AudioState>>,
    err_fn: impl Fn(cpal::StreamError) + Send + 'static,
) -> Result<cpal::Stream, cpal::BuildStreamError> {
    device.build_output_stream(
        config,
        move |data: &mut [f32], _| {
            let mut guard = state.lock().unwrap();
            let voices = &mut guard.voices;
            let mut frame = 0usize;
            while frame < data.len() {
                let v = mix_sample(voices);
                for ch in 0..channels {
                    if frame + ch < data.len() {
                        data[frame + ch] = v;
                    }
                }
                frame += channels;
            }
        },
        err_fn,
        None,
    )
}

fn build_stream_i16(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    state: Arc<Mutex<AudioState>>,
    err_fn: impl Fn(cpal::StreamError) + Send + 'static,
) -> Result<cpal::Stream, cpal::BuildStreamError> {
    device.build_output_stream(
        config,
        move |data: &mut [i16], _| {
            let mut guard = state.lock().unwrap();
            let voices = &mut guard.voices;
            let mut frame = 0usize;
            while frame < data.len() {
                let v = (mix_sample(voices) * i16::MAX as f32) as i16;
                for ch in 0..channels {
                    if frame + ch < data.len() {
                        data[frame + ch] = v;
                    }
                }
                frame += channels;
            }
        },
        err_fn,
        None,
    )
}

fn build_stream_u16(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    state: Arc<Mutex<AudioState>>,
    err_fn: impl Fn(cpal::StreamError) + Send + 'static,
) -> Result<cpal::Stream, cpal::BuildStreamError> {
    device.build_output_stream(
        config,
        move |data: &mut [u16], _| {
            let mut guard = state.lock().unwrap();
            let voices = &mut guard.voices;
            let mut frame = 0usize;
            while frame < data.len() {
                let centered = mix_sample(voices) * 0.5 + 0.5;
                let v = (centered.clamp(0.0, 1.0) * u16::MAX as f32) as u16;
                for ch in 0..channels {
                    if frame + ch < data.len() {
                        data[frame + ch] = v;
                    }
                }
                frame += channels;
            }
        },
        err_fn,
        None,
    )
}
