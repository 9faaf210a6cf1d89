//! Fire-and-forget sound playback.
//!
//! Short synthesized buffers pushed through detached rodio sinks. The game
//! core only ever emits `SoundCue` values; this module is the one place that
//! talks to an audio device, and the game runs silently when there is none.

use crate::game::SoundCue;
use rand::Rng;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

const SAMPLE_RATE: u32 = 44_100;

pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    /// `None` when no output device is available.
    pub fn new() -> Option<Self> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        Some(Self {
            _stream: stream,
            handle,
        })
    }

    pub fn play(&self, cue: SoundCue) {
        let samples = match cue {
            SoundCue::Score => score_samples(),
            SoundCue::Explosion => explosion_samples(),
        };
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
        }
    }
}

/// Two quick rising sine notes.
fn score_samples() -> Vec<f32> {
    const NOTES: [f32; 2] = [520.0, 680.0];
    const NOTE_LEN: f32 = 0.12;

    let mut samples = Vec::new();
    for freq in NOTES {
        let count = (SAMPLE_RATE as f32 * NOTE_LEN) as usize;
        for i in 0..count {
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = 0.2 * (1.0 - t / NOTE_LEN);
            samples.push((t * freq * std::f32::consts::TAU).sin() * envelope);
        }
    }
    samples
}

/// Pitch-dropping saw plus noise, fading out.
fn explosion_samples() -> Vec<f32> {
    const DURATION: f32 = 0.5;

    let mut rng = rand::thread_rng();
    let count = (SAMPLE_RATE as f32 * DURATION) as usize;
    let mut samples = Vec::with_capacity(count);
    let mut phase = 0.0f32;
    for i in 0..count {
        let t = i as f32 / SAMPLE_RATE as f32;
        let progress = t / DURATION;
        let freq = 400.0 - 320.0 * progress.min(1.0);
        phase = (phase + freq / SAMPLE_RATE as f32).fract();
        let saw = 2.0 * phase - 1.0;
        let noise: f32 = rng.gen_range(-1.0..1.0);
        let envelope = 0.25 * (1.0 - progress);
        samples.push((saw * 0.6 + noise * 0.4) * envelope);
    }
    samples
}
