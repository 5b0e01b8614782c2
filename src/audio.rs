//! Sound effects and background tracks, synthesized with fundsp and played
//! through rodio.

use std::collections::HashMap;

use fundsp::prelude::*;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::{debug, warn};

use crate::error::{GameError, GameResult};

const SAMPLE_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    Jump,
    Coin,
    Select,
    Death,
}

/// Background music; one per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Overworld,
    Afternoon,
    Night,
    Inferno,
}

/// Audio playback as seen by the game.
pub trait Audio {
    fn play(&mut self, sfx: Sfx);
    /// Starts `track` looping, replacing the current one. A no-op when
    /// `track` is already playing.
    fn play_track(&mut self, track: Track);
    fn stop_music(&mut self);
}

/// Silent output, for `muted` settings and machines without a sound device.
#[derive(Debug, Default)]
pub struct Mute;

impl Audio for Mute {
    fn play(&mut self, _sfx: Sfx) {}
    fn play_track(&mut self, _track: Track) {}
    fn stop_music(&mut self) {}
}

/// Opens the default output device, or falls back to [`Mute`].
pub fn open(muted: bool) -> Box<dyn Audio> {
    if muted {
        return Box::new(Mute);
    }
    match Synth::new() {
        Ok(synth) => Box::new(synth),
        Err(e) => {
            warn!("Audio disabled: {e}");
            Box::new(Mute)
        }
    }
}

// ── Synthesis ───────────────────────────────────────────────────────────────

fn render(mut unit: Box<dyn AudioUnit>, secs: f32) -> Vec<f32> {
    unit.set_sample_rate(SAMPLE_RATE as f64);
    let len = (SAMPLE_RATE as f32 * secs) as usize;
    (0..len).map(|_| unit.get_mono()).collect()
}

fn effect(sfx: Sfx) -> Vec<f32> {
    match sfx {
        // Quick upward chirp
        Sfx::Jump => {
            let freq = lfo(|t: f32| 300.0 + 2600.0 * t.min(0.15));
            let gain = lfo(|t: f32| 0.10 * (1.0 - t / 0.2).max(0.0));
            render(Box::new((freq >> square()) * gain), 0.2)
        }
        // Two-note ding: B5 then E6
        Sfx::Coin => {
            let freq = lfo(|t: f32| -> f32 { if t < 0.08 { 987.8 } else { 1318.5 } });
            let gain = lfo(|t: f32| 0.10 * (1.0 - t / 0.35).max(0.0));
            render(Box::new((freq >> square()) * gain), 0.35)
        }
        Sfx::Select => {
            let gain = lfo(|t: f32| 0.12 * (1.0 - t / 0.08).max(0.0));
            render(Box::new(sine_hz::<f32>(660.0) * gain), 0.08)
        }
        // Falling sawtooth, 400Hz to 80Hz
        Sfx::Death => {
            let freq = lfo(|t: f32| 400.0 + (80.0 - 400.0) * (t / 0.4).min(1.0));
            let gain = lfo(|t: f32| 0.15 * (1.0 - t / 0.5).max(0.0));
            render(Box::new((freq >> saw()) * gain), 0.5)
        }
    }
}

/// (frequency in Hz, length in beats); 0 Hz is a rest.
type Melody = &'static [(f32, f32)];

#[rustfmt::skip]
const OVERWORLD: Melody = &[
    (659.3, 1.0), (659.3, 1.0), (0.0, 1.0), (659.3, 1.0),
    (0.0, 1.0), (523.3, 1.0), (659.3, 2.0), (784.0, 2.0),
    (0.0, 2.0), (392.0, 2.0), (0.0, 2.0),
];
#[rustfmt::skip]
const AFTERNOON: Melody = &[
    (440.0, 2.0), (523.3, 2.0), (587.3, 2.0), (659.3, 4.0),
    (587.3, 2.0), (523.3, 2.0), (440.0, 4.0),
];
#[rustfmt::skip]
const NIGHT: Melody = &[
    (329.6, 3.0), (392.0, 1.0), (440.0, 4.0), (392.0, 2.0),
    (329.6, 2.0), (293.7, 4.0), (0.0, 2.0),
];
#[rustfmt::skip]
const INFERNO: Melody = &[
    (82.4, 1.0), (82.4, 1.0), (164.8, 1.0), (82.4, 1.0),
    (146.8, 1.0), (82.4, 1.0), (130.8, 1.0), (123.5, 1.0),
];

impl Track {
    fn melody(self) -> (Melody, f32) {
        // Seconds per beat alongside each melody
        match self {
            Track::Overworld => (OVERWORLD, 0.15),
            Track::Afternoon => (AFTERNOON, 0.2),
            Track::Night => (NIGHT, 0.3),
            Track::Inferno => (INFERNO, 0.12),
        }
    }

    fn render(self) -> Vec<f32> {
        let (melody, beat) = self.melody();
        let total: f32 = melody.iter().map(|&(_, beats)| beats * beat).sum();
        let note_at = move |t: f32| {
            let mut start = 0.0;
            for &(freq, beats) in melody {
                let len = beats * beat;
                if t < start + len {
                    return (freq, (t - start) / len);
                }
                start += len;
            }
            (0.0, 1.0)
        };
        let freq = lfo(move |t: f32| note_at(t).0.max(1.0));
        let gain = lfo(move |t: f32| {
            let (freq, phase) = note_at(t);
            if freq == 0.0 { 0.0 } else { 0.05 * (1.0 - phase * 0.8) }
        });
        let wave: Box<dyn AudioUnit> = match self {
            Track::Inferno => Box::new((freq >> saw()) * gain),
            Track::Night => Box::new((freq >> sine::<f32>()) * gain),
            _ => Box::new((freq >> triangle()) * gain),
        };
        render(wave, total)
    }
}

// ── Playback ────────────────────────────────────────────────────────────────

pub struct Synth {
    stream: OutputStream,
    effects: HashMap<Sfx, Vec<f32>>,
    music: Option<(Track, Sink)>,
}

impl Synth {
    pub fn new() -> GameResult<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| GameError::Audio(e.to_string()))?;
        stream.log_on_drop(false);
        let effects = [Sfx::Jump, Sfx::Coin, Sfx::Select, Sfx::Death]
            .into_iter()
            .map(|sfx| (sfx, effect(sfx)))
            .collect();
        Ok(Self {
            stream,
            effects,
            music: None,
        })
    }
}

impl Audio for Synth {
    fn play(&mut self, sfx: Sfx) {
        let Some(samples) = self.effects.get(&sfx) else {
            return;
        };
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples.clone()));
        sink.detach(); // Play in background
    }

    fn play_track(&mut self, track: Track) {
        if self.music.as_ref().is_some_and(|(current, _)| *current == track) {
            return;
        }
        self.stop_music();
        debug!(?track, "Switching track");
        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(0.6);
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, track.render()).repeat_infinite());
        self.music = Some((track, sink));
    }

    fn stop_music(&mut self) {
        if let Some((_, sink)) = self.music.take() {
            sink.stop();
        }
    }
}
