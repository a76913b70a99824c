//! Sound cues
//!
//! Two short synthesized cues, played fire-and-forget on a detached sink.
//! Hosts without an audio device get a silent bank; playback never fails
//! loudly.

use fundsp::prelude::*;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::warn;

const SAMPLE_RATE: f64 = 44100.0;

/// The two cues the game asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Flap,
    Death,
}

pub struct SoundBank {
    stream: Option<OutputStream>,
}

impl SoundBank {
    /// Open the default output device; muted or deviceless hosts get a
    /// silent bank.
    pub fn new(muted: bool) -> Self {
        let stream = if muted {
            None
        } else {
            match OutputStreamBuilder::open_default_stream() {
                Ok(stream) => Some(stream),
                Err(err) => {
                    warn!(error = %err, "no audio output, cues disabled");
                    None
                }
            }
        };
        Self { stream }
    }

    /// Fire-and-forget playback of one cue.
    pub fn play(&self, cue: Cue) {
        let Some(stream) = &self.stream else { return };
        let samples = match cue {
            Cue::Flap => flap_samples(),
            Cue::Death => death_samples(),
        };
        let sink = Sink::connect_new(stream.mixer());
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE as u32, samples));
        sink.detach();
    }
}

/// Rising chirp for a flap
fn flap_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| lerp(300.0, 700.0, (t / 0.12).min(1.0)));
    let gain = lfo(|t: f32| lerp(0.2, 0.0, (t / 0.15).min(1.0)));
    render_mono((freq >> sine::<f32>()) * gain, 0.15)
}

/// Descending saw for a death (400Hz down to 80Hz, fading out)
fn death_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| lerp(400.0, 80.0, (t / 0.4).min(1.0)));
    let gain = lfo(|t: f32| lerp(0.15, 0.0, (t / 0.5).min(1.0)));
    render_mono((freq >> saw()) * gain, 0.5)
}

fn render_mono(mut unit: impl AudioUnit, seconds: f64) -> Vec<f32> {
    let wave = Wave::render(SAMPLE_RATE, seconds, &mut unit);
    wave.channel(0).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_render_nonsilent_audio() {
        for samples in [flap_samples(), death_samples()] {
            assert!(!samples.is_empty());
            assert!(samples.iter().any(|s| s.abs() > 0.01));
            assert!(samples.iter().all(|s| s.abs() <= 1.0));
        }
    }

    #[test]
    fn test_death_cue_is_longer_than_flap() {
        assert!(death_samples().len() > flap_samples().len());
    }
}
