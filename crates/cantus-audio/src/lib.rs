//! Cantus audio core.
//!
//! A deterministic offline renderer: voices described by frequency, timing,
//! timbre, and envelope are mixed into wide accumulator tracks, run through a
//! comb reverb, and serialized as 16-bit PCM WAV.
//!
//! # Pipeline
//!
//! The mutation discipline is strictly serial: all [`render::render_voice`]
//! calls happen first (in any order), then exactly one [`reverb::apply`],
//! then exactly one write through [`wav`]. Voices may overlap freely; they
//! sum into the 32-bit accumulators and clipping is deferred to the writer.
//!
//! # Determinism
//!
//! Given the same voice stream the output file is byte-identical across runs.
//! The core consumes no randomness and emits no timestamps or variable
//! metadata; [`wav::pcm_hash`] exposes a BLAKE3 digest of the sample payload
//! for verification.
//!
//! # Crate structure
//!
//! - [`buffer`] - fixed-capacity accumulator tracks (stereo and mono)
//! - [`freq`] - note to frequency conversion (12-TET, MIDI-clamped)
//! - [`envelope`] - ADSR and attack/release amplitude contours
//! - [`oscillator`] - the three fixed additive timbres
//! - [`render`] - per-voice mixing with constant-power panning
//! - [`reverb`] - in-place multi-tap comb reverb
//! - [`wav`] - RIFF/WAVE container output
//! - [`error`] - the renderer's error taxonomy

pub mod buffer;
pub mod envelope;
pub mod error;
pub mod freq;
pub mod oscillator;
pub mod render;
pub mod reverb;
pub mod wav;

pub use buffer::{MonoBuffer, StereoBuffer, MAX_FRAMES, MAX_SAMPLES, SAMPLE_RATE};
pub use envelope::{attack_release, Adsr};
pub use error::{AudioError, AudioResult};
pub use freq::{midi_to_freq, note_to_freq, NotePitch};
pub use oscillator::Timbre;
pub use render::{pan_gains, render_voice, render_voice_mono, Voice, AMP_SCALE, MONO_AMP_SCALE};
