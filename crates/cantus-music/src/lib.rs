//! Cantus music backend.
//!
//! Spelled-pitch theory (notes, intervals, chords, scales, key signatures)
//! and the name-seeded composer that realizes a plan as a stream of voices
//! for the audio core.
//!
//! Spelling matters throughout: `F#` and `Gb` are distinct notes that happen
//! to be enharmonic, and chord and scale construction preserves letter names
//! by working in intervals rather than raw semitones.
//!
//! # Determinism
//!
//! A name hashes (BLAKE3, truncated) to a 32-bit seed; every compositional
//! choice flows through one PCG32 stream in a fixed order. The same name
//! always yields the same plan, the same voices, and therefore the same
//! audio bytes.

pub mod chord;
pub mod compose;
pub mod error;
pub mod interval;
pub mod key;
pub mod note;
pub mod scale;

pub use chord::{Chord, ChordKind};
pub use compose::{create_rng, seed_from_name, Blueprint, Composition};
pub use error::{TheoryError, TheoryResult};
pub use interval::{Interval, Quality};
pub use key::{KeySignature, Mode};
pub use note::{Note, Tone};
pub use scale::{Scale, ScaleKind};
