//! Name-seeded composition.
//!
//! A name hashes to a seed; the seed drives every choice in a fixed order,
//! so a name always yields the same piece. Realization produces the voice
//! stream for the renderer: held pad chords, a bass line, an arpeggio, and a
//! melody that walks the scale.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use cantus_audio::{note_to_freq, Adsr, Timbre, Voice};

use crate::chord::{Chord, ChordKind};
use crate::error::TheoryResult;
use crate::key::Mode;
use crate::note::{Note, Tone};
use crate::scale::{Scale, ScaleKind};

/// Chord progressions as (scale degree, minor-chord) pairs. The last two
/// rows are in the minor mode.
const PROGRESSIONS: [[(usize, bool); 4]; 5] = [
    [(0, false), (3, false), (4, false), (0, false)], // I  - IV  - V   - I
    [(0, false), (5, true), (3, false), (4, false)],  // I  - vi  - IV  - V
    [(0, false), (4, false), (5, true), (3, false)],  // I  - V   - vi  - IV
    [(0, true), (3, false), (4, false), (0, true)],   // i  - IV  - V   - i
    [(0, true), (5, false), (2, false), (4, false)],  // i  - VI  - III - V
];

/// Melody rhythm patterns, note lengths in eighth notes.
const RHYTHMS: [[u32; 8]; 4] = [
    [2, 2, 1, 1, 2, 2, 2, 4],
    [1, 1, 2, 2, 1, 1, 2, 2],
    [4, 2, 2, 1, 1, 1, 1, 4],
    [2, 1, 1, 4, 2, 2, 2, 2],
];

/// How many times the progression is played before the final chord.
const PROGRESSION_REPEATS: usize = 2;

/// Chance that a melody slot rests instead of sounding.
const REST_CHANCE: f64 = 0.15;

/// Derives the 32-bit composition seed from a name.
pub fn seed_from_name(name: &str) -> u32 {
    let hash = blake3::hash(name.as_bytes());
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates the PCG32 stream for a seed.
///
/// The 32-bit seed fills both halves of the 64-bit state, as the generator's
/// initialization expects.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// The plan drawn from a name, before any notes are placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    /// The name the piece is for.
    pub name: String,
    /// Seed derived from the name.
    pub seed: u32,
    /// Tonic at the chord octave.
    pub root: Note,
    /// Major or minor, implied by the progression.
    pub mode: Mode,
    /// Index into the progression table.
    pub progression: usize,
    /// Index into the rhythm table.
    pub rhythm: usize,
    /// Tempo in beats per minute, 90..=169.
    pub tempo_bpm: u32,
}

impl Blueprint {
    fn draw(name: &str, seed: u32, rng: &mut Pcg32) -> Blueprint {
        let tone = Tone::from_index(rng.gen_range(0..7));
        // Keep the key playable: at most one accidental on the tonic.
        let accidental = rng.gen_range(-1i8..=1);
        let root = Note::new(tone, accidental, 3);
        let progression = rng.gen_range(0..PROGRESSIONS.len());
        let rhythm = rng.gen_range(0..RHYTHMS.len());
        let tempo_bpm = rng.gen_range(90..170);
        let mode = if progression >= 3 {
            Mode::Minor
        } else {
            Mode::Major
        };
        Blueprint {
            name: name.to_string(),
            seed,
            root,
            mode,
            progression,
            rhythm,
            tempo_bpm,
        }
    }
}

/// A realized composition: the printable plan plus the voice stream.
#[derive(Debug, Clone)]
pub struct Composition {
    /// The plan the voices were realized from.
    pub blueprint: Blueprint,
    /// The melody scale (major or natural minor on the tonic).
    pub scale: Scale,
    /// One pass of the progression, for display.
    pub chords: Vec<Chord>,
    /// Every note of the piece, in schedule order.
    pub voices: Vec<Voice>,
    /// Scheduled length in seconds.
    pub duration: f64,
}

impl Composition {
    /// Composes the piece for `name`.
    pub fn from_name(name: &str) -> TheoryResult<Composition> {
        let seed = seed_from_name(name);
        let mut rng = create_rng(seed);
        let blueprint = Blueprint::draw(name, seed, &mut rng);
        realize(blueprint, &mut rng)
    }
}

fn realize(blueprint: Blueprint, rng: &mut Pcg32) -> TheoryResult<Composition> {
    let scale_kind = match blueprint.mode {
        Mode::Major => ScaleKind::Major,
        Mode::Minor => ScaleKind::NaturalMinor,
    };
    let scale = Scale::build(blueprint.root, scale_kind)?;
    let degrees: Vec<Note> = scale.degrees().to_vec();

    let beat = 60.0 / blueprint.tempo_bpm as f64;
    let eighth = beat / 2.0;

    let mut voices = Vec::new();
    let mut chords = Vec::new();
    let mut cursor = 0.0;
    let mut melody_degree = rng.gen_range(0..degrees.len());

    for rep in 0..PROGRESSION_REPEATS {
        for &(degree, minor_chord) in &PROGRESSIONS[blueprint.progression] {
            let chord_root = degrees[degree % degrees.len()].with_octave(3);
            let kind = if minor_chord {
                ChordKind::MinorTriad
            } else {
                ChordKind::MajorTriad
            };
            let chord = Chord::build(chord_root, kind)?;
            let chord_dur = beat * 4.0;

            // Pad: the held triad, centered under everything else.
            for &note in &chord.notes {
                voices.push(Voice {
                    freq: note_to_freq(&note),
                    start: cursor,
                    duration: chord_dur * 0.95,
                    volume: 0.4,
                    pan: 0.5,
                    timbre: Timbre::Pad,
                    envelope: Adsr::new(0.25, 0.0, 1.0, 0.6),
                });
            }

            // Bass: the chord root an octave down, on beats one and three.
            let bass_note = chord_root.with_octave(2);
            for on_beat in [0.0, 2.0] {
                voices.push(Voice {
                    freq: note_to_freq(&bass_note),
                    start: cursor + on_beat * beat,
                    duration: beat * 1.8,
                    volume: 0.5,
                    pan: 0.5,
                    timbre: Timbre::Bass,
                    envelope: Adsr::new(0.005, 0.06, 0.7, 0.15),
                });
            }

            // Arpeggio: chord tones cycling in eighths, panned off-center.
            for slot in 0..8 {
                let note = chord.notes[slot % chord.notes.len()].with_octave(4);
                voices.push(Voice {
                    freq: note_to_freq(&note),
                    start: cursor + slot as f64 * eighth,
                    duration: eighth * 0.9,
                    volume: 0.3,
                    pan: if slot % 2 == 0 { 0.35 } else { 0.65 },
                    timbre: Timbre::Piano,
                    envelope: Adsr::new(0.005, 0.05, 0.5, 0.08),
                });
            }

            // Melody: a walk over the scale with occasional rests. Draws
            // happen every slot, rest or not, to keep the stream aligned.
            let mut melody_cursor = cursor;
            for &eighths in &RHYTHMS[blueprint.rhythm] {
                let note_dur = eighth * eighths as f64;
                let step = rng.gen_range(-2i32..=2);
                melody_degree = (melody_degree as i32 + step)
                    .rem_euclid(degrees.len() as i32) as usize;
                let rest = rng.gen_bool(REST_CHANCE);
                if !rest {
                    let note = degrees[melody_degree].with_octave(5);
                    voices.push(Voice {
                        freq: note_to_freq(&note),
                        start: melody_cursor,
                        duration: note_dur * 0.85,
                        volume: 0.7,
                        pan: 0.5 + step as f64 * 0.05,
                        timbre: Timbre::Piano,
                        envelope: Adsr::new(0.01, 0.08, 0.6, 0.12),
                    });
                }
                melody_cursor += note_dur;
            }

            if rep == 0 {
                chords.push(chord);
            }
            cursor += chord_dur;
        }
    }

    // Final tonic, held longer, with the root doubled high and low.
    let final_kind = match blueprint.mode {
        Mode::Major => ChordKind::MajorTriad,
        Mode::Minor => ChordKind::MinorTriad,
    };
    let final_chord = Chord::build(blueprint.root, final_kind)?;
    let final_dur = beat * 6.0;
    for &note in &final_chord.notes {
        voices.push(Voice {
            freq: note_to_freq(&note),
            start: cursor,
            duration: final_dur,
            volume: 0.5,
            pan: 0.5,
            timbre: Timbre::Pad,
            envelope: Adsr::new(0.2, 0.0, 1.0, 1.2),
        });
    }
    voices.push(Voice {
        freq: note_to_freq(&blueprint.root.with_octave(5)),
        start: cursor,
        duration: final_dur,
        volume: 0.4,
        pan: 0.5,
        timbre: Timbre::Piano,
        envelope: Adsr::new(0.02, 0.1, 0.6, 1.0),
    });
    voices.push(Voice {
        freq: note_to_freq(&blueprint.root.with_octave(2)),
        start: cursor,
        duration: final_dur,
        volume: 0.5,
        pan: 0.5,
        timbre: Timbre::Bass,
        envelope: Adsr::new(0.01, 0.08, 0.7, 1.0),
    });
    cursor += final_dur;

    Ok(Composition {
        blueprint,
        scale,
        chords,
        voices,
        duration: cursor,
    })
}
