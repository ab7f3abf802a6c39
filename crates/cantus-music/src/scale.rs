//! Scale construction from successive-interval recipes.
//!
//! Each scale is a list of intervals between consecutive notes, so the
//! spelling falls out of interval arithmetic: D major gets F# and C#, the
//! octatonics use augmented unisons where a letter repeats.

use crate::error::TheoryResult;
use crate::interval::{Interval, Quality};
use crate::note::Note;

const M2: Interval = Interval::new(2, Quality::Major);
const MIN2: Interval = Interval::new(2, Quality::Minor);
const A2: Interval = Interval::new(2, Quality::Augmented);
const MIN3: Interval = Interval::new(3, Quality::Minor);
const A1: Interval = Interval::new(1, Quality::Augmented);
const D3: Interval = Interval::new(3, Quality::Diminished);

const MAJOR: [Interval; 7] = [M2, M2, MIN2, M2, M2, M2, MIN2];
const NATURAL_MINOR: [Interval; 7] = [M2, MIN2, M2, M2, MIN2, M2, M2];
const HARMONIC_MINOR: [Interval; 7] = [M2, MIN2, M2, M2, MIN2, A2, MIN2];
const MELODIC_MINOR: [Interval; 7] = [M2, MIN2, M2, M2, M2, M2, MIN2];
const PENTATONIC_MAJOR: [Interval; 5] = [M2, M2, MIN3, M2, MIN3];
const PENTATONIC_MINOR: [Interval; 5] = [MIN3, M2, M2, MIN3, M2];
const BLUES: [Interval; 6] = [MIN3, M2, A1, MIN2, MIN3, M2];
const WHOLE_TONE: [Interval; 6] = [M2, M2, M2, M2, M2, D3];
const OCTATONIC_HALF_WHOLE: [Interval; 8] = [MIN2, M2, A1, M2, MIN2, M2, MIN2, M2];
const OCTATONIC_WHOLE_HALF: [Interval; 8] = [M2, MIN2, M2, MIN2, M2, A1, M2, MIN2];

/// The scale families the suite draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    PentatonicMajor,
    PentatonicMinor,
    Blues,
    WholeTone,
    OctatonicHalfWhole,
    OctatonicWholeHalf,
}

impl ScaleKind {
    /// Every scale kind.
    pub const ALL: [ScaleKind; 10] = [
        ScaleKind::Major,
        ScaleKind::NaturalMinor,
        ScaleKind::HarmonicMinor,
        ScaleKind::MelodicMinor,
        ScaleKind::PentatonicMajor,
        ScaleKind::PentatonicMinor,
        ScaleKind::Blues,
        ScaleKind::WholeTone,
        ScaleKind::OctatonicHalfWhole,
        ScaleKind::OctatonicWholeHalf,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "major",
            ScaleKind::NaturalMinor => "natural minor",
            ScaleKind::HarmonicMinor => "harmonic minor",
            ScaleKind::MelodicMinor => "melodic minor",
            ScaleKind::PentatonicMajor => "pentatonic major",
            ScaleKind::PentatonicMinor => "pentatonic minor",
            ScaleKind::Blues => "blues",
            ScaleKind::WholeTone => "whole tone",
            ScaleKind::OctatonicHalfWhole => "octatonic (half-whole)",
            ScaleKind::OctatonicWholeHalf => "octatonic (whole-half)",
        }
    }

    /// Intervals between consecutive notes, root to octave.
    fn steps(self) -> &'static [Interval] {
        match self {
            ScaleKind::Major => &MAJOR,
            ScaleKind::NaturalMinor => &NATURAL_MINOR,
            ScaleKind::HarmonicMinor => &HARMONIC_MINOR,
            ScaleKind::MelodicMinor => &MELODIC_MINOR,
            ScaleKind::PentatonicMajor => &PENTATONIC_MAJOR,
            ScaleKind::PentatonicMinor => &PENTATONIC_MINOR,
            ScaleKind::Blues => &BLUES,
            ScaleKind::WholeTone => &WHOLE_TONE,
            ScaleKind::OctatonicHalfWhole => &OCTATONIC_HALF_WHOLE,
            ScaleKind::OctatonicWholeHalf => &OCTATONIC_WHOLE_HALF,
        }
    }
}

/// An ascending scale realized from a root and a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    /// Root note.
    pub root: Note,
    /// Scale family.
    pub kind: ScaleKind,
    /// Ascending spelling, ending on the octave above the root.
    pub notes: Vec<Note>,
}

impl Scale {
    /// Builds the ascending scale from `root`.
    pub fn build(root: Note, kind: ScaleKind) -> TheoryResult<Scale> {
        let mut notes = vec![root];
        let mut current = root;
        for &step in kind.steps() {
            current = current.interval_up(step)?;
            notes.push(current);
        }
        Ok(Scale { root, kind, notes })
    }

    /// The scale degrees without the closing octave.
    pub fn degrees(&self) -> &[Note] {
        &self.notes[..self.notes.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Tone;

    fn n(tone: Tone, accidental: i8, octave: i8) -> Note {
        Note::new(tone, accidental, octave)
    }

    fn spelled(scale: &Scale) -> Vec<String> {
        scale.notes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_major_scales_get_their_sharps() {
        let c = Scale::build(n(Tone::C, 0, 4), ScaleKind::Major).unwrap();
        assert_eq!(spelled(&c), ["C", "D", "E", "F", "G", "A", "B", "C"]);
        assert_eq!(c.notes[7], n(Tone::C, 0, 5));

        let d = Scale::build(n(Tone::D, 0, 4), ScaleKind::Major).unwrap();
        assert_eq!(spelled(&d), ["D", "E", "F#", "G", "A", "B", "C#", "D"]);
    }

    #[test]
    fn test_minor_variants() {
        let a_nat = Scale::build(n(Tone::A, 0, 3), ScaleKind::NaturalMinor).unwrap();
        assert_eq!(spelled(&a_nat), ["A", "B", "C", "D", "E", "F", "G", "A"]);

        let a_harm = Scale::build(n(Tone::A, 0, 3), ScaleKind::HarmonicMinor).unwrap();
        assert_eq!(spelled(&a_harm), ["A", "B", "C", "D", "E", "F", "G#", "A"]);

        let a_mel = Scale::build(n(Tone::A, 0, 3), ScaleKind::MelodicMinor).unwrap();
        assert_eq!(spelled(&a_mel), ["A", "B", "C", "D", "E", "F#", "G#", "A"]);
    }

    #[test]
    fn test_pentatonics() {
        let c_maj = Scale::build(n(Tone::C, 0, 4), ScaleKind::PentatonicMajor).unwrap();
        assert_eq!(spelled(&c_maj), ["C", "D", "E", "G", "A", "C"]);

        let a_min = Scale::build(n(Tone::A, 0, 3), ScaleKind::PentatonicMinor).unwrap();
        assert_eq!(spelled(&a_min), ["A", "C", "D", "E", "G", "A"]);
    }

    #[test]
    fn test_blues() {
        let c = Scale::build(n(Tone::C, 0, 4), ScaleKind::Blues).unwrap();
        assert_eq!(spelled(&c), ["C", "Eb", "F", "F#", "G", "Bb", "C"]);
    }

    #[test]
    fn test_whole_tone() {
        let c = Scale::build(n(Tone::C, 0, 4), ScaleKind::WholeTone).unwrap();
        assert_eq!(spelled(&c), ["C", "D", "E", "F#", "G#", "A#", "C"]);
        // The closing diminished third still lands on the octave pitch.
        assert!(c.notes[6].is_enharmonic(n(Tone::C, 0, 5)));
    }

    #[test]
    fn test_octatonics() {
        let hw = Scale::build(n(Tone::C, 0, 4), ScaleKind::OctatonicHalfWhole).unwrap();
        assert_eq!(
            spelled(&hw),
            ["C", "Db", "Eb", "E", "F#", "G", "A", "Bb", "C"]
        );

        let wh = Scale::build(n(Tone::C, 0, 4), ScaleKind::OctatonicWholeHalf).unwrap();
        assert_eq!(
            spelled(&wh),
            ["C", "D", "Eb", "F", "Gb", "Ab", "A", "B", "C"]
        );
    }

    #[test]
    fn test_every_scale_spans_an_octave() {
        for kind in ScaleKind::ALL {
            for tone in Tone::ALL {
                for accidental in -1..=1 {
                    let root = n(tone, accidental, 4);
                    let scale = Scale::build(root, kind).unwrap();
                    let last = *scale.notes.last().unwrap();
                    assert_eq!(
                        last.chromatic(),
                        root.chromatic() + 12,
                        "{} {}",
                        root,
                        kind.name()
                    );
                    assert_eq!(scale.degrees().len(), scale.notes.len() - 1);
                }
            }
        }
    }
}
