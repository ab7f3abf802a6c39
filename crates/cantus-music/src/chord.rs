//! Chord construction from interval stacks.

use crate::error::TheoryResult;
use crate::interval::{Interval, Quality};
use crate::note::Note;

const MAJOR_TRIAD: [Interval; 2] = [
    Interval::new(3, Quality::Major),
    Interval::new(5, Quality::Perfect),
];
const MINOR_TRIAD: [Interval; 2] = [
    Interval::new(3, Quality::Minor),
    Interval::new(5, Quality::Perfect),
];
const AUGMENTED_TRIAD: [Interval; 2] = [
    Interval::new(3, Quality::Major),
    Interval::new(5, Quality::Augmented),
];
const DIMINISHED_TRIAD: [Interval; 2] = [
    Interval::new(3, Quality::Minor),
    Interval::new(5, Quality::Diminished),
];
const MAJOR_7: [Interval; 3] = [
    Interval::new(3, Quality::Major),
    Interval::new(5, Quality::Perfect),
    Interval::new(7, Quality::Major),
];
const MINOR_7: [Interval; 3] = [
    Interval::new(3, Quality::Minor),
    Interval::new(5, Quality::Perfect),
    Interval::new(7, Quality::Minor),
];
const DOMINANT_7: [Interval; 3] = [
    Interval::new(3, Quality::Major),
    Interval::new(5, Quality::Perfect),
    Interval::new(7, Quality::Minor),
];
const DIMINISHED_7: [Interval; 3] = [
    Interval::new(3, Quality::Minor),
    Interval::new(5, Quality::Diminished),
    Interval::new(7, Quality::Diminished),
];
const HALF_DIMINISHED_7: [Interval; 3] = [
    Interval::new(3, Quality::Minor),
    Interval::new(5, Quality::Diminished),
    Interval::new(7, Quality::Minor),
];

/// The chord qualities the suite draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordKind {
    MajorTriad,
    MinorTriad,
    AugmentedTriad,
    DiminishedTriad,
    Major7,
    Minor7,
    Dominant7,
    Diminished7,
    HalfDiminished7,
}

impl ChordKind {
    /// Every chord kind.
    pub const ALL: [ChordKind; 9] = [
        ChordKind::MajorTriad,
        ChordKind::MinorTriad,
        ChordKind::AugmentedTriad,
        ChordKind::DiminishedTriad,
        ChordKind::Major7,
        ChordKind::Minor7,
        ChordKind::Dominant7,
        ChordKind::Diminished7,
        ChordKind::HalfDiminished7,
    ];

    /// Full display name.
    pub fn name(self) -> &'static str {
        match self {
            ChordKind::MajorTriad => "major triad",
            ChordKind::MinorTriad => "minor triad",
            ChordKind::AugmentedTriad => "augmented triad",
            ChordKind::DiminishedTriad => "diminished triad",
            ChordKind::Major7 => "major 7th",
            ChordKind::Minor7 => "minor 7th",
            ChordKind::Dominant7 => "dominant 7th",
            ChordKind::Diminished7 => "diminished 7th",
            ChordKind::HalfDiminished7 => "half-diminished 7th",
        }
    }

    /// Chord-symbol suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordKind::MajorTriad => "",
            ChordKind::MinorTriad => "m",
            ChordKind::AugmentedTriad => "+",
            ChordKind::DiminishedTriad => "dim",
            ChordKind::Major7 => "maj7",
            ChordKind::Minor7 => "m7",
            ChordKind::Dominant7 => "7",
            ChordKind::Diminished7 => "dim7",
            ChordKind::HalfDiminished7 => "m7b5",
        }
    }

    /// Intervals stacked above the root.
    fn intervals(self) -> &'static [Interval] {
        match self {
            ChordKind::MajorTriad => &MAJOR_TRIAD,
            ChordKind::MinorTriad => &MINOR_TRIAD,
            ChordKind::AugmentedTriad => &AUGMENTED_TRIAD,
            ChordKind::DiminishedTriad => &DIMINISHED_TRIAD,
            ChordKind::Major7 => &MAJOR_7,
            ChordKind::Minor7 => &MINOR_7,
            ChordKind::Dominant7 => &DOMINANT_7,
            ChordKind::Diminished7 => &DIMINISHED_7,
            ChordKind::HalfDiminished7 => &HALF_DIMINISHED_7,
        }
    }
}

/// A chord realized from a root and a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    /// Root note.
    pub root: Note,
    /// Chord quality.
    pub kind: ChordKind,
    /// Root plus stacked intervals, ascending.
    pub notes: Vec<Note>,
}

impl Chord {
    /// Builds the chord by stacking the kind's intervals on `root`.
    pub fn build(root: Note, kind: ChordKind) -> TheoryResult<Chord> {
        let mut notes = vec![root];
        for &interval in kind.intervals() {
            notes.push(root.interval_up(interval)?);
        }
        Ok(Chord { root, kind, notes })
    }

    /// Chord symbol, e.g. `Cm` or `F#maj7`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.root, self.kind.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Tone;

    fn n(tone: Tone, accidental: i8, octave: i8) -> Note {
        Note::new(tone, accidental, octave)
    }

    fn spelled(chord: &Chord) -> Vec<String> {
        chord.notes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_major_and_minor_triads() {
        let c = Chord::build(n(Tone::C, 0, 4), ChordKind::MajorTriad).unwrap();
        assert_eq!(spelled(&c), ["C", "E", "G"]);

        let a = Chord::build(n(Tone::A, 0, 3), ChordKind::MinorTriad).unwrap();
        assert_eq!(spelled(&a), ["A", "C", "E"]);
    }

    #[test]
    fn test_sevenths_are_spelled() {
        let cmaj7 = Chord::build(n(Tone::C, 0, 4), ChordKind::Major7).unwrap();
        assert_eq!(spelled(&cmaj7), ["C", "E", "G", "B"]);

        let g7 = Chord::build(n(Tone::G, 0, 3), ChordKind::Dominant7).unwrap();
        assert_eq!(spelled(&g7), ["G", "B", "D", "F"]);

        let bdim7 = Chord::build(n(Tone::B, 0, 3), ChordKind::Diminished7).unwrap();
        assert_eq!(spelled(&bdim7), ["B", "D", "F", "Ab"]);

        let bm7b5 = Chord::build(n(Tone::B, 0, 3), ChordKind::HalfDiminished7).unwrap();
        assert_eq!(spelled(&bm7b5), ["B", "D", "F", "A"]);
    }

    #[test]
    fn test_flat_root() {
        let eb = Chord::build(n(Tone::E, -1, 4), ChordKind::MajorTriad).unwrap();
        assert_eq!(spelled(&eb), ["Eb", "G", "Bb"]);
    }

    #[test]
    fn test_augmented_triad() {
        let c_aug = Chord::build(n(Tone::C, 0, 4), ChordKind::AugmentedTriad).unwrap();
        assert_eq!(spelled(&c_aug), ["C", "E", "G#"]);
    }

    #[test]
    fn test_all_kinds_build_from_any_playable_root() {
        for tone in Tone::ALL {
            for accidental in -2..=2 {
                let root = n(tone, accidental, 4);
                for kind in ChordKind::ALL {
                    let chord = Chord::build(root, kind).unwrap();
                    assert_eq!(chord.notes.len(), kind.intervals().len() + 1);
                }
            }
        }
    }

    #[test]
    fn test_symbol() {
        let fs = Chord::build(n(Tone::F, 1, 4), ChordKind::Minor7).unwrap();
        assert_eq!(fs.symbol(), "F#m7");
    }
}
