//! Key signatures and relative keys.

use crate::error::TheoryResult;
use crate::interval::{Interval, Quality};
use crate::note::Note;

/// Major or minor key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

/// Position of each natural tone on the circle of fifths, relative to C.
const FIFTHS: [i32; 7] = [0, 2, 4, -1, 1, 3, 5];

/// A key signature: tonic, mode, and signed accidental count.
///
/// `alter` is positive for sharp keys, negative for flat keys; its magnitude
/// is the number of accidentals on the staff. Each accidental on the tonic
/// shifts the signature by a full circle of seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySignature {
    /// The tonic.
    pub root: Note,
    /// Major or minor.
    pub mode: Mode,
    /// Signed accidental count.
    pub alter: i32,
}

impl KeySignature {
    /// The key signature of `root` in `mode`.
    pub fn of(root: Note, mode: Mode) -> KeySignature {
        let major_alter = FIFTHS[root.tone.index()] + 7 * root.accidental as i32;
        let alter = match mode {
            Mode::Major => major_alter,
            Mode::Minor => major_alter - 3,
        };
        KeySignature { root, mode, alter }
    }

    /// Number of accidentals.
    pub fn size(&self) -> u32 {
        self.alter.unsigned_abs()
    }

    /// The relative key: same signature, opposite mode.
    pub fn relative(&self) -> TheoryResult<KeySignature> {
        let (root, mode) = match self.mode {
            Mode::Major => (
                self.root.interval_up(Interval::new(6, Quality::Major))?,
                Mode::Minor,
            ),
            Mode::Minor => (
                self.root.interval_up(Interval::new(3, Quality::Minor))?,
                Mode::Major,
            ),
        };
        Ok(KeySignature {
            root,
            mode,
            alter: self.alter,
        })
    }
}
