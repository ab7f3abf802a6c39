//! Note to frequency conversion in twelve-tone equal temperament.

/// Semitone offsets of the seven diatonic tones C D E F G A B.
const SEMITONE_MAP: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// The pitch fields of a note, as read by the frequency mapper.
///
/// The music-theory layer owns note semantics; the renderer needs only these
/// three raw fields to compute a MIDI pitch.
pub trait NotePitch {
    /// Diatonic tone index, 0..=6 for C through B.
    fn tone(&self) -> usize;
    /// Accidental offset in semitones, sharp positive.
    fn accidental(&self) -> i32;
    /// Octave number (octave 4 contains middle C).
    fn octave(&self) -> i32;
}

/// Converts a MIDI note number to frequency in Hz.
///
/// Uses the standard formula `f = 440 * 2^((n - 69) / 12)`. The input is
/// clamped to `[0, 127]` first, so extreme values yield extreme but bounded
/// frequencies rather than errors.
pub fn midi_to_freq(midi: i32) -> f64 {
    let midi = midi.clamp(0, 127);
    440.0 * 2.0_f64.powf((midi as f64 - 69.0) / 12.0)
}

/// Converts a note to its frequency in Hz.
pub fn note_to_freq(note: &impl NotePitch) -> f64 {
    let midi = 12 * (note.octave() + 1) + SEMITONE_MAP[note.tone()] + note.accidental();
    midi_to_freq(midi)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pitch {
        tone: usize,
        accidental: i32,
        octave: i32,
    }

    impl NotePitch for Pitch {
        fn tone(&self) -> usize {
            self.tone
        }
        fn accidental(&self) -> i32 {
            self.accidental
        }
        fn octave(&self) -> i32 {
            self.octave
        }
    }

    #[test]
    fn test_a4_is_exactly_440() {
        let a4 = Pitch {
            tone: 5,
            accidental: 0,
            octave: 4,
        };
        assert_eq!(note_to_freq(&a4), 440.0);
    }

    #[test]
    fn test_middle_c() {
        let c4 = Pitch {
            tone: 0,
            accidental: 0,
            octave: 4,
        };
        assert!((note_to_freq(&c4) - 261.6256).abs() < 0.001);
    }

    #[test]
    fn test_accidentals_shift_by_semitones() {
        let c_sharp = Pitch {
            tone: 0,
            accidental: 1,
            octave: 4,
        };
        assert!((note_to_freq(&c_sharp) - midi_to_freq(61)).abs() < 1e-9);

        let b_double_flat = Pitch {
            tone: 6,
            accidental: -2,
            octave: 3,
        };
        assert!((note_to_freq(&b_double_flat) - midi_to_freq(57)).abs() < 1e-9);
    }

    #[test]
    fn test_midi_clamp_low() {
        let deep = Pitch {
            tone: 0,
            accidental: 0,
            octave: -10,
        };
        assert_eq!(note_to_freq(&deep), midi_to_freq(0));
    }

    #[test]
    fn test_midi_clamp_high() {
        let shrill = Pitch {
            tone: 6,
            accidental: 3,
            octave: 20,
        };
        assert_eq!(note_to_freq(&shrill), midi_to_freq(127));
    }

    #[test]
    fn test_all_frequencies_within_midi_range() {
        let lo = midi_to_freq(0);
        let hi = midi_to_freq(127);
        for octave in -12..=24 {
            for tone in 0..7usize {
                for accidental in -2..=2 {
                    let f = note_to_freq(&Pitch {
                        tone,
                        accidental,
                        octave,
                    });
                    assert!(f >= lo && f <= hi);
                }
            }
        }
    }
}
