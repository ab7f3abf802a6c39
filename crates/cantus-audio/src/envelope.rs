//! Amplitude envelopes for note shaping.

/// ADSR envelope parameters for a single note.
///
/// All times are in seconds; `sustain` is a level in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adsr {
    /// Attack time.
    pub attack: f64,
    /// Decay time.
    pub decay: f64,
    /// Sustain level.
    pub sustain: f64,
    /// Release time; shortened at evaluation when a note is too short.
    pub release: f64,
}

impl Default for Adsr {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.5,
            release: 0.2,
        }
    }
}

impl Adsr {
    /// Creates ADSR parameters, clamping each field to its valid range.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Envelope level at `t` seconds into a note of `duration` seconds.
    ///
    /// The release is shortened to at most 40% of the duration so very short
    /// notes still taper to silence. With `decay = 0` and `sustain = 1` this
    /// reduces to a plain attack/sustain/release contour. `duration` must be
    /// positive.
    pub fn level(&self, t: f64, duration: f64) -> f64 {
        let release = self.release.min(0.4 * duration);
        let sustain_end = duration - release;

        if t < self.attack {
            t / self.attack
        } else if t < self.attack + self.decay {
            1.0 - (1.0 - self.sustain) * ((t - self.attack) / self.decay)
        } else if t < sustain_end {
            self.sustain
        } else if release > 0.0 {
            (self.sustain * (duration - t) / release).max(0.0)
        } else {
            self.sustain
        }
    }
}

/// Linear attack/release contour with a flat sustain at full level.
///
/// The single-channel renderer's envelope. The release is shortened to at
/// most 30% of the duration.
pub fn attack_release(t: f64, duration: f64, attack: f64, release: f64) -> f64 {
    let release = release.min(0.3 * duration);
    if t < attack {
        return t / attack;
    }
    if t > duration - release {
        return ((duration - t) / release).max(0.0);
    }
    1.0
}
