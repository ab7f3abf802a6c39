//! Voice rendering into the accumulator buffers.

use std::f64::consts::FRAC_PI_2;

use crate::buffer::{MonoBuffer, StereoBuffer, SAMPLE_RATE};
use crate::envelope::{attack_release, Adsr};
use crate::oscillator::Timbre;

/// Amplitude scale for the stereo renderer. Keeps typical mixes within
/// 16-bit range before the writer's hard clip.
pub const AMP_SCALE: f64 = 10_000.0;

/// Amplitude scale for the mono configuration.
pub const MONO_AMP_SCALE: f64 = 8_000.0;

/// One note to be mixed into the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    /// Frequency in Hz.
    pub freq: f64,
    /// Onset in seconds from the start of the piece.
    pub start: f64,
    /// Length in seconds; must be positive.
    pub duration: f64,
    /// Linear volume multiplier.
    pub volume: f64,
    /// Stereo position: 0.0 full left, 0.5 center, 1.0 full right.
    pub pan: f64,
    /// Which oscillator recipe to use.
    pub timbre: Timbre,
    /// Amplitude contour.
    pub envelope: Adsr,
}

/// Constant-power pan gains for `pan` in `[0, 1]`.
///
/// `l^2 + r^2 = 1` across the whole field, so perceived loudness does not
/// dip off-center.
pub fn pan_gains(pan: f64) -> (f64, f64) {
    let angle = pan.clamp(0.0, 1.0) * FRAC_PI_2;
    (angle.cos(), angle.sin())
}

/// Mixes one voice into the stereo buffer.
///
/// Overlapping voices simply sum; ordering does not matter. Frames that fall
/// outside the buffer are dropped by the buffer itself.
pub fn render_voice(buf: &mut StereoBuffer, voice: &Voice) {
    let start_frame = (voice.start * SAMPLE_RATE as f64) as i64;
    let n_frames = (voice.duration * SAMPLE_RATE as f64) as i64;
    let (l_gain, r_gain) = pan_gains(voice.pan);

    for i in 0..n_frames {
        let t = i as f64 / SAMPLE_RATE as f64;
        let s = voice.timbre.sample(voice.freq, t)
            * voice.envelope.level(t, voice.duration)
            * voice.volume
            * AMP_SCALE;
        buf.mix(
            start_frame + i,
            (s * l_gain).round() as i32,
            (s * r_gain).round() as i32,
        );
    }
}

/// Mixes one voice into the mono buffer.
///
/// The mono configuration uses the flat attack/release contour built from
/// the voice's attack and release times; pan, decay, and sustain are
/// ignored.
pub fn render_voice_mono(buf: &mut MonoBuffer, voice: &Voice) {
    let start_frame = (voice.start * SAMPLE_RATE as f64) as i64;
    let n_frames = (voice.duration * SAMPLE_RATE as f64) as i64;

    for i in 0..n_frames {
        let t = i as f64 / SAMPLE_RATE as f64;
        let s = voice.timbre.sample(voice.freq, t)
            * attack_release(t, voice.duration, voice.envelope.attack, voice.envelope.release)
            * voice.volume
            * MONO_AMP_SCALE;
        buf.mix(start_frame + i, s.round() as i32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_voice(pan: f64) -> Voice {
        Voice {
            freq: 261.6256,
            start: 0.0,
            duration: 0.25,
            volume: 1.0,
            pan,
            timbre: Timbre::Piano,
            envelope: Adsr::new(0.01, 0.08, 0.6, 0.12),
        }
    }

    #[test]
    fn test_pan_power_law() {
        for i in 0..=100 {
            let pan = i as f64 / 100.0;
            let (l, r) = pan_gains(pan);
            assert!((l * l + r * r - 1.0).abs() < 1e-12, "pan {pan}");
        }
    }

    #[test]
    fn test_pan_extremes() {
        assert_eq!(pan_gains(0.0), (1.0, 0.0));
        let (l, r) = pan_gains(1.0);
        assert!(l.abs() < 1e-15);
        assert_eq!(r, 1.0);
    }

    #[test]
    fn test_render_sets_frame_count() {
        let mut buf = StereoBuffer::new().unwrap();
        render_voice(&mut buf, &test_voice(0.5));
        assert_eq!(buf.frames_used(), (0.25 * SAMPLE_RATE as f64) as usize);
    }

    #[test]
    fn test_mix_is_commutative() {
        let a = test_voice(0.3);
        let b = Voice {
            freq: 440.0,
            start: 0.1,
            timbre: Timbre::Pad,
            ..test_voice(0.7)
        };

        let mut ab = StereoBuffer::new().unwrap();
        render_voice(&mut ab, &a);
        render_voice(&mut ab, &b);

        let mut ba = StereoBuffer::new().unwrap();
        render_voice(&mut ba, &b);
        render_voice(&mut ba, &a);

        assert_eq!(ab.frames_used(), ba.frames_used());
        assert_eq!(ab.left(), ba.left());
        assert_eq!(ab.right(), ba.right());
    }

    #[test]
    fn test_untouched_frames_stay_zero() {
        let mut buf = StereoBuffer::new().unwrap();
        let voice = Voice {
            start: 1.0,
            ..test_voice(0.5)
        };
        render_voice(&mut buf, &voice);
        let start = SAMPLE_RATE as usize;
        assert!(buf.left()[..start].iter().all(|&s| s == 0));
        assert!(buf.right()[..start].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_mono_render_fills_buffer() {
        let mut buf = MonoBuffer::new().unwrap();
        render_voice_mono(&mut buf, &test_voice(0.5));
        assert_eq!(buf.frames_used(), (0.25 * SAMPLE_RATE as f64) as usize);
        assert!(buf.samples()[..buf.frames_used()].iter().any(|&s| s != 0));
    }
}
