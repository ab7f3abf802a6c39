//! Multi-tap comb reverb.

use crate::buffer::StereoBuffer;

/// Fixed tap schedule as (delay in frames, gain). At 44.1 kHz the delays
/// land at roughly 100, 167, 250, 360, and 490 ms.
pub const TAPS: [(usize, f64); 5] = [
    (4_410, 0.25),
    (7_350, 0.18),
    (11_025, 0.13),
    (15_876, 0.09),
    (21_609, 0.05),
];

/// Applies the reverb in place over the populated range of both tracks.
///
/// Each tap reads the same track it writes while the index advances, and the
/// taps run sequentially, so later taps re-echo what earlier taps already
/// produced. The filter is therefore recursive, not a pure feed-forward
/// delay; the compounding is what gives the tail its density. The
/// frames-used mark is not extended: energy a late tap would place past it
/// is discarded as trailing silence.
pub fn apply(buf: &mut StereoBuffer) {
    let used = buf.frames_used();
    let (left, right) = buf.tracks_mut();

    for &(delay, gain) in TAPS.iter() {
        for i in delay..used {
            left[i] = left[i].saturating_add((left[i - delay] as f64 * gain).round() as i32);
            right[i] = right[i].saturating_add((right[i - delay] as f64 * gain).round() as i32);
        }
    }
}
