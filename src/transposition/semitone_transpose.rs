//! Chromatic (semitone) transposition of spelled pitches
//!
//! A pitch is reduced to its absolute MIDI number, shifted, and spelled again
//! from the sharp-preferring pitch-class table. The spelling is therefore
//! canonical rather than key-aware: Bb4 shifted up and back down comes out as
//! A#4. The sounding value is exact wherever the octave fits an `i32`.

use crate::models::Pitch;

/// Shift one pitch by `semitones` (positive = up).
///
/// Exact for every result between `Pitch::MIN_MIDI` and `Pitch::MAX_MIDI`;
/// beyond that the octave no longer fits and the result saturates.
pub fn transpose_pitch(pitch: &Pitch, semitones: i32) -> Pitch {
    if semitones == 0 {
        return *pitch;
    }
    Pitch::from_midi_number(pitch.midi_number() + semitones as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Step;

    #[test]
    fn test_c4_up_whole_step() {
        let c4 = Pitch::natural(Step::C, 4);
        assert_eq!(transpose_pitch(&c4, 2), Pitch::natural(Step::D, 4));
    }

    #[test]
    fn test_b_flat_for_alto_sax() {
        // Bb4 = 70, +9 = 79 = G#5
        let b_flat = Pitch::new(Step::B, -1, 4);
        let written = transpose_pitch(&b_flat, 9);
        assert_eq!(written.midi_number(), 79);
        assert_eq!(written, Pitch::new(Step::G, 1, 5));
    }

    #[test]
    fn test_crosses_octave_boundary() {
        let b3 = Pitch::natural(Step::B, 3);
        assert_eq!(transpose_pitch(&b3, 1), Pitch::natural(Step::C, 4));
        let c4 = Pitch::natural(Step::C, 4);
        assert_eq!(transpose_pitch(&c4, -1), Pitch::natural(Step::B, 3));
    }

    #[test]
    fn test_multi_octave_shift() {
        let e4 = Pitch::natural(Step::E, 4);
        // Baritone sax: +21 = octave and a major sixth
        assert_eq!(transpose_pitch(&e4, 21), Pitch::new(Step::C, 1, 6));
        assert_eq!(transpose_pitch(&e4, -36), Pitch::natural(Step::E, 1));
    }

    #[test]
    fn test_octave_may_go_negative() {
        let c0 = Pitch::natural(Step::C, 0);
        let shifted = transpose_pitch(&c0, -30);
        assert_eq!(shifted.midi_number(), 12 - 30);
        assert_eq!(shifted, Pitch::new(Step::F, 1, -3));
    }

    #[test]
    fn test_zero_keeps_spelling() {
        let d_flat = Pitch::new(Step::D, -1, 5);
        assert_eq!(transpose_pitch(&d_flat, 0), d_flat);
    }

    #[test]
    fn test_round_trip_preserves_value_not_spelling() {
        let b_flat = Pitch::new(Step::B, -1, 4);
        let back = transpose_pitch(&transpose_pitch(&b_flat, 1), -1);
        assert_eq!(back.midi_number(), b_flat.midi_number());
        assert_eq!(back, Pitch::new(Step::A, 1, 4));
    }

    #[test]
    fn test_value_law_over_range() {
        let steps = [Step::C, Step::D, Step::E, Step::F, Step::G, Step::A, Step::B];
        for step in steps {
            for alter in -2..=2 {
                for octave in -1..=9 {
                    let pitch = Pitch::new(step, alter, octave);
                    for semitones in -40..=40 {
                        assert_eq!(
                            transpose_pitch(&pitch, semitones).midi_number(),
                            pitch.midi_number() + semitones as i64,
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_extreme_offsets_do_not_panic() {
        let a4 = Pitch::natural(Step::A, 4);
        let up = transpose_pitch(&a4, i32::MAX);
        assert_eq!(up.midi_number(), 69 + i32::MAX as i64);
        let down = transpose_pitch(&a4, i32::MIN);
        assert_eq!(down.midi_number(), 69 + i32::MIN as i64);
    }

    #[test]
    fn test_top_octave_saturates() {
        let top = Pitch::natural(Step::C, i32::MAX);
        let up = transpose_pitch(&top, 12);
        assert_eq!(up, Pitch::natural(Step::B, i32::MAX));
        assert_eq!(up.midi_number(), Pitch::MAX_MIDI);

        // still exact while the result fits
        let within = transpose_pitch(&top, 11);
        assert_eq!(within.midi_number(), top.midi_number() + 11);
    }

    #[test]
    fn test_bottom_octave_saturates() {
        let bottom = Pitch::natural(Step::C, i32::MIN);
        let down = transpose_pitch(&bottom, -1);
        assert_eq!(down, Pitch::natural(Step::C, i32::MIN));
        assert_eq!(down.midi_number(), Pitch::MIN_MIDI);
    }
}
