//! Semitone offset → circle-of-fifths lookup for key signatures
//!
//! Moving a piece up N semitones moves its key signature to that of the
//! major key N semitones higher. Each offset maps to the conventional
//! spelling of that key, choosing the smaller signature (3 semitones up is
//! three flats, not nine sharps; the tritone is six sharps).
//!
//! | semitones | 0 | 1 | 2 | 3  | 4 | 5  | 6 | 7 | 8  | 9 | 10 | 11 |
//! |-----------|---|---|---|----|---|----|---|---|----|---|----|----|
//! | fifths    | 0 | 7 | 2 | -3 | 4 | -1 | 6 | 1 | -4 | 3 | -2 | 5  |

use crate::models::KeySignature;

/// Fifths delta per semitone offset, indexed by `semitones mod 12`
pub const FIFTHS_DELTA: [i32; 12] = [0, 7, 2, -3, 4, -1, 6, 1, -4, 3, -2, 5];

/// Circle-of-fifths movement for a semitone offset of any size or sign
pub fn fifths_delta(semitones: i32) -> i32 {
    FIFTHS_DELTA[semitones.rem_euclid(12) as usize]
}

/// Key signature after transposing by `semitones`, saturated to seven sharps/flats
pub fn transpose_key(key: &KeySignature, semitones: i32) -> KeySignature {
    key.shifted(fifths_delta(semitones))
}
