//! Pitch representation and MIDI number conversion
//!
//! A pitch is spelled MusicXML-style as `(step, alter, octave)`. The absolute
//! value of a pitch is its MIDI note number, where C4 (middle C) = 60.

use serde::{Deserialize, Serialize};

/// One of the seven letter names
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    /// Natural pitch class of the letter (C=0 ... B=11)
    pub fn pitch_class(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 2,
            Step::E => 4,
            Step::F => 5,
            Step::G => 7,
            Step::A => 9,
            Step::B => 11,
        }
    }

    /// Parse a step letter (case insensitive)
    pub fn from_letter(s: &str) -> Option<Step> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" => Some(Step::C),
            "D" => Some(Step::D),
            "E" => Some(Step::E),
            "F" => Some(Step::F),
            "G" => Some(Step::G),
            "A" => Some(Step::A),
            "B" => Some(Step::B),
            _ => None,
        }
    }

    /// Parse a step letter, falling back to C for anything unrecognized
    pub fn from_letter_lenient(s: &str) -> Step {
        Step::from_letter(s).unwrap_or_else(|| {
            log::warn!("unrecognized step letter {:?}, using C", s);
            Step::C
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Step::C => "C",
            Step::D => "D",
            Step::E => "E",
            Step::F => "F",
            Step::G => "G",
            Step::A => "A",
            Step::B => "B",
        }
    }
}

impl From<String> for Step {
    fn from(s: String) -> Self {
        Step::from_letter_lenient(&s)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sharp-preferring spelling for each pitch class, indexed by `midi mod 12`
const SHARP_SPELLINGS: [(Step, i32); 12] = [
    (Step::C, 0),
    (Step::C, 1),
    (Step::D, 0),
    (Step::D, 1),
    (Step::E, 0),
    (Step::F, 0),
    (Step::F, 1),
    (Step::G, 0),
    (Step::G, 1),
    (Step::A, 0),
    (Step::A, 1),
    (Step::B, 0),
];

/// Spelled pitch: letter, chromatic alteration and octave
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub step: Step,

    /// Semitone alteration (-1 = flat, 1 = sharp). Any value is accepted.
    #[serde(default)]
    pub alter: i32,

    /// Scientific octave number (octave 4 contains middle C)
    pub octave: i32,
}

impl Pitch {
    /// Lowest sharp-spelled value: C at octave `i32::MIN`
    pub const MIN_MIDI: i64 = (i32::MIN as i64 + 1) * 12;
    /// Highest sharp-spelled value: B at octave `i32::MAX`
    pub const MAX_MIDI: i64 = (i32::MAX as i64 + 1) * 12 + 11;

    pub fn new(step: Step, alter: i32, octave: i32) -> Self {
        Self { step, alter, octave }
    }

    pub fn natural(step: Step, octave: i32) -> Self {
        Self::new(step, 0, octave)
    }

    /// Absolute MIDI note number. Not clamped to 0-127.
    pub fn midi_number(&self) -> i64 {
        (self.octave as i64 + 1) * 12 + self.step.pitch_class() as i64 + self.alter as i64
    }

    /// Spell an absolute MIDI note number, preferring sharps.
    ///
    /// Values outside [`Pitch::MIN_MIDI`, `Pitch::MAX_MIDI`] have no octave
    /// that fits in an `i32` and saturate to the nearest end of that range.
    pub fn from_midi_number(midi: i64) -> Self {
        let midi = midi.clamp(Self::MIN_MIDI, Self::MAX_MIDI);
        let (step, alter) = SHARP_SPELLINGS[midi.rem_euclid(12) as usize];
        let octave = (midi.div_euclid(12) - 1) as i32;
        Self { step, alter, octave }
    }

    /// Human-readable name, e.g. "Bb4" or "F#5"
    pub fn notation(&self) -> String {
        let accidental = match self.alter {
            a if a > 0 => "#".repeat(a as usize),
            a if a < 0 => "b".repeat(a.unsigned_abs() as usize),
            _ => String::new(),
        };
        format!("{}{}{}", self.step, accidental, self.octave)
    }
}
