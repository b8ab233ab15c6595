//! Measure attributes: key signature, time signature, clef

use serde::{Deserialize, Serialize};
use super::duration::DIVISIONS_PER_QUARTER;
use super::serde_helpers::deserialize_clamped_fifths;

/// Largest number of sharps or flats a key signature can carry
pub const MAX_FIFTHS: i32 = 7;

/// Key signature as a position on the circle of fifths
///
/// Positive `fifths` count sharps, negative count flats. The value is always
/// kept within `-7..=7`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct KeySignature {
    #[serde(deserialize_with = "deserialize_clamped_fifths")]
    fifths: i32,

    /// "major" / "minor", copied through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl KeySignature {
    /// Create a key signature, saturating `fifths` into `-7..=7`
    pub fn new(fifths: i32) -> Self {
        Self {
            fifths: fifths.clamp(-MAX_FIFTHS, MAX_FIFTHS),
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn fifths(&self) -> i32 {
        self.fifths
    }

    /// Move along the circle of fifths by `delta`, saturating at seven sharps or flats
    pub fn shifted(&self, delta: i32) -> Self {
        Self {
            fifths: self.fifths.saturating_add(delta).clamp(-MAX_FIFTHS, MAX_FIFTHS),
            mode: self.mode.clone(),
        }
    }
}

/// Time signature, e.g. 3/4
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSignature {
    pub beats: u32,
    pub beat_type: u32,
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self { beats: 4, beat_type: 4 }
    }
}

/// Clef as MusicXML `<sign>` and `<line>`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Clef {
    pub sign: String,
    pub line: u32,
}

impl Clef {
    pub fn treble() -> Self {
        Self { sign: "G".to_string(), line: 2 }
    }

    pub fn bass() -> Self {
        Self { sign: "F".to_string(), line: 4 }
    }
}

impl Default for Clef {
    fn default() -> Self {
        Self::treble()
    }
}

/// Structural metadata attached to a measure
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    pub divisions: u32,
    #[serde(default)]
    pub key: KeySignature,
    #[serde(default)]
    pub time: TimeSignature,
    #[serde(default)]
    pub clef: Clef,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            divisions: DIVISIONS_PER_QUARTER,
            key: KeySignature::default(),
            time: TimeSignature::default(),
            clef: Clef::default(),
        }
    }
}
