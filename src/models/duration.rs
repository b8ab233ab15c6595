//! Note durations
//!
//! Durations are symbolic note types measured in MusicXML divisions with a
//! fixed resolution of [`DIVISIONS_PER_QUARTER`].

use serde::{Deserialize, Serialize};

/// MusicXML `<divisions>` used throughout the model
pub const DIVISIONS_PER_QUARTER: u32 = 4;

/// Symbolic note type
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    Whole,
    Half,
    #[default]
    Quarter,
    Eighth,
    #[serde(alias = "16th")]
    Sixteenth,
}

impl NoteType {
    /// Length in divisions (whole = 16, sixteenth = 1)
    pub fn divisions(self) -> u32 {
        match self {
            NoteType::Whole => 16,
            NoteType::Half => 8,
            NoteType::Quarter => 4,
            NoteType::Eighth => 2,
            NoteType::Sixteenth => 1,
        }
    }

    /// MusicXML `<type>` text
    pub fn xml_name(self) -> &'static str {
        match self {
            NoteType::Whole => "whole",
            NoteType::Half => "half",
            NoteType::Quarter => "quarter",
            NoteType::Eighth => "eighth",
            NoteType::Sixteenth => "16th",
        }
    }

    /// Parse a MusicXML `<type>` value
    pub fn from_xml_name(s: &str) -> Option<NoteType> {
        match s.trim() {
            "whole" => Some(NoteType::Whole),
            "half" => Some(NoteType::Half),
            "quarter" => Some(NoteType::Quarter),
            "eighth" => Some(NoteType::Eighth),
            "16th" | "sixteenth" => Some(NoteType::Sixteenth),
            _ => None,
        }
    }

    /// Closest note type for a `<duration>` measured at the given `<divisions>`
    ///
    /// Durations are rescaled to [`DIVISIONS_PER_QUARTER`] and snapped down to
    /// the longest note type that fits; anything shorter becomes a sixteenth.
    pub fn from_duration(duration: u32, divisions: u32) -> NoteType {
        if divisions == 0 {
            return NoteType::Quarter;
        }
        let scaled = (duration as u64 * DIVISIONS_PER_QUARTER as u64) / divisions as u64;
        [
            NoteType::Whole,
            NoteType::Half,
            NoteType::Quarter,
            NoteType::Eighth,
        ]
        .into_iter()
        .find(|t| scaled >= t.divisions() as u64)
        .unwrap_or(NoteType::Sixteenth)
    }
}
