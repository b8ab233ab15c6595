//! Score document: measures of monophonic notes plus metadata
//!
//! This is the value the recognizer produces and the transposer, MusicXML
//! writer and MIDI encoder consume. All operations on it return new values.

use serde::{Deserialize, Serialize};
use super::attributes::{Attributes, KeySignature};
use super::duration::NoteType;
use super::pitch::Pitch;

/// A single note. A note without a pitch is a rest (or unreadable input).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    pub pitch: Option<Pitch>,
    #[serde(default, rename = "type")]
    pub note_type: NoteType,
}

impl Note {
    pub fn new(pitch: Pitch, note_type: NoteType) -> Self {
        Self {
            pitch: Some(pitch),
            note_type,
        }
    }

    pub fn rest(note_type: NoteType) -> Self {
        Self {
            pitch: None,
            note_type,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.pitch.is_none()
    }

    /// Length in divisions
    pub fn duration(&self) -> u32 {
        self.note_type.divisions()
    }
}

/// One bar of music
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    pub number: u32,

    /// Present on the first measure, and on any later measure that changes them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,

    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Measure {
    pub fn new(number: u32, notes: Vec<Note>) -> Self {
        Self {
            number,
            attributes: None,
            notes,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

/// A single-part score
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub composer: Option<String>,
    #[serde(default)]
    pub measures: Vec<Measure>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattened note sequence in playing order
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.measures.iter().flat_map(|m| m.notes.iter())
    }

    /// Key signature of the first measure (C major when absent)
    pub fn key(&self) -> KeySignature {
        self.measures
            .first()
            .and_then(|m| m.attributes.as_ref())
            .map(|a| a.key.clone())
            .unwrap_or_default()
    }

    /// Split a flat note list into measures of `notes_per_measure` notes.
    /// The first measure receives `attributes`.
    pub fn from_notes(notes: Vec<Note>, notes_per_measure: usize, attributes: Attributes) -> Self {
        let per_measure = notes_per_measure.max(1);
        let measures = notes
            .chunks(per_measure)
            .enumerate()
            .map(|(i, chunk)| {
                let measure = Measure::new(i as u32 + 1, chunk.to_vec());
                if i == 0 {
                    measure.with_attributes(attributes.clone())
                } else {
                    measure
                }
            })
            .collect();

        Self {
            title: None,
            composer: None,
            measures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Step;

    fn c_major_run() -> Vec<Note> {
        [Step::C, Step::D, Step::E, Step::F, Step::G]
            .into_iter()
            .map(|s| Note::new(Pitch::natural(s, 4), NoteType::Quarter))
            .collect()
    }

    #[test]
    fn test_from_notes_splits_measures() {
        let doc = Document::from_notes(c_major_run(), 4, Attributes::default());
        assert_eq!(doc.measures.len(), 2);
        assert_eq!(doc.measures[0].number, 1);
        assert_eq!(doc.measures[1].number, 2);
        assert!(doc.measures[0].attributes.is_some());
        assert!(doc.measures[1].attributes.is_none());
        assert_eq!(doc.measures[1].notes.len(), 1);
    }

    #[test]
    fn test_notes_flatten_in_order() {
        let doc = Document::from_notes(c_major_run(), 2, Attributes::default());
        let steps: Vec<Step> = doc.notes().filter_map(|n| n.pitch).map(|p| p.step).collect();
        assert_eq!(steps, vec![Step::C, Step::D, Step::E, Step::F, Step::G]);
    }

    #[test]
    fn test_key_defaults_to_c() {
        assert_eq!(Document::new().key().fifths(), 0);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "title": "Scale",
            "measures": [{
                "number": 1,
                "attributes": {"divisions": 4, "key": {"fifths": -1}},
                "notes": [
                    {"pitch": {"step": "B", "alter": -1, "octave": 4}, "type": "half"},
                    {"type": "quarter"}
                ]
            }]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Scale"));
        assert_eq!(doc.key().fifths(), -1);
        let notes: Vec<&Note> = doc.notes().collect();
        assert_eq!(notes[0].pitch, Some(Pitch::new(Step::B, -1, 4)));
        assert_eq!(notes[0].duration(), 8);
        assert!(notes[1].is_rest());
    }
}
