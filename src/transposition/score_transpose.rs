//! Whole-document transposition
//!
//! Builds a new [`Document`] with every pitch and every key signature moved
//! by the same offset. The input is never modified; rests, durations, time
//! signatures, clefs and metadata are carried over as they are.

use crate::models::{Attributes, Document, Measure, Note};
use super::instruments::semitones_for;
use super::lookup_table::transpose_key;
use super::semitone_transpose::transpose_pitch;

/// Transpose every note and key signature of `document` by `semitones`
pub fn transpose(document: &Document, semitones: i32) -> Document {
    Document {
        title: document.title.clone(),
        composer: document.composer.clone(),
        measures: document
            .measures
            .iter()
            .map(|m| transpose_measure(m, semitones))
            .collect(),
    }
}

/// Transpose a concert-pitch document into the written part for `instrument`.
/// Unknown instrument names leave the document at concert pitch.
pub fn transpose_for_instrument(document: &Document, instrument: &str) -> Document {
    let semitones = semitones_for(instrument);
    log::info!("transposing for {:?} by {} semitones", instrument, semitones);
    transpose(document, semitones)
}

fn transpose_measure(measure: &Measure, semitones: i32) -> Measure {
    Measure {
        number: measure.number,
        attributes: measure
            .attributes
            .as_ref()
            .map(|a| transpose_attributes(a, semitones)),
        notes: measure
            .notes
            .iter()
            .map(|n| transpose_note(n, semitones))
            .collect(),
    }
}

fn transpose_attributes(attributes: &Attributes, semitones: i32) -> Attributes {
    Attributes {
        key: transpose_key(&attributes.key, semitones),
        ..attributes.clone()
    }
}

fn transpose_note(note: &Note, semitones: i32) -> Note {
    Note {
        pitch: note.pitch.map(|p| transpose_pitch(&p, semitones)),
        note_type: note.note_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KeySignature, NoteType, Pitch, Step};

    fn sample(fifths: i32) -> Document {
        let notes = vec![
            Note::new(Pitch::natural(Step::C, 4), NoteType::Quarter),
            Note::new(Pitch::new(Step::B, -1, 4), NoteType::Eighth),
            Note::rest(NoteType::Quarter),
            Note::new(Pitch::new(Step::F, 1, 5), NoteType::Half),
            Note::new(Pitch::natural(Step::A, 3), NoteType::Whole),
        ];
        let attributes = Attributes {
            key: KeySignature::new(fifths),
            ..Attributes::default()
        };
        let mut doc = Document::from_notes(notes, 3, attributes);
        doc.title = Some("Sample".to_string());
        doc.composer = Some("Anon".to_string());
        doc
    }

    fn midi_values(doc: &Document) -> Vec<Option<i64>> {
        doc.notes().map(|n| n.pitch.map(|p| p.midi_number())).collect()
    }

    #[test]
    fn test_zero_is_identity() {
        let doc = sample(-2);
        assert_eq!(transpose(&doc, 0), doc);
    }

    #[test]
    fn test_shifts_every_pitch() {
        let doc = sample(0);
        let up = transpose(&doc, 5);
        let expected: Vec<Option<i64>> = midi_values(&doc)
            .into_iter()
            .map(|v| v.map(|m| m + 5))
            .collect();
        assert_eq!(midi_values(&up), expected);
    }

    #[test]
    fn test_round_trip_restores_values() {
        let doc = sample(1);
        for n in [-25, -7, -1, 1, 3, 11, 14, 21] {
            let back = transpose(&transpose(&doc, n), -n);
            assert_eq!(midi_values(&back), midi_values(&doc), "offset {}", n);
        }
    }

    #[test]
    fn test_rests_and_durations_preserved() {
        let doc = sample(0);
        let up = transpose(&doc, 3);
        let types: Vec<NoteType> = up.notes().map(|n| n.note_type).collect();
        let original: Vec<NoteType> = doc.notes().map(|n| n.note_type).collect();
        assert_eq!(types, original);
        assert!(up.measures[0].notes[2].is_rest());
    }

    #[test]
    fn test_key_and_metadata() {
        let doc = sample(0);
        let up = transpose(&doc, 2);
        assert_eq!(up.key().fifths(), 2);
        assert_eq!(up.title.as_deref(), Some("Sample"));
        assert_eq!(up.composer.as_deref(), Some("Anon"));
        assert_eq!(up.measures[0].attributes.as_ref().unwrap().time, doc.measures[0].attributes.as_ref().unwrap().time);
        assert_eq!(up.measures[1].number, 2);
    }

    #[test]
    fn test_input_not_mutated() {
        let doc = sample(0);
        let before = doc.clone();
        let _ = transpose(&doc, 7);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_bb_trumpet_from_c_major() {
        let doc = sample(0);
        let part = transpose_for_instrument(&doc, "Bb Trumpet");
        assert_eq!(part.key().fifths(), 2);
        assert_eq!(part.measures[0].notes[0].pitch, Some(Pitch::natural(Step::D, 4)));
    }

    #[test]
    fn test_unknown_instrument_is_noop() {
        let doc = sample(3);
        assert_eq!(transpose_for_instrument(&doc, "Theremin"), doc);
        assert_eq!(transpose_for_instrument(&doc, "Theremin"), transpose(&doc, 0));
    }
}
