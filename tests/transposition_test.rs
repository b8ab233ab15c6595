// Test document transposition laws and instrument table scenarios

use transposer_wasm::models::{Attributes, Document, KeySignature, Note, NoteType, Pitch, Step};
use transposer_wasm::transposition::{
    instrument_table, semitones_for, transpose, transpose_for_instrument, transpose_key, transpose_pitch,
};

fn chromatic_melody() -> Document {
    let mut notes = Vec::new();
    for octave in [2, 4, 6] {
        for step in [Step::C, Step::D, Step::E, Step::F, Step::G, Step::A, Step::B] {
            for alter in [-1, 0, 1] {
                notes.push(Note::new(Pitch::new(step, alter, octave), NoteType::Eighth));
            }
        }
    }
    notes.push(Note::rest(NoteType::Half));

    let mut doc = Document::from_notes(notes, 8, Attributes::default());
    doc.title = Some("Chromatic Study".to_string());
    doc
}

fn midi_values(doc: &Document) -> Vec<Option<i64>> {
    doc.notes().map(|n| n.pitch.map(|p| p.midi_number())).collect()
}

#[test]
fn test_value_round_trip_per_pitch() {
    for note in chromatic_melody().notes() {
        let Some(pitch) = note.pitch else { continue };
        for semitones in -30..=30 {
            let moved = transpose_pitch(&pitch, semitones);
            assert_eq!(moved.midi_number(), pitch.midi_number() + semitones as i64);
        }
    }
}

#[test]
fn test_composite_round_trip() {
    let doc = chromatic_melody();
    for n in [-14, -7, -1, 1, 2, 9, 21] {
        let back = transpose(&transpose(&doc, n), -n);
        assert_eq!(midi_values(&back), midi_values(&doc), "n = {}", n);
    }
}

#[test]
fn test_identity_keeps_spelling() {
    let doc = chromatic_melody();
    assert_eq!(transpose(&doc, 0), doc);
}

#[test]
fn test_key_always_in_range() {
    for fifths in -7..=7 {
        for semitones in -24..=24 {
            let key = transpose_key(&KeySignature::new(fifths), semitones);
            assert!((-7..=7).contains(&key.fifths()), "{} by {}", fifths, semitones);
        }
    }
}

#[test]
fn test_unknown_instrument_is_noop() {
    let doc = chromatic_melody();
    assert_eq!(transpose_for_instrument(&doc, "Theremin"), doc);
    assert_eq!(transpose_for_instrument(&doc, "Theremin"), transpose(&doc, 0));
}

#[test]
fn test_concrete_pitch_scenarios() {
    assert_eq!(
        transpose_pitch(&Pitch::natural(Step::C, 4), 2),
        Pitch::natural(Step::D, 4)
    );
    let alto = transpose_pitch(&Pitch::new(Step::B, -1, 4), semitones_for("Eb Alto Sax"));
    assert_eq!(alto.midi_number(), 79);
    assert_eq!(alto, Pitch::new(Step::G, 1, 5));
}

#[test]
fn test_trumpet_part_in_d_major() {
    let doc = chromatic_melody();
    assert_eq!(doc.key().fifths(), 0);
    let trumpet = transpose_for_instrument(&doc, "Bb Trumpet");
    assert_eq!(trumpet.key().fifths(), 2);
    assert_eq!(trumpet.title, doc.title);
    assert_eq!(trumpet.measures.len(), doc.measures.len());
}

#[test]
fn test_every_instrument_matches_its_offset() {
    let doc = chromatic_melody();
    for info in instrument_table() {
        let by_name = transpose_for_instrument(&doc, &info.name);
        assert_eq!(by_name, transpose(&doc, info.semitones), "{}", info.name);
    }
}
