// Test MusicXML export, re-import and transposition of MusicXML text

use transposer_wasm::converters::parse_musicxml;
use transposer_wasm::models::{Attributes, Clef, Document, KeySignature, Measure, Note, NoteType, Pitch, Step, TimeSignature};
use transposer_wasm::renderers::musicxml::to_musicxml;
use transposer_wasm::transposition::transpose_for_instrument;

fn sample_document() -> Document {
    let attributes = Attributes {
        divisions: 4,
        key: KeySignature::new(-2).with_mode("major"),
        time: TimeSignature { beats: 3, beat_type: 4 },
        clef: Clef::bass(),
    };
    Document {
        title: Some("Waltz & Reel".to_string()),
        composer: Some("Anon.".to_string()),
        measures: vec![
            Measure::new(
                1,
                vec![
                    Note::new(Pitch::new(Step::B, -1, 2), NoteType::Quarter),
                    Note::new(Pitch::natural(Step::D, 3), NoteType::Eighth),
                    Note::new(Pitch::new(Step::E, -1, 3), NoteType::Eighth),
                    Note::rest(NoteType::Quarter),
                ],
            )
            .with_attributes(attributes),
            Measure::new(
                2,
                vec![
                    Note::new(Pitch::new(Step::F, 1, 3), NoteType::Half),
                    Note::new(Pitch::natural(Step::G, 3), NoteType::Sixteenth),
                ],
            ),
        ],
    }
}

#[test]
fn test_export_then_import_is_lossless() {
    let doc = sample_document();
    let xml = to_musicxml(&doc);
    let parsed = parse_musicxml(&xml).expect("exported MusicXML should parse");
    assert_eq!(parsed, doc);
}

#[test]
fn test_transposed_export_round_trips() {
    let sax = transpose_for_instrument(&sample_document(), "Eb Baritone Sax");
    let parsed = parse_musicxml(&to_musicxml(&sax)).unwrap();
    assert_eq!(parsed, sax);
}

#[test]
fn test_transpose_musicxml_text_for_clarinet() {
    let concert = to_musicxml(&sample_document());
    let parsed = parse_musicxml(&concert).unwrap();
    let clarinet_xml = to_musicxml(&transpose_for_instrument(&parsed, "Bb Clarinet"));

    // two flats up a whole step is C major
    assert!(clarinet_xml.contains("<fifths>0</fifths>"));
    assert!(clarinet_xml.contains("<step>C</step>"));
    assert!(clarinet_xml.contains("<movement-title>Waltz &amp; Reel</movement-title>"));
    assert_eq!(clarinet_xml.matches("<rest/>").count(), 1);
}
