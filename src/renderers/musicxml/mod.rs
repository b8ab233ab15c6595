//! MusicXML export
//!
//! Writes a [`Document`] as a single-part `score-partwise` MusicXML 3.1
//! document. Only the modeled subset is written: pitch, duration and note
//! type, and per-measure attributes (divisions, key, time, clef).

pub mod builder;

use crate::models::Document;
pub use builder::MusicXmlBuilder;

/// Media type for the MusicXML download
pub const MUSICXML_MIME_TYPE: &str = "application/vnd.recordare.musicxml+xml";

/// Export a document to MusicXML text
pub fn to_musicxml(document: &Document) -> String {
    let mut builder = MusicXmlBuilder::new();
    builder.set_title(document.title.clone());
    builder.set_composer(document.composer.clone());
    builder.set_part_name("Music");

    for measure in &document.measures {
        builder.start_measure(measure.number);
        if let Some(attributes) = &measure.attributes {
            builder.write_attributes(attributes);
        }
        for note in &measure.notes {
            builder.write_note(note);
        }
        builder.end_measure();
    }

    let xml = builder.finalize();
    log::debug!(
        "MusicXML generated: {} measures, {} bytes",
        document.measures.len(),
        xml.len()
    );
    xml
}
