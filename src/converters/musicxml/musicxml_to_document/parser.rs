//! MusicXML parser implementation
//!
//! Converts MusicXML XML into the Document model using roxmltree.

use roxmltree::{Document as XmlDocument, Node, ParsingOptions};
use thiserror::Error;
use crate::models::{
    Attributes, Clef, Document, KeySignature, Measure, Note, NoteType, Pitch, Step,
    TimeSignature, DIVISIONS_PER_QUARTER,
};

/// Result type for MusicXML parsing operations
pub type MusicXmlResult<T> = Result<T, MusicXmlError>;

/// Fatal MusicXML parsing errors
#[derive(Debug, Clone, Error)]
pub enum MusicXmlError {
    /// XML is malformed (not well-formed)
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    /// MusicXML format not supported (e.g., timewise instead of partwise)
    #[error("Unsupported MusicXML format: {0}")]
    UnsupportedFormat(String),

    /// Required structural element is missing
    #[error("Missing required element: {0}")]
    MissingElement(String),
}

/// Parse a MusicXML string into a Document
pub fn parse_musicxml(xml_string: &str) -> MusicXmlResult<Document> {
    // Exported scores carry the MusicXML DOCTYPE, often split over several lines
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = XmlDocument::parse_with_options(xml_string, options)
        .map_err(|e| MusicXmlError::InvalidXml(e.to_string()))?;

    let root = doc.root_element();
    match root.tag_name().name() {
        "score-partwise" => parse_score_partwise(root),
        "score-timewise" => Err(MusicXmlError::UnsupportedFormat(
            "score-timewise (use score-partwise instead)".to_string(),
        )),
        other => Err(MusicXmlError::UnsupportedFormat(format!(
            "unexpected root element <{}>",
            other
        ))),
    }
}

fn parse_score_partwise(root: Node) -> MusicXmlResult<Document> {
    let mut parts = children_named(root, "part");
    let part = parts
        .next()
        .ok_or_else(|| MusicXmlError::MissingElement("part".to_string()))?;
    let extra_parts = parts.count();
    if extra_parts > 0 {
        log::warn!("ignoring {} additional parts, only the first part is read", extra_parts);
    }

    let mut state = AttributeState::default();
    let measures = children_named(part, "measure")
        .enumerate()
        .map(|(index, node)| parse_measure(node, index, &mut state))
        .collect();

    Ok(Document {
        title: parse_title(root),
        composer: parse_composer(root),
        measures,
    })
}

fn parse_title(root: Node) -> Option<String> {
    child_text(root, "movement-title")
        .or_else(|| child(root, "work").and_then(|w| child_text(w, "work-title")))
        .filter(|t| !t.is_empty())
}

fn parse_composer(root: Node) -> Option<String> {
    child(root, "identification")
        .into_iter()
        .flat_map(|id| children_named(id, "creator"))
        .find(|c| c.attribute("type") == Some("composer"))
        .and_then(|c| c.text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Attributes in effect at the current point of the part.
/// MusicXML only restates what changes, so each measure inherits the rest.
/// The voice kept is the first one seen in the part, not per measure.
struct AttributeState {
    source_divisions: u32,
    current: Attributes,
    voice: Option<String>,
}

impl Default for AttributeState {
    fn default() -> Self {
        Self {
            source_divisions: 1,
            current: Attributes::default(),
            voice: None,
        }
    }
}

fn parse_measure(node: Node, index: usize, state: &mut AttributeState) -> Measure {
    let number = node
        .attribute("number")
        .and_then(|n| n.trim().parse::<u32>().ok())
        .unwrap_or(index as u32 + 1);

    let mut attributes = None;
    let mut notes = Vec::new();

    for child in node.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "attributes" => {
                apply_attributes(child, state);
                attributes = Some(state.current.clone());
            }
            "note" => {
                if let Some(note) = parse_note(child, state) {
                    notes.push(note);
                }
            }
            _ => {
                // backup, forward, direction, barline, print, ... are not modeled
            }
        }
    }

    Measure {
        number,
        attributes,
        notes,
    }
}

fn apply_attributes(node: Node, state: &mut AttributeState) {
    if let Some(divisions) = child_text(node, "divisions").and_then(|t| t.parse::<u32>().ok()) {
        if divisions > 0 {
            state.source_divisions = divisions;
        }
    }
    // Notes are re-expressed at the model resolution
    state.current.divisions = DIVISIONS_PER_QUARTER;

    if let Some(key) = child(node, "key") {
        let fifths = child_text(key, "fifths")
            .and_then(|t| t.parse::<i32>().ok())
            .unwrap_or(0);
        let mut signature = KeySignature::new(fifths);
        signature.mode = child_text(key, "mode");
        state.current.key = signature;
    }

    if let Some(time) = child(node, "time") {
        let beats = child_text(time, "beats").and_then(|t| t.parse::<u32>().ok());
        let beat_type = child_text(time, "beat-type").and_then(|t| t.parse::<u32>().ok());
        if let (Some(beats), Some(beat_type)) = (beats, beat_type) {
            state.current.time = TimeSignature { beats, beat_type };
        }
    }

    if let Some(clef) = child(node, "clef") {
        let default = Clef::default();
        state.current.clef = Clef {
            sign: child_text(clef, "sign").unwrap_or(default.sign),
            line: child_text(clef, "line")
                .and_then(|t| t.parse::<u32>().ok())
                .unwrap_or(default.line),
        };
    }
}

fn parse_note(node: Node, state: &mut AttributeState) -> Option<Note> {
    if has_child(node, "grace") {
        log::debug!("skipping grace note");
        return None;
    }
    if has_child(node, "chord") {
        log::debug!("skipping chord member, only the first note of a chord is kept");
        return None;
    }
    if let Some(voice) = child_text(node, "voice") {
        let first = state.voice.get_or_insert_with(|| voice.clone());
        if *first != voice {
            log::debug!("skipping note in voice {}", voice);
            return None;
        }
    }

    let note_type = child_text(node, "type")
        .and_then(|t| NoteType::from_xml_name(&t))
        .or_else(|| {
            child_text(node, "duration")
                .and_then(|t| t.parse::<u32>().ok())
                .map(|d| NoteType::from_duration(d, state.source_divisions))
        })
        .unwrap_or_default();

    let pitch = if has_child(node, "rest") {
        None
    } else {
        child(node, "pitch").and_then(parse_pitch)
    };

    Some(Note { pitch, note_type })
}

fn parse_pitch(node: Node) -> Option<Pitch> {
    let step = child_text(node, "step").map(|s| Step::from_letter_lenient(&s))?;

    // MusicXML allows decimal alters for microtones; round to the nearest semitone
    let alter = child_text(node, "alter")
        .and_then(|t| t.parse::<f64>().ok())
        .map(|a| a.round() as i32)
        .unwrap_or(0);

    let octave = match child_text(node, "octave").and_then(|t| t.parse::<i32>().ok()) {
        Some(octave) => octave,
        None => {
            log::warn!("pitch without a readable octave, treating note as unpitched");
            return None;
        }
    };

    Some(Pitch { step, alter, octave })
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.tag_name().name() == name)
}

fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.tag_name().name() == name)
}

fn has_child(node: Node, name: &str) -> bool {
    child(node, name).is_some()
}

fn child_text(node: Node, name: &str) -> Option<String> {
    child(node, name)
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
}
