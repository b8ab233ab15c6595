//! MIDI byte-stream encoder
//!
//! Serializes a note sequence as a minimal Standard MIDI File: format 0, one
//! track, division 96 by default. Each playable note becomes a note-on at
//! delta 0 followed by a note-off after the note's length, so the output is
//! strictly monophonic.
//!
//! Rests, pitchless notes and pitches outside the MIDI key range are skipped
//! without adding any time, so a score with rests plays back shorter than
//! written and the notes after a rest start early.
//!
//! # Usage
//! ```rust
//! use transposer_wasm::models::{Note, NoteType, Pitch, Step};
//! use transposer_wasm::renderers::midi::encode;
//!
//! let notes = vec![Note::new(Pitch::natural(Step::C, 4), NoteType::Quarter)];
//! let bytes = encode(&notes).unwrap();
//! assert_eq!(&bytes[0..4], b"MThd");
//! ```

pub mod converter;
pub mod defaults;
mod write;

use thiserror::Error;
use crate::models::{Document, Note};

pub use converter::{notes_to_midi, MidiNote};
pub use defaults::{MidiSettings, DEFAULT_CHANNEL, DEFAULT_TPQ, DEFAULT_VELOCITY};
pub use write::write_smf;

/// Media type for the MIDI download
pub const MIDI_MIME_TYPE: &str = "audio/midi";

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("no note sequence provided")]
    MissingNotes,
    #[error("unreadable note sequence: {0}")]
    Unreadable(String),
    #[error("midi write error: {0}")]
    Midi(String),
}

pub type Result<T> = std::result::Result<T, EncodingError>;

/// Encode notes with the default settings (96 ticks per quarter, velocity 100, channel 0)
pub fn encode(notes: &[Note]) -> Result<Vec<u8>> {
    encode_with(notes, &MidiSettings::default())
}

/// Encode notes with explicit settings
pub fn encode_with(notes: &[Note], settings: &MidiSettings) -> Result<Vec<u8>> {
    let settings = settings.sanitized();
    let midi_notes = notes_to_midi(notes, &settings);
    let mut out = Vec::new();
    write_smf(&midi_notes, &settings, &mut out)?;
    Ok(out)
}

/// Encode the flattened note sequence of a document
pub fn encode_document(document: &Document, settings: &MidiSettings) -> Result<Vec<u8>> {
    let settings = settings.sanitized();
    let midi_notes = notes_to_midi(document.notes(), &settings);
    let mut out = Vec::new();
    write_smf(&midi_notes, &settings, &mut out)?;
    Ok(out)
}

/// Encode a JSON array of notes. `null` or malformed JSON is an error;
/// individual unplayable notes are not.
pub fn encode_json(json: &str) -> Result<Vec<u8>> {
    let notes: Option<Vec<Note>> =
        serde_json::from_str(json).map_err(|e| EncodingError::Unreadable(e.to_string()))?;
    let notes = notes.ok_or(EncodingError::MissingNotes)?;
    encode(&notes)
}
