//! Export operations for the WASM API
//!
//! This module provides functions to export scores to:
//! - MIDI: Standard MIDI File format 0 (`audio/midi`)
//! - MusicXML: single-part score-partwise text

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, loaded_document, to_js_error};
use crate::converters::parse_musicxml;
use crate::models::{Document, Note};
use crate::renderers::midi::{encode_document, encode_with, EncodingError, MidiSettings};
use crate::renderers::musicxml::to_musicxml;
use crate::transposition::transpose_for_instrument;
use crate::{wasm_error, wasm_info, wasm_log};

// ============================================================================
// MIDI Export
// ============================================================================

/// Encode a note array as MIDI
///
/// Notes without a pitch are skipped. A missing (`null`/`undefined`) or
/// unreadable array is an error.
///
/// # Returns
/// MIDI file as Uint8Array (Standard MIDI File format 0)
#[wasm_bindgen(js_name = exportMIDI)]
pub fn export_midi(notes_js: JsValue, settings_js: JsValue) -> Result<js_sys::Uint8Array, JsValue> {
    if notes_js.is_null() || notes_js.is_undefined() {
        return Err(to_js_error("MIDI conversion error", EncodingError::MissingNotes));
    }
    let notes: Vec<Note> = serde_wasm_bindgen::from_value(notes_js)
        .map_err(|e| to_js_error("MIDI conversion error", EncodingError::Unreadable(e.to_string())))?;
    let settings = read_settings(settings_js)?;

    wasm_info!("exportMIDI called with {} notes, tpq={}", notes.len(), settings.ticks_per_quarter);

    let midi_bytes = encode_with(&notes, &settings).map_err(|e| {
        wasm_error!("MIDI conversion error: {}", e);
        JsValue::from_str(&format!("MIDI conversion error: {}", e))
    })?;

    Ok(to_uint8_array(&midi_bytes))
}

/// Encode the loaded document as MIDI
#[wasm_bindgen(js_name = exportLoadedMIDI)]
pub fn export_loaded_midi(settings_js: JsValue) -> Result<js_sys::Uint8Array, JsValue> {
    let document = loaded_document()?;
    let settings = read_settings(settings_js)?;

    wasm_log!("  Document has {} measures", document.measures.len());

    let midi_bytes = encode_document(&document, &settings)
        .map_err(|e| to_js_error("MIDI conversion error", e))?;

    wasm_info!("  MIDI generated: {} bytes", midi_bytes.len());
    Ok(to_uint8_array(&midi_bytes))
}

fn read_settings(settings_js: JsValue) -> Result<MidiSettings, JsValue> {
    if settings_js.is_null() || settings_js.is_undefined() {
        Ok(MidiSettings::default())
    } else {
        deserialize(settings_js, "Invalid MIDI settings")
    }
}

fn to_uint8_array(bytes: &[u8]) -> js_sys::Uint8Array {
    let uint8_array = js_sys::Uint8Array::new_with_length(bytes.len() as u32);
    uint8_array.copy_from(bytes);
    uint8_array
}

// ============================================================================
// MusicXML Export
// ============================================================================

/// Export a document to MusicXML
///
/// # Returns
/// MusicXML string (XML format)
#[wasm_bindgen(js_name = exportMusicXML)]
pub fn export_musicxml(document_js: JsValue) -> Result<String, JsValue> {
    let document: Document = deserialize(document_js, "Invalid document")?;
    let musicxml = to_musicxml(&document);

    wasm_info!("  MusicXML generated: {} bytes", musicxml.len());
    Ok(musicxml)
}

/// Read MusicXML, transpose it for an instrument and write it back
#[wasm_bindgen(js_name = transposeMusicXML)]
pub fn transpose_musicxml(xml: &str, instrument: &str) -> Result<String, JsValue> {
    wasm_info!("transposeMusicXML called for '{}' ({} bytes)", instrument, xml.len());

    let document = parse_musicxml(xml).map_err(|e| to_js_error("MusicXML import error", e))?;
    let transposed = transpose_for_instrument(&document, instrument);
    Ok(to_musicxml(&transposed))
}
