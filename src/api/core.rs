//! Document and transposition operations for the WASM API
//!
//! Every transposition returns a new document; the loaded document is only
//! replaced by `loadDocument` / `loadMusicXML`.

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, loaded_document, serialize, store_document, to_js_error};
use crate::converters::parse_musicxml;
use crate::models::Document;
use crate::transposition::{instrument_table, semitones_for, transpose, transpose_for_instrument, Instrument};
use crate::{wasm_info, wasm_log, wasm_warn};

// ============================================================================
// Loaded Document
// ============================================================================

/// Load a document (plain JS object) as the current score
#[wasm_bindgen(js_name = loadDocument)]
pub fn load_document(document_js: JsValue) -> Result<(), JsValue> {
    let document: Document = deserialize(document_js, "Invalid document")?;
    wasm_info!(
        "loadDocument: {} measures, {} notes",
        document.measures.len(),
        document.notes().count()
    );
    store_document(document)
}

/// Parse MusicXML and load it as the current score
///
/// # Returns
/// The parsed document as a JS object
#[wasm_bindgen(js_name = loadMusicXML)]
pub fn load_musicxml(xml: &str) -> Result<JsValue, JsValue> {
    wasm_info!("loadMusicXML called with {} bytes", xml.len());

    let document = parse_musicxml(xml).map_err(|e| to_js_error("MusicXML import error", e))?;
    wasm_log!("  Parsed {} measures", document.measures.len());

    let js = serialize(&document, "Failed to serialize document")?;
    store_document(document)?;
    Ok(js)
}

/// Return the current score as a JS object
#[wasm_bindgen(js_name = getDocument)]
pub fn get_document() -> Result<JsValue, JsValue> {
    let document = loaded_document()?;
    serialize(&document, "Failed to serialize document")
}

// ============================================================================
// Transposition
// ============================================================================

/// Transpose a document by a signed number of semitones
#[wasm_bindgen(js_name = transposeDocument)]
pub fn transpose_document(document_js: JsValue, semitones: i32) -> Result<JsValue, JsValue> {
    let document: Document = deserialize(document_js, "Invalid document")?;
    wasm_info!("transposeDocument by {} semitones", semitones);

    let transposed = transpose(&document, semitones);
    serialize(&transposed, "Failed to serialize transposed document")
}

/// Transpose a concert-pitch document into the written part for an instrument
///
/// Unknown instrument names leave the document at concert pitch.
#[wasm_bindgen(js_name = transposeForInstrument)]
pub fn transpose_document_for_instrument(document_js: JsValue, instrument: &str) -> Result<JsValue, JsValue> {
    let document: Document = deserialize(document_js, "Invalid document")?;
    if Instrument::from_name(instrument).is_none() {
        wasm_warn!("Unknown instrument '{}', leaving at concert pitch", instrument);
    }

    let transposed = transpose_for_instrument(&document, instrument);
    serialize(&transposed, "Failed to serialize transposed document")
}

/// The instrument table: `[{ name, family, semitones }]`
#[wasm_bindgen(js_name = listInstruments)]
pub fn list_instruments() -> Result<JsValue, JsValue> {
    serialize(&instrument_table(), "Failed to serialize instrument table")
}

/// Semitone offset for an instrument name (0 when unknown)
#[wasm_bindgen(js_name = instrumentOffset)]
pub fn instrument_offset(instrument: &str) -> i32 {
    semitones_for(instrument)
}
