//! Sheet music transposer WASM API
//!
//! This module provides the JavaScript-facing API. It is thin glue over the
//! pure transposition, MusicXML and MIDI modules.
//!
//! # Module Structure
//!
//! - `helpers`: logging macros, serde conversion, the loaded-document store
//! - `core`: document loading and transposition
//! - `export`: MIDI and MusicXML downloads

pub mod helpers;
pub mod core;
pub mod export;

pub use core::{
    get_document, instrument_offset, list_instruments, load_document, load_musicxml,
    transpose_document, transpose_document_for_instrument,
};
pub use export::{export_loaded_midi, export_midi, export_musicxml, transpose_musicxml};
