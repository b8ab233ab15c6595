//! Sheet Music Transposer WASM Module
//!
//! Core of the transposer: pitch and key transposition, the instrument
//! table, MusicXML import/export and Standard MIDI File export. The
//! JavaScript-facing functions live in [`api`].

pub mod models;
pub mod transposition;
pub mod converters;
pub mod renderers;
pub mod pipeline;
pub mod api;

// Re-export commonly used types
pub use models::{Attributes, Document, KeySignature, Measure, Note, NoteType, Pitch, Step};
pub use transposition::{
    instrument_table, semitones_for, transpose, transpose_for_instrument, transpose_key,
    transpose_pitch, Instrument,
};
pub use converters::{parse_musicxml, MusicXmlError};
pub use renderers::midi::{encode, encode_with, EncodingError, MidiSettings};
pub use renderers::musicxml::to_musicxml;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("[WASM] logger already initialized: {}", e).into());
        }
    }

    log::info!("Sheet music transposer WASM module initialized");
}
