//! MusicXML format converters
//!
//! This module contains converters for MusicXML format.

pub mod musicxml_to_document;

// Re-export for convenience
pub use musicxml_to_document::{parse_musicxml, MusicXmlError, MusicXmlResult};
