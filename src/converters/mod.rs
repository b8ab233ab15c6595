//! Format converters
//!
//! This module contains converters from external notation formats into the
//! Document model.

pub mod musicxml;

// Re-export for convenience
pub use musicxml::{parse_musicxml, MusicXmlError};
