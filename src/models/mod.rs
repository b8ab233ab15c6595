//! Models module for the sheet music transposer
//!
//! This module contains the value types shared by the transposer, the
//! MusicXML converters and the MIDI encoder.

pub mod attributes;
pub mod document;
pub mod duration;
pub mod pitch;
pub mod serde_helpers;

// Re-export commonly used types
pub use attributes::{Attributes, Clef, KeySignature, TimeSignature, MAX_FIFTHS};
pub use document::{Document, Measure, Note};
pub use duration::{NoteType, DIVISIONS_PER_QUARTER};
pub use pitch::{Pitch, Step};
