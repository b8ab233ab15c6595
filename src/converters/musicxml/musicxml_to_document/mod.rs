//! MusicXML to Document converter
//!
//! Reads the first part of a `score-partwise` MusicXML document into the
//! single-part [`Document`](crate::models::Document) model.
//!
//! # Architecture
//!
//! ```text
//! MusicXML String
//!   ↓ [Parse with roxmltree]
//! XML DOM
//!   ↓ [Extract pitch, type, attributes, metadata]
//! Document
//! ```
//!
//! Only the modeled subset is read. Chord members, grace notes and notes in
//! voices other than the first are dropped so the result stays monophonic.

pub mod parser;

pub use parser::{parse_musicxml, MusicXmlError, MusicXmlResult};
