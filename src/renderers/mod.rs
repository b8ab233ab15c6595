//! Renderers module for the sheet music transposer
//!
//! This module contains export logic for converting a score into
//! downloadable formats.

pub mod midi;
pub mod musicxml;
