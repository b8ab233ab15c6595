//! Note-to-MIDI conversion
//!
//! Turns model notes into the lean `MidiNote` list the SMF writer consumes.
//! Notes that cannot be played (rests, missing pitch, pitches outside the
//! MIDI key range) are dropped here.

use crate::models::Note;
use super::defaults::MidiSettings;

/// One playable note: MIDI key and length in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiNote {
    pub key: u8,
    pub ticks: u32,
}

/// Convert notes in playing order, skipping the ones without a playable key
pub fn notes_to_midi<'a, I>(notes: I, settings: &MidiSettings) -> Vec<MidiNote>
where
    I: IntoIterator<Item = &'a Note>,
{
    let mut skipped = 0usize;
    let midi_notes: Vec<MidiNote> = notes
        .into_iter()
        .filter_map(|note| {
            let converted = note_to_midi(note, settings);
            if converted.is_none() {
                skipped += 1;
            }
            converted
        })
        .collect();

    if skipped > 0 {
        log::debug!("skipped {} notes without a playable pitch", skipped);
    }
    midi_notes
}

fn note_to_midi(note: &Note, settings: &MidiSettings) -> Option<MidiNote> {
    let pitch = note.pitch?;
    let key = u8::try_from(pitch.midi_number()).ok().filter(|k| *k <= 127)?;
    Some(MidiNote {
        key,
        ticks: settings.divisions_to_ticks(note.duration()),
    })
}
