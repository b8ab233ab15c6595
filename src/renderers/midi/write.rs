use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind};
use super::converter::MidiNote;
use super::defaults::MidiSettings;
use super::{EncodingError, Result};

/// Write notes as a Standard MIDI File, format 0 (single track)
pub fn write_smf(notes: &[MidiNote], settings: &MidiSettings, out: &mut Vec<u8>) -> Result<()> {
    let header = Header {
        format: Format::SingleTrack,
        timing: Timing::Metrical(settings.ticks_per_quarter.into()),
    };

    let smf = Smf {
        header,
        tracks: vec![build_track(notes, settings)],
    };

    smf.write(out)
        .map_err(|e| EncodingError::Midi(format!("Failed to write MIDI: {}", e)))?;

    Ok(())
}

/// Monophonic track: each note-on sits at delta 0 after the previous note-off,
/// each note-off follows its note-on by the note length.
fn build_track<'a>(notes: &[MidiNote], settings: &MidiSettings) -> Track<'a> {
    let mut events = Vec::with_capacity(notes.len() * 2 + 1);

    for note in notes {
        events.push(TrackEvent {
            delta: 0.into(),
            kind: TrackEventKind::Midi {
                channel: settings.channel.into(),
                message: MidiMessage::NoteOn {
                    key: note.key.into(),
                    vel: settings.velocity.into(),
                },
            },
        });

        events.push(TrackEvent {
            delta: note.ticks.into(),
            kind: TrackEventKind::Midi {
                channel: settings.channel.into(),
                message: MidiMessage::NoteOff {
                    key: note.key.into(),
                    vel: 0.into(),
                },
            },
        });
    }

    events.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    events
}
