//! Default values for MIDI export
//!
//! The encoder writes a single monophonic track; these defaults give the
//! fixed resolution, velocity and channel used by the download.

use serde::{Deserialize, Serialize};
use crate::models::DIVISIONS_PER_QUARTER;

/// Default ticks per quarter note (MIDI header division)
pub const DEFAULT_TPQ: u16 = 96;

/// Default MIDI note-on velocity
pub const DEFAULT_VELOCITY: u8 = 100;

/// Default MIDI channel (0-15)
pub const DEFAULT_CHANNEL: u8 = 0;

/// Encoder settings, overridable from the host page
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MidiSettings {
    pub ticks_per_quarter: u16,
    pub velocity: u8,
    pub channel: u8,
}

impl Default for MidiSettings {
    fn default() -> Self {
        Self {
            ticks_per_quarter: DEFAULT_TPQ,
            velocity: DEFAULT_VELOCITY,
            channel: DEFAULT_CHANNEL,
        }
    }
}

impl MidiSettings {
    /// Settings with every field forced into its valid MIDI range
    pub fn sanitized(self) -> Self {
        Self {
            ticks_per_quarter: if self.ticks_per_quarter == 0 {
                DEFAULT_TPQ
            } else {
                self.ticks_per_quarter.min(0x7FFF)
            },
            velocity: self.velocity.min(127),
            channel: self.channel.min(15),
        }
    }

    /// Ticks for a duration measured in model divisions
    pub fn divisions_to_ticks(&self, divisions: u32) -> u32 {
        let num = divisions as u64 * self.ticks_per_quarter as u64;
        (num / DIVISIONS_PER_QUARTER as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = MidiSettings::default();
        assert_eq!(settings.ticks_per_quarter, 96);
        assert_eq!(settings.velocity, 100);
        assert_eq!(settings.channel, 0);
    }

    #[test]
    fn test_divisions_to_ticks() {
        let settings = MidiSettings::default();
        assert_eq!(settings.divisions_to_ticks(16), 384); // whole
        assert_eq!(settings.divisions_to_ticks(8), 192); // half
        assert_eq!(settings.divisions_to_ticks(4), 96); // quarter
        assert_eq!(settings.divisions_to_ticks(2), 48); // eighth
        assert_eq!(settings.divisions_to_ticks(1), 24); // sixteenth
    }

    #[test]
    fn test_sanitized() {
        let settings = MidiSettings {
            ticks_per_quarter: 0,
            velocity: 200,
            channel: 20,
        }
        .sanitized();
        assert_eq!(settings, MidiSettings { ticks_per_quarter: 96, velocity: 127, channel: 15 });
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: MidiSettings = serde_json::from_str(r#"{"ticksPerQuarter": 480}"#).unwrap();
        assert_eq!(settings.ticks_per_quarter, 480);
        assert_eq!(settings.velocity, 100);
    }
}
