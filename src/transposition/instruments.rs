//! Instrument transposition table
//!
//! Each instrument reads parts written a fixed number of semitones away from
//! concert pitch. The offset is what a concert-pitch part must be moved by to
//! produce the instrument's written part.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentFamily {
    Woodwind,
    Brass,
    String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instrument {
    // Woodwinds
    BbClarinet,
    EbAltoSax,
    BbTenorSax,
    EbBaritoneSax,
    BbSopranoSax,
    FFrenchHorn,

    // Brass
    BbTrumpet,
    BbFlugelhorn,
    BbTrombone,
    EbTuba,
    FTuba,
    BbEuphonium,

    // Strings
    Violin,
    Viola,
    Cello,
    DoubleBass,
    Guitar,
    BassGuitar,
}

impl Instrument {
    pub const ALL: [Instrument; 18] = [
        Instrument::BbClarinet,
        Instrument::EbAltoSax,
        Instrument::BbTenorSax,
        Instrument::EbBaritoneSax,
        Instrument::BbSopranoSax,
        Instrument::FFrenchHorn,
        Instrument::BbTrumpet,
        Instrument::BbFlugelhorn,
        Instrument::BbTrombone,
        Instrument::EbTuba,
        Instrument::FTuba,
        Instrument::BbEuphonium,
        Instrument::Violin,
        Instrument::Viola,
        Instrument::Cello,
        Instrument::DoubleBass,
        Instrument::Guitar,
        Instrument::BassGuitar,
    ];

    /// Display name as shown in the instrument picker
    pub fn name(self) -> &'static str {
        match self {
            Instrument::BbClarinet => "Bb Clarinet",
            Instrument::EbAltoSax => "Eb Alto Sax",
            Instrument::BbTenorSax => "Bb Tenor Sax",
            Instrument::EbBaritoneSax => "Eb Baritone Sax",
            Instrument::BbSopranoSax => "Bb Soprano Sax",
            Instrument::FFrenchHorn => "F French Horn",
            Instrument::BbTrumpet => "Bb Trumpet",
            Instrument::BbFlugelhorn => "Bb Flugelhorn",
            Instrument::BbTrombone => "Bb Trombone",
            Instrument::EbTuba => "Eb Tuba",
            Instrument::FTuba => "F Tuba",
            Instrument::BbEuphonium => "Bb Euphonium",
            Instrument::Violin => "Violin",
            Instrument::Viola => "Viola",
            Instrument::Cello => "Cello",
            Instrument::DoubleBass => "Double Bass",
            Instrument::Guitar => "Guitar",
            Instrument::BassGuitar => "Bass Guitar",
        }
    }

    /// Semitones from concert pitch to written pitch
    pub fn semitones(self) -> i32 {
        match self {
            Instrument::BbClarinet => 2,
            Instrument::EbAltoSax => 9,
            Instrument::BbTenorSax => 14,
            Instrument::EbBaritoneSax => 21,
            Instrument::BbSopranoSax => 2,
            Instrument::FFrenchHorn => 7,
            Instrument::BbTrumpet => 2,
            Instrument::BbFlugelhorn => 2,
            Instrument::BbTrombone => 0,
            Instrument::EbTuba => 9,
            Instrument::FTuba => 7,
            Instrument::BbEuphonium => 2,
            Instrument::Violin
            | Instrument::Viola
            | Instrument::Cello
            | Instrument::DoubleBass
            | Instrument::Guitar
            | Instrument::BassGuitar => 0,
        }
    }

    pub fn family(self) -> InstrumentFamily {
        match self {
            Instrument::BbClarinet
            | Instrument::EbAltoSax
            | Instrument::BbTenorSax
            | Instrument::EbBaritoneSax
            | Instrument::BbSopranoSax
            | Instrument::FFrenchHorn => InstrumentFamily::Woodwind,
            Instrument::BbTrumpet
            | Instrument::BbFlugelhorn
            | Instrument::BbTrombone
            | Instrument::EbTuba
            | Instrument::FTuba
            | Instrument::BbEuphonium => InstrumentFamily::Brass,
            Instrument::Violin
            | Instrument::Viola
            | Instrument::Cello
            | Instrument::DoubleBass
            | Instrument::Guitar
            | Instrument::BassGuitar => InstrumentFamily::String,
        }
    }

    /// Look up an instrument by display name.
    ///
    /// Matching ignores case and surrounding whitespace, and accepts the
    /// Unicode flat sign ("B♭ Clarinet").
    pub fn from_name(name: &str) -> Option<Instrument> {
        let wanted = normalize_name(name);
        Instrument::ALL
            .into_iter()
            .find(|i| normalize_name(i.name()) == wanted)
    }

    pub fn info(self) -> InstrumentInfo {
        InstrumentInfo {
            name: self.name().to_string(),
            family: self.family(),
            semitones: self.semitones(),
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .replace('♭', "b")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Semitone offset for an instrument name; unknown names transpose by 0
pub fn semitones_for(name: &str) -> i32 {
    match Instrument::from_name(name) {
        Some(instrument) => instrument.semitones(),
        None => {
            log::debug!("unknown instrument {:?}, leaving at concert pitch", name);
            0
        }
    }
}

/// Serializable row of the instrument table, for the instrument picker
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstrumentInfo {
    pub name: String,
    pub family: InstrumentFamily,
    pub semitones: i32,
}

/// The full instrument table in picker order
pub fn instrument_table() -> Vec<InstrumentInfo> {
    Instrument::ALL.into_iter().map(Instrument::info).collect()
}
