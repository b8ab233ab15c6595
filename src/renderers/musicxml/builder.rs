// MusicXML builder state machine

use quick_xml::escape::escape;
use crate::models::{Attributes, Note, Pitch};

/// Part id used for the single exported part
const PART_ID: &str = "P1";

/// State machine for building single-part MusicXML documents
pub struct MusicXmlBuilder {
    buffer: String,
    measure_number: u32,
    measure_started: bool,
    title: Option<String>,
    composer: Option<String>,
    part_name: String,
}

impl MusicXmlBuilder {
    /// Create a new MusicXML builder
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            measure_number: 1,
            measure_started: false,
            title: None,
            composer: None,
            part_name: String::new(),
        }
    }

    /// Set the document title
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn set_composer(&mut self, composer: Option<String>) {
        self.composer = composer;
    }

    pub fn set_part_name(&mut self, name: &str) {
        self.part_name = name.to_string();
    }

    /// Start a measure with an explicit number, closing any open one
    pub fn start_measure(&mut self, number: u32) {
        if self.measure_started {
            self.end_measure();
        }
        self.measure_number = number;
        self.buffer
            .push_str(&format!("    <measure number=\"{}\">\n", self.measure_number));
        self.measure_started = true;
    }

    /// Close current measure and increment number
    pub fn end_measure(&mut self) {
        if !self.measure_started {
            return;
        }
        self.buffer.push_str("    </measure>\n");
        self.measure_number += 1;
        self.measure_started = false;
    }

    /// Write `<attributes>`: divisions, key, time and clef
    pub fn write_attributes(&mut self, attributes: &Attributes) {
        self.buffer.push_str("      <attributes>\n");
        self.buffer.push_str(&format!(
            "        <divisions>{}</divisions>\n",
            attributes.divisions
        ));

        self.buffer.push_str("        <key>\n");
        self.buffer.push_str(&format!(
            "          <fifths>{}</fifths>\n",
            attributes.key.fifths()
        ));
        if let Some(mode) = &attributes.key.mode {
            self.buffer
                .push_str(&format!("          <mode>{}</mode>\n", escape(mode.as_str())));
        }
        self.buffer.push_str("        </key>\n");

        self.buffer.push_str(&format!(
            "        <time><beats>{}</beats><beat-type>{}</beat-type></time>\n",
            attributes.time.beats, attributes.time.beat_type
        ));
        self.buffer.push_str(&format!(
            "        <clef><sign>{}</sign><line>{}</line></clef>\n",
            escape(attributes.clef.sign.as_str()),
            attributes.clef.line
        ));
        self.buffer.push_str("      </attributes>\n");
    }

    /// Write a note or, when it has no pitch, a rest
    pub fn write_note(&mut self, note: &Note) {
        self.buffer.push_str("      <note>\n");
        match &note.pitch {
            Some(pitch) => self.write_pitch(pitch),
            None => self.buffer.push_str("        <rest/>\n"),
        }
        self.buffer.push_str(&format!(
            "        <duration>{}</duration>\n",
            note.duration()
        ));
        self.buffer.push_str(&format!(
            "        <type>{}</type>\n",
            note.note_type.xml_name()
        ));
        self.buffer.push_str("      </note>\n");
    }

    fn write_pitch(&mut self, pitch: &Pitch) {
        self.buffer.push_str("        <pitch>\n");
        self.buffer
            .push_str(&format!("          <step>{}</step>\n", pitch.step));
        // Alter omitted for naturals
        if pitch.alter != 0 {
            self.buffer
                .push_str(&format!("          <alter>{}</alter>\n", pitch.alter));
        }
        self.buffer
            .push_str(&format!("          <octave>{}</octave>\n", pitch.octave));
        self.buffer.push_str("        </pitch>\n");
    }

    /// Finalize and return complete MusicXML string
    pub fn finalize(mut self) -> String {
        self.end_measure();

        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<!DOCTYPE score-partwise PUBLIC \"-//Recordare//DTD MusicXML 3.1 Partwise//EN\" \"http://www.musicxml.org/dtds/partwise.dtd\">\n");
        xml.push_str("<score-partwise version=\"3.1\">\n");

        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            xml.push_str(&format!("  <movement-title>{}</movement-title>\n", escape(title)));
        }

        if let Some(composer) = self.composer.as_deref().filter(|c| !c.is_empty()) {
            xml.push_str("  <identification>\n");
            xml.push_str(&format!(
                "    <creator type=\"composer\">{}</creator>\n",
                escape(composer)
            ));
            xml.push_str("  </identification>\n");
        }

        xml.push_str("  <part-list>\n");
        xml.push_str(&format!("    <score-part id=\"{}\">\n", PART_ID));
        xml.push_str(&format!(
            "      <part-name>{}</part-name>\n",
            escape(self.part_name.as_str())
        ));
        xml.push_str("    </score-part>\n");
        xml.push_str("  </part-list>\n");
        xml.push_str(&format!("  <part id=\"{}\">\n", PART_ID));
        xml.push_str(&self.buffer);
        xml.push_str("  </part>\n");
        xml.push_str("</score-partwise>\n");
        xml
    }
}

impl Default for MusicXmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}
