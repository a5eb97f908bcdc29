// ABOUTME: Thin XML writing helper for the tana-deck application
// ABOUTME: Wraps quick-xml's Writer with the few calls the part generators need

use crate::errors::{DeckError, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Reject characters XML 1.0 cannot carry (C0 controls other than tab, LF
/// and CR, plus U+FFFE and U+FFFF). Escaping does not help with these.
pub(crate) fn validate_text(label: &str, text: &str) -> Result<()> {
    let invalid = text.chars().find(|&c| {
        matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}')
            || matches!(c, '\u{FFFE}' | '\u{FFFF}')
    });
    match invalid {
        Some(c) => Err(DeckError::ValidationError(format!(
            "{} contains a character not allowed in XML: U+{:04X}",
            label, c as u32
        ))),
        None => Ok(()),
    }
}

/// Streaming builder for one XML part
pub(crate) struct XmlBuilder {
    writer: Writer<Vec<u8>>,
}

impl XmlBuilder {
    /// Start a standalone UTF-8 document
    pub fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { writer })
    }

    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<&mut Self> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Start(start))?;
        Ok(self)
    }

    pub fn close(&mut self, name: &str) -> Result<&mut Self> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(self)
    }

    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<&mut Self> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(start))?;
        Ok(self)
    }

    /// Escaped character data
    pub fn text(&mut self, text: &str) -> Result<&mut Self> {
        validate_text("Text", text)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(self)
    }

    /// `<name attrs>text</name>`
    pub fn text_element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> Result<&mut Self> {
        self.open(name, attrs)?.text(text)?.close(name)
    }

    pub fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}
