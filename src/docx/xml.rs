use std::borrow::Cow;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Error;

/// Thin event writer for one package part.
pub(super) struct XmlPart {
    writer: Writer<Vec<u8>>,
}

impl XmlPart {
    pub(super) fn new() -> Result<Self, Error> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { writer })
    }

    pub(super) fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), Error> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    pub(super) fn close(&mut self, name: &str) -> Result<(), Error> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub(super) fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), Error> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(start))?;
        Ok(())
    }

    /// `<name>text</name>`, escaping `text` and dropping characters XML 1.0
    /// cannot carry.
    pub(super) fn text_element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> Result<(), Error> {
        self.open(name, attrs)?;
        let text = xml_chars(text);
        self.writer.write_event(Event::Text(BytesText::new(&text)))?;
        self.close(name)
    }

    /// `<w:val w:val="..."/>`-style single-attribute element.
    pub(super) fn val(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.empty(name, &[("w:val", value)])
    }

    pub(super) fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/// `text` without control characters and noncharacters that are not legal in
/// an XML 1.0 document.
fn xml_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        let kept: String = text.chars().filter(|c| is_xml_char(*c)).collect();
        log::debug!(
            "Dropped {} non-XML character(s) from text",
            text.chars().count() - kept.chars().count()
        );
        Cow::Owned(kept)
    }
}

pub(super) fn pts_to_twips(pts: f32) -> i64 {
    (pts * 20.0).round() as i64
}

pub(super) fn pts_to_emu(pts: f32) -> i64 {
    (pts * 12700.0).round() as i64
}

pub(super) fn half_points(pts: f32) -> i64 {
    (pts * 2.0).round() as i64
}
