use crate::model::{Alignment, StyleDef, StyleId, StyleKind};

pub(crate) const FONT_NAME: &str = "Times New Roman";

pub(crate) const FONT_SIZE_TITLE: f32 = 24.0;
pub(crate) const FONT_SIZE_AUTHOR: f32 = 11.0;
pub(crate) const FONT_SIZE_HEADING: f32 = 10.0;
pub(crate) const FONT_SIZE_BODY: f32 = 10.0;
pub(crate) const FONT_SIZE_ABSTRACT: f32 = 9.0;
pub(crate) const FONT_SIZE_CAPTION: f32 = 8.0;

/// Hanging indent of bibliography entries, in points.
pub(crate) const REFERENCE_INDENT: f32 = 18.0;

const fn style(id: StyleId, font_size: f32, alignment: Alignment) -> StyleDef {
    StyleDef {
        id,
        kind: StyleKind::Paragraph,
        font_name: FONT_NAME,
        font_size,
        bold: false,
        italic: false,
        alignment,
        space_before: 0.0,
        space_after: 0.0,
        indent_left: 0.0,
        indent_first_line: 0.0,
        indent_hanging: 0.0,
        line_spacing: None,
    }
}

/// The conference style table, in the order it is written to styles.xml.
pub(crate) const CONFERENCE_STYLES: [StyleDef; 9] = [
    StyleDef {
        bold: true,
        space_after: 12.0,
        ..style(StyleId::Title, FONT_SIZE_TITLE, Alignment::Center)
    },
    StyleDef {
        space_after: 12.0,
        ..style(StyleId::Author, FONT_SIZE_AUTHOR, Alignment::Center)
    },
    StyleDef {
        kind: StyleKind::Character,
        bold: true,
        italic: true,
        ..style(StyleId::AbstractLabel, FONT_SIZE_ABSTRACT, Alignment::Justify)
    },
    StyleDef {
        italic: true,
        space_after: 12.0,
        ..style(StyleId::Abstract, FONT_SIZE_ABSTRACT, Alignment::Justify)
    },
    StyleDef {
        italic: true,
        space_after: 12.0,
        ..style(StyleId::Keywords, FONT_SIZE_ABSTRACT, Alignment::Justify)
    },
    StyleDef {
        bold: true,
        space_before: 12.0,
        space_after: 6.0,
        ..style(StyleId::Heading, FONT_SIZE_HEADING, Alignment::Center)
    },
    StyleDef {
        indent_first_line: 18.0,
        line_spacing: Some(1.0),
        ..style(StyleId::Body, FONT_SIZE_BODY, Alignment::Justify)
    },
    StyleDef {
        space_before: 6.0,
        space_after: 12.0,
        ..style(StyleId::Caption, FONT_SIZE_CAPTION, Alignment::Center)
    },
    StyleDef {
        indent_left: REFERENCE_INDENT,
        indent_hanging: REFERENCE_INDENT,
        line_spacing: Some(1.0),
        ..style(StyleId::Reference, FONT_SIZE_BODY, Alignment::Justify)
    },
];

/// Styles registered on one document. Registration is keyed by id, so adding
/// a style that is already present changes nothing.
#[derive(Default)]
pub(crate) struct StyleRegistry {
    styles: Vec<StyleDef>,
}

impl StyleRegistry {
    pub(crate) fn conference() -> Self {
        let mut registry = Self::default();
        registry.ensure_styles();
        registry
    }

    pub(crate) fn ensure_styles(&mut self) {
        for def in &CONFERENCE_STYLES {
            self.register(def.clone());
        }
    }

    pub(crate) fn register(&mut self, def: StyleDef) -> bool {
        if self.contains(def.id) {
            return false;
        }
        self.styles.push(def);
        true
    }

    pub(crate) fn contains(&self, id: StyleId) -> bool {
        self.styles.iter().any(|s| s.id == id)
    }

    pub(crate) fn into_styles(self) -> Vec<StyleDef> {
        self.styles
    }
}
