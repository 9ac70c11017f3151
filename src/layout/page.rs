use crate::model::{ColumnsConfig, Paragraph, Section, SectionBreakType, SectionProperties};

const INCH: f32 = 72.0;

// A4, with the conference margins.
pub(crate) const PAGE_WIDTH: f32 = 8.27 * INCH;
pub(crate) const PAGE_HEIGHT: f32 = 11.69 * INCH;
pub(crate) const MARGIN_TOP: f32 = 0.75 * INCH;
pub(crate) const MARGIN_BOTTOM: f32 = 1.0 * INCH;
pub(crate) const MARGIN_LEFT: f32 = 0.625 * INCH;
pub(crate) const MARGIN_RIGHT: f32 = 0.625 * INCH;
pub(crate) const COLUMN_GAP: f32 = 0.25 * INCH;

pub(crate) fn page_properties(break_type: SectionBreakType) -> SectionProperties {
    SectionProperties {
        page_width: PAGE_WIDTH,
        page_height: PAGE_HEIGHT,
        margin_top: MARGIN_TOP,
        margin_bottom: MARGIN_BOTTOM,
        margin_left: MARGIN_LEFT,
        margin_right: MARGIN_RIGHT,
        header_margin: 0.5 * INCH,
        footer_margin: 0.5 * INCH,
        break_type,
        columns: None,
    }
}

/// Owns the layout sections of the document under construction. Content is
/// always appended to the last section.
pub(crate) struct PageLayout {
    sections: Vec<Section>,
}

impl PageLayout {
    /// Opens the single-column section that carries the title block.
    pub(crate) fn init_page() -> Self {
        Self {
            sections: vec![Section {
                properties: page_properties(SectionBreakType::NextPage),
                paragraphs: Vec::new(),
            }],
        }
    }

    pub(crate) fn is_two_column(&self) -> bool {
        self.current().properties.columns.is_some()
    }

    /// Ends the single-column section and opens a continuous two-column one
    /// with the same page geometry. One-way: a second call is ignored.
    pub(crate) fn switch_to_two_column(&mut self) {
        if self.is_two_column() {
            log::warn!("Two-column layout already active, ignoring second switch");
            return;
        }
        let mut properties = page_properties(SectionBreakType::Continuous);
        properties.columns = Some(ColumnsConfig {
            count: 2,
            space: COLUMN_GAP,
        });
        self.sections.push(Section {
            properties,
            paragraphs: Vec::new(),
        });
    }

    pub(crate) fn current(&self) -> &Section {
        // init_page always creates one section and nothing removes it
        &self.sections[self.sections.len() - 1]
    }

    pub(crate) fn push(&mut self, paragraph: Paragraph) {
        let last = self.sections.len() - 1;
        self.sections[last].paragraphs.push(paragraph);
    }

    pub(crate) fn into_sections(self) -> Vec<Section> {
        self.sections
    }
}
