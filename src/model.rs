//! Laid-out document, ready to be serialized. All lengths are in points.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectionBreakType {
    NextPage,
    Continuous,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnsConfig {
    pub count: u32,
    pub space: f32, // gap between columns, in points
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionProperties {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub header_margin: f32,
    pub footer_margin: f32,
    pub break_type: SectionBreakType,
    /// None = single column.
    pub columns: Option<ColumnsConfig>,
}

pub struct Section {
    pub properties: SectionProperties,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Paragraph,
    Character,
}

/// Named style ids. `as_str` is the OOXML styleId, `name` the UI name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleId {
    Title,
    Author,
    AbstractLabel,
    Abstract,
    Keywords,
    Heading,
    Body,
    Caption,
    Reference,
}

impl StyleId {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleId::Title => "IEEETitle",
            StyleId::Author => "IEEEAuthor",
            StyleId::AbstractLabel => "IEEEAbstractLabel",
            StyleId::Abstract => "IEEEAbstract",
            StyleId::Keywords => "IEEEKeywords",
            StyleId::Heading => "IEEEHeading",
            StyleId::Body => "IEEEBody",
            StyleId::Caption => "IEEECaption",
            StyleId::Reference => "IEEEReference",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleId::Title => "IEEE Title",
            StyleId::Author => "IEEE Author",
            StyleId::AbstractLabel => "IEEE Abstract Label",
            StyleId::Abstract => "IEEE Abstract",
            StyleId::Keywords => "IEEE Keywords",
            StyleId::Heading => "IEEE Heading",
            StyleId::Body => "IEEE Body",
            StyleId::Caption => "IEEE Caption",
            StyleId::Reference => "IEEE Reference",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleDef {
    pub id: StyleId,
    pub kind: StyleKind,
    pub font_name: &'static str,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    // Paragraph properties; ignored for character styles.
    pub alignment: Alignment,
    pub space_before: f32,
    pub space_after: f32,
    pub indent_left: f32,
    pub indent_first_line: f32,
    pub indent_hanging: f32,
    pub line_spacing: Option<f32>, // multiplier, 1.0 = single
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
        }
    }
}

#[derive(Clone, Debug)]
pub struct EmbeddedImage {
    pub data: Vec<u8>,
    pub format: ImageFormat,
    pub display_width: f32,  // points
    pub display_height: f32, // points
}

#[derive(Clone, Debug, Default)]
pub struct Paragraph {
    pub style: Option<StyleId>,
    /// Direct alignment, overriding the style's.
    pub alignment: Option<Alignment>,
    pub runs: Vec<Run>,
}

#[derive(Clone, Debug, Default)]
pub struct Run {
    pub text: String,
    pub style: Option<StyleId>,
    pub bold: bool,
    /// Index into `Document::media`.
    pub inline_image: Option<usize>,
}

pub struct DocumentMetadata {
    pub title: String,
    pub creator: String,
}

pub struct Document {
    pub sections: Vec<Section>,
    pub styles: Vec<StyleDef>,
    pub media: Vec<EmbeddedImage>,
    pub metadata: DocumentMetadata,
}

impl Paragraph {
    pub fn styled(style: StyleId) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    pub fn with_text(style: StyleId, text: impl Into<String>) -> Self {
        let mut p = Self::styled(style);
        p.runs.push(Run::plain(text));
        p
    }

    pub fn centered() -> Self {
        Self {
            alignment: Some(Alignment::Center),
            ..Self::default()
        }
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn has_image(&self) -> bool {
        self.runs.iter().any(|r| r.inline_image.is_some())
    }
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            ..Self::default()
        }
    }

    pub fn image(media: usize) -> Self {
        Self {
            inline_image: Some(media),
            ..Self::default()
        }
    }
}

impl Document {
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.sections.iter().flat_map(|s| s.paragraphs.iter())
    }

    pub fn style(&self, id: StyleId) -> Option<&StyleDef> {
        self.styles.iter().find(|s| s.id == id)
    }
}
