mod content;
mod figures;
mod page;
mod references;
mod styles;

use std::collections::HashMap;

use crate::media;
use crate::model::{Document, DocumentMetadata, EmbeddedImage, Paragraph, Run, StyleId};
use crate::paper::StructuredPaper;

use figures::FigurePlacements;
use page::PageLayout;
use styles::StyleRegistry;

/// Display width of every figure, in points (3 inches).
pub(crate) const FIGURE_WIDTH: f32 = 216.0;

const ABSTRACT_LABEL: &str = "Abstract\u{2014}";
const KEYWORDS_LABEL: &str = "Keywords\u{2014}";

/// State for one document build. Each `build_document` call owns a fresh
/// context, so counters never leak between documents or threads.
pub(crate) struct BuildContext<'a> {
    images: &'a [&'a [u8]],
    layout: PageLayout,
    styles: StyleRegistry,
    media: Vec<EmbeddedImage>,
    /// Image index → media slot, or None when the image failed to decode.
    media_slots: HashMap<usize, Option<usize>>,
    pub(crate) figure_counter: u32,
}

impl<'a> BuildContext<'a> {
    fn new(images: &'a [&'a [u8]]) -> Self {
        Self {
            images,
            layout: PageLayout::init_page(),
            styles: StyleRegistry::conference(),
            media: Vec::new(),
            media_slots: HashMap::new(),
            figure_counter: 0,
        }
    }

    pub(crate) fn image_count(&self) -> usize {
        self.images.len()
    }

    pub(crate) fn push(&mut self, paragraph: Paragraph) {
        self.layout.push(paragraph);
    }

    /// Media slot for an in-range image, embedding it on first use. None if
    /// the bytes do not decode.
    pub(crate) fn media_slot(&mut self, image_index: usize) -> Option<usize> {
        if let Some(slot) = self.media_slots.get(&image_index) {
            return *slot;
        }
        let slot = match media::embed(self.images[image_index], FIGURE_WIDTH) {
            Ok(img) => {
                self.media.push(img);
                Some(self.media.len() - 1)
            }
            Err(e) => {
                log::warn!("Image {image_index} could not be embedded: {e}, using placeholder");
                None
            }
        };
        self.media_slots.insert(image_index, slot);
        slot
    }

    fn finish(self, metadata: DocumentMetadata) -> Document {
        Document {
            sections: self.layout.into_sections(),
            styles: self.styles.into_styles(),
            media: self.media,
            metadata,
        }
    }
}

fn add_front_matter(ctx: &mut BuildContext<'_>, paper: &StructuredPaper) {
    ctx.push(Paragraph::with_text(StyleId::Title, paper.title.as_str()));
    ctx.push(Paragraph::with_text(StyleId::Author, paper.authors.as_str()));

    let mut abstract_para = Paragraph::styled(StyleId::Abstract);
    abstract_para.runs.push(label_run(ABSTRACT_LABEL));
    abstract_para.runs.push(Run::plain(paper.r#abstract.as_str()));
    ctx.push(abstract_para);

    let mut keywords = Paragraph::styled(StyleId::Keywords);
    keywords.runs.push(label_run(KEYWORDS_LABEL));
    keywords.runs.push(Run::plain(paper.keywords.join("; ")));
    ctx.push(keywords);
}

fn label_run(text: &str) -> Run {
    Run {
        text: text.to_string(),
        style: Some(StyleId::AbstractLabel),
        ..Run::default()
    }
}

/// Lays out `paper` with `images` addressed by position. Title, authors,
/// abstract and keywords sit in a single-column section; everything after
/// flows in two columns.
pub fn build_document<I: AsRef<[u8]>>(paper: &StructuredPaper, images: &[I]) -> Document {
    let images: Vec<&[u8]> = images.iter().map(AsRef::as_ref).collect();
    let mut ctx = BuildContext::new(&images);

    add_front_matter(&mut ctx, paper);
    ctx.layout.switch_to_two_column();

    let placements = FigurePlacements::resolve(paper);
    content::render_sections(&mut ctx, &paper.sections, &placements);
    content::render_trailing_figures(&mut ctx, &placements);
    references::render_references(&mut ctx, &paper.references);

    log::debug!(
        "Laid out {} section(s), {} figure(s), {} reference(s)",
        paper.sections.len(),
        ctx.figure_counter,
        paper.references.len()
    );

    ctx.finish(DocumentMetadata {
        title: paper.title.clone(),
        creator: paper.authors.clone(),
    })
}
