use crate::layout::BuildContext;
use crate::layout::figures::FigurePlacements;
use crate::model::{Paragraph, Run, StyleId};
use crate::paper::Section;

const PLACEHOLDER_TEXT: &str = "[Image could not be processed]";

/// Highest section number written as a Roman numeral.
const ROMAN_LIMIT: usize = 10;

fn to_roman(mut n: usize) -> String {
    const TABLE: &[(usize, &str)] = &[(10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I")];
    let mut result = String::new();
    for &(value, numeral) in TABLE {
        while n >= value {
            result.push_str(numeral);
            n -= value;
        }
    }
    result
}

/// I..X for the first ten sections, plain decimals after that.
pub(crate) fn section_number(n: usize) -> String {
    if n <= ROMAN_LIMIT {
        to_roman(n)
    } else {
        n.to_string()
    }
}

pub(crate) fn heading_text(n: usize, heading: &str) -> String {
    format!("{}. {}", section_number(n), heading.to_uppercase())
}

/// Splits on whitespace-only lines and collapses whitespace inside each
/// paragraph to single spaces. Empty paragraphs are dropped.
pub(crate) fn split_paragraphs(content: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut words: Vec<&str> = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            if !words.is_empty() {
                paragraphs.push(words.join(" "));
                words.clear();
            }
        } else {
            words.extend(line.split_whitespace());
        }
    }
    if !words.is_empty() {
        paragraphs.push(words.join(" "));
    }
    paragraphs
}

enum Caption<'c> {
    Declared(&'c str),
    /// "Figure <n>", for images no figure refers to.
    Generated,
}

/// Appends one figure: the image (or a placeholder when it will not decode)
/// and its caption. Emits nothing, and leaves the figure counter alone, when
/// `image_index` is past the end of the supplied image list.
fn add_figure(ctx: &mut BuildContext<'_>, image_index: usize, caption: Caption<'_>) {
    if image_index >= ctx.image_count() {
        log::debug!(
            "Skipping figure for image {image_index}: only {} image(s) supplied",
            ctx.image_count()
        );
        return;
    }

    ctx.figure_counter += 1;
    let number = ctx.figure_counter;

    let mut picture = Paragraph::centered();
    match ctx.media_slot(image_index) {
        Some(slot) => picture.runs.push(Run::image(slot)),
        None => picture.runs.push(Run::plain(PLACEHOLDER_TEXT)),
    }
    ctx.push(picture);

    let text = match caption {
        Caption::Declared(text) => text.to_string(),
        Caption::Generated => format!("Figure {number}"),
    };
    let mut para = Paragraph::styled(StyleId::Caption);
    para.runs.push(Run::bold(format!("Fig. {number}. ")));
    para.runs.push(Run::plain(text));
    ctx.push(para);
}

/// Headings, body paragraphs and the figures placed under each section, in
/// input order. Section numbers start at 1.
pub(crate) fn render_sections(
    ctx: &mut BuildContext<'_>,
    sections: &[Section],
    placements: &FigurePlacements<'_>,
) {
    for (i, section) in sections.iter().enumerate() {
        let number = i + 1;
        let mut heading = Paragraph::styled(StyleId::Heading);
        heading.runs.push(Run::bold(heading_text(number, &section.heading)));
        ctx.push(heading);

        let paragraphs = split_paragraphs(&section.content);
        log::debug!(
            "Section {number} {:?}: {} paragraph(s)",
            section.heading,
            paragraphs.len()
        );
        for text in paragraphs {
            ctx.push(Paragraph::with_text(StyleId::Body, text));
        }

        for fig in placements.for_section(&section.heading) {
            add_figure(ctx, fig.index, Caption::Declared(&fig.caption));
        }
    }
}

/// After the last section: figures whose placement matched no heading, then
/// every supplied image no figure refers to, in index order.
pub(crate) fn render_trailing_figures(ctx: &mut BuildContext<'_>, placements: &FigurePlacements<'_>) {
    for fig in placements.unmatched() {
        add_figure(ctx, fig.index, Caption::Declared(&fig.caption));
    }
    for index in placements.unclaimed_images(ctx.image_count()) {
        add_figure(ctx, index, Caption::Generated);
    }
}
