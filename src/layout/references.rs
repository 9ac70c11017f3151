use crate::layout::BuildContext;
use crate::model::{Paragraph, Run, StyleId};

pub(crate) const REFERENCES_HEADING: &str = "REFERENCES";

/// Unnumbered heading plus one "[i] ..." hanging-indent entry per reference.
/// Nothing at all for an empty list.
pub(crate) fn render_references(ctx: &mut BuildContext<'_>, references: &[String]) {
    if references.is_empty() {
        return;
    }

    let mut heading = Paragraph::styled(StyleId::Heading);
    heading.runs.push(Run::bold(REFERENCES_HEADING));
    ctx.push(heading);

    for (i, reference) in references.iter().enumerate() {
        ctx.push(Paragraph::with_text(
            StyleId::Reference,
            format!("[{}] {}", i + 1, reference),
        ));
    }
}
