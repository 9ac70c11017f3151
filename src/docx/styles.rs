use crate::error::Error;
use crate::model::{Alignment, StyleDef, StyleKind};

use super::WML_NS;
use super::xml::{XmlPart, half_points, pts_to_twips};

pub(super) fn jc_value(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "both",
    }
}

fn write_fonts(xml: &mut XmlPart, font_name: &str) -> Result<(), Error> {
    xml.empty(
        "w:rFonts",
        &[
            ("w:ascii", font_name),
            ("w:hAnsi", font_name),
            ("w:cs", font_name),
            ("w:eastAsia", font_name),
        ],
    )
}

fn write_size(xml: &mut XmlPart, font_size: f32) -> Result<(), Error> {
    let sz = half_points(font_size).to_string();
    xml.val("w:sz", &sz)?;
    xml.val("w:szCs", &sz)
}

fn write_paragraph_props(xml: &mut XmlPart, style: &StyleDef) -> Result<(), Error> {
    xml.open("w:pPr", &[])?;
    let before = pts_to_twips(style.space_before).to_string();
    let after = pts_to_twips(style.space_after).to_string();
    let line: String;
    let mut spacing = vec![("w:before", before.as_str()), ("w:after", after.as_str())];
    if let Some(multiplier) = style.line_spacing {
        line = ((multiplier * 240.0).round() as i64).to_string();
        spacing.push(("w:line", line.as_str()));
        spacing.push(("w:lineRule", "auto"));
    }
    xml.empty("w:spacing", &spacing)?;

    let left = pts_to_twips(style.indent_left).to_string();
    let first_line = pts_to_twips(style.indent_first_line).to_string();
    let hanging = pts_to_twips(style.indent_hanging).to_string();
    let mut ind = vec![("w:left", left.as_str())];
    if style.indent_hanging > 0.0 {
        ind.push(("w:hanging", hanging.as_str()));
    } else {
        ind.push(("w:firstLine", first_line.as_str()));
    }
    xml.empty("w:ind", &ind)?;
    xml.val("w:jc", jc_value(style.alignment))?;
    xml.close("w:pPr")
}

fn write_style(xml: &mut XmlPart, style: &StyleDef) -> Result<(), Error> {
    let kind = match style.kind {
        StyleKind::Paragraph => "paragraph",
        StyleKind::Character => "character",
    };
    xml.open(
        "w:style",
        &[
            ("w:type", kind),
            ("w:customStyle", "1"),
            ("w:styleId", style.id.as_str()),
        ],
    )?;
    xml.val("w:name", style.id.name())?;
    match style.kind {
        StyleKind::Paragraph => xml.val("w:basedOn", "Normal")?,
        StyleKind::Character => xml.val("w:basedOn", "DefaultParagraphFont")?,
    }
    xml.empty("w:qFormat", &[])?;
    if style.kind == StyleKind::Paragraph {
        write_paragraph_props(xml, style)?;
    }

    xml.open("w:rPr", &[])?;
    write_fonts(xml, style.font_name)?;
    if style.bold {
        xml.empty("w:b", &[])?;
        xml.empty("w:bCs", &[])?;
    }
    if style.italic {
        xml.empty("w:i", &[])?;
        xml.empty("w:iCs", &[])?;
    }
    write_size(xml, style.font_size)?;
    xml.close("w:rPr")?;
    xml.close("w:style")
}

/// word/styles.xml: document defaults (font and size of the body style),
/// the Normal and DefaultParagraphFont built-ins, then `styles` in order.
pub(super) fn write_styles(
    styles: &[StyleDef],
    default: Option<&StyleDef>,
) -> Result<Vec<u8>, Error> {
    let mut xml = XmlPart::new()?;
    xml.open("w:styles", &[("xmlns:w", WML_NS)])?;

    xml.open("w:docDefaults", &[])?;
    xml.open("w:rPrDefault", &[])?;
    xml.open("w:rPr", &[])?;
    if let Some(default) = default {
        write_fonts(&mut xml, default.font_name)?;
        write_size(&mut xml, default.font_size)?;
    }
    xml.val("w:lang", "en-US")?;
    xml.close("w:rPr")?;
    xml.close("w:rPrDefault")?;
    xml.open("w:pPrDefault", &[])?;
    xml.open("w:pPr", &[])?;
    xml.empty("w:spacing", &[("w:after", "0"), ("w:line", "240"), ("w:lineRule", "auto")])?;
    xml.close("w:pPr")?;
    xml.close("w:pPrDefault")?;
    xml.close("w:docDefaults")?;

    xml.open(
        "w:style",
        &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
    )?;
    xml.val("w:name", "Normal")?;
    xml.empty("w:qFormat", &[])?;
    xml.close("w:style")?;

    xml.open(
        "w:style",
        &[
            ("w:type", "character"),
            ("w:default", "1"),
            ("w:styleId", "DefaultParagraphFont"),
        ],
    )?;
    xml.val("w:name", "Default Paragraph Font")?;
    xml.empty("w:uiPriority", &[("w:val", "1")])?;
    xml.empty("w:semiHidden", &[])?;
    xml.close("w:style")?;

    for style in styles {
        write_style(&mut xml, style)?;
    }

    xml.close("w:styles")?;
    Ok(xml.into_bytes())
}
