use crate::error::Error;
use crate::model::{
    Document, EmbeddedImage, Paragraph, Run, SectionBreakType, SectionProperties,
};

use super::styles::jc_value;
use super::xml::{XmlPart, pts_to_emu, pts_to_twips};
use super::{DML_NS, PIC_NS, REL_NS, WML_NS, WPD_NS, media_file_name, media_rel_id};

struct BodyWriter<'d> {
    xml: XmlPart,
    media: &'d [EmbeddedImage],
    next_drawing_id: u32,
}

impl BodyWriter<'_> {
    fn write_sect_pr(&mut self, props: &SectionProperties) -> Result<(), Error> {
        let xml = &mut self.xml;
        xml.open("w:sectPr", &[])?;
        let break_type = match props.break_type {
            SectionBreakType::NextPage => "nextPage",
            SectionBreakType::Continuous => "continuous",
        };
        xml.val("w:type", break_type)?;

        let w = pts_to_twips(props.page_width).to_string();
        let h = pts_to_twips(props.page_height).to_string();
        xml.empty("w:pgSz", &[("w:w", w.as_str()), ("w:h", h.as_str())])?;

        let top = pts_to_twips(props.margin_top).to_string();
        let right = pts_to_twips(props.margin_right).to_string();
        let bottom = pts_to_twips(props.margin_bottom).to_string();
        let left = pts_to_twips(props.margin_left).to_string();
        let header = pts_to_twips(props.header_margin).to_string();
        let footer = pts_to_twips(props.footer_margin).to_string();
        xml.empty(
            "w:pgMar",
            &[
                ("w:top", top.as_str()),
                ("w:right", right.as_str()),
                ("w:bottom", bottom.as_str()),
                ("w:left", left.as_str()),
                ("w:header", header.as_str()),
                ("w:footer", footer.as_str()),
                ("w:gutter", "0"),
            ],
        )?;

        if let Some(cols) = &props.columns {
            let num = cols.count.to_string();
            let space = pts_to_twips(cols.space).to_string();
            xml.empty("w:cols", &[("w:num", num.as_str()), ("w:space", space.as_str())])?;
        }
        xml.close("w:sectPr")
    }

    fn write_drawing(&mut self, slot: usize) -> Result<(), Error> {
        let media = self.media;
        let img = &media[slot];
        let id = self.next_drawing_id.to_string();
        self.next_drawing_id += 1;
        let cx = pts_to_emu(img.display_width).to_string();
        let cy = pts_to_emu(img.display_height).to_string();
        let name = media_file_name(slot, img.format);
        let rel_id = media_rel_id(slot);

        let xml = &mut self.xml;
        xml.open("w:drawing", &[])?;
        xml.open(
            "wp:inline",
            &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
        )?;
        xml.empty("wp:extent", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        xml.empty("wp:docPr", &[("id", id.as_str()), ("name", format!("Picture {id}").as_str())])?;
        xml.open("wp:cNvGraphicFramePr", &[])?;
        xml.empty("a:graphicFrameLocks", &[("noChangeAspect", "1")])?;
        xml.close("wp:cNvGraphicFramePr")?;
        xml.open("a:graphic", &[])?;
        xml.open("a:graphicData", &[("uri", PIC_NS)])?;
        xml.open("pic:pic", &[])?;
        xml.open("pic:nvPicPr", &[])?;
        xml.empty("pic:cNvPr", &[("id", id.as_str()), ("name", name.as_str())])?;
        xml.empty("pic:cNvPicPr", &[])?;
        xml.close("pic:nvPicPr")?;
        xml.open("pic:blipFill", &[])?;
        xml.empty("a:blip", &[("r:embed", rel_id.as_str())])?;
        xml.open("a:stretch", &[])?;
        xml.empty("a:fillRect", &[])?;
        xml.close("a:stretch")?;
        xml.close("pic:blipFill")?;
        xml.open("pic:spPr", &[])?;
        xml.open("a:xfrm", &[])?;
        xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
        xml.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
        xml.close("a:xfrm")?;
        xml.open("a:prstGeom", &[("prst", "rect")])?;
        xml.empty("a:avLst", &[])?;
        xml.close("a:prstGeom")?;
        xml.close("pic:spPr")?;
        xml.close("pic:pic")?;
        xml.close("a:graphicData")?;
        xml.close("a:graphic")?;
        xml.close("wp:inline")?;
        xml.close("w:drawing")
    }

    fn write_run(&mut self, run: &Run) -> Result<(), Error> {
        self.xml.open("w:r", &[])?;
        if run.style.is_some() || run.bold {
            self.xml.open("w:rPr", &[])?;
            if let Some(style) = run.style {
                self.xml.val("w:rStyle", style.as_str())?;
            }
            if run.bold {
                self.xml.empty("w:b", &[])?;
                self.xml.empty("w:bCs", &[])?;
            }
            self.xml.close("w:rPr")?;
        }
        if let Some(slot) = run.inline_image {
            self.write_drawing(slot)?;
        }
        if !run.text.is_empty() {
            self.xml
                .text_element("w:t", &[("xml:space", "preserve")], &run.text)?;
        }
        self.xml.close("w:r")
    }

    /// `sect` ends a layout section at this paragraph.
    fn write_paragraph(
        &mut self,
        para: &Paragraph,
        sect: Option<&SectionProperties>,
    ) -> Result<(), Error> {
        self.xml.open("w:p", &[])?;
        if para.style.is_some() || para.alignment.is_some() || sect.is_some() {
            self.xml.open("w:pPr", &[])?;
            if let Some(style) = para.style {
                self.xml.val("w:pStyle", style.as_str())?;
            }
            if let Some(alignment) = para.alignment {
                self.xml.val("w:jc", jc_value(alignment))?;
            }
            if let Some(props) = sect {
                self.write_sect_pr(props)?;
            }
            self.xml.close("w:pPr")?;
        }
        for run in &para.runs {
            self.write_run(run)?;
        }
        self.xml.close("w:p")
    }
}

/// word/document.xml. Every section but the last closes with a sectPr in
/// the pPr of its final paragraph; the last section's sectPr closes the body.
pub(super) fn write_document(doc: &Document) -> Result<Vec<u8>, Error> {
    let mut body = BodyWriter {
        xml: XmlPart::new()?,
        media: &doc.media,
        next_drawing_id: 1,
    };
    body.xml.open(
        "w:document",
        &[
            ("xmlns:w", WML_NS),
            ("xmlns:r", REL_NS),
            ("xmlns:wp", WPD_NS),
            ("xmlns:a", DML_NS),
            ("xmlns:pic", PIC_NS),
        ],
    )?;
    body.xml.open("w:body", &[])?;

    let count = doc.sections.len();
    for (i, section) in doc.sections.iter().enumerate() {
        let is_last = i + 1 == count;
        let n = section.paragraphs.len();
        for (j, para) in section.paragraphs.iter().enumerate() {
            let sect = (!is_last && j + 1 == n).then_some(&section.properties);
            body.write_paragraph(para, sect)?;
        }
        if is_last {
            body.write_sect_pr(&section.properties)?;
        } else if n == 0 {
            body.write_paragraph(&Paragraph::default(), Some(&section.properties))?;
        }
    }

    body.xml.close("w:body")?;
    body.xml.close("w:document")?;
    Ok(body.xml.into_bytes())
}
