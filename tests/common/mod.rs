#![allow(dead_code)]

use std::io::{Cursor, Read};

use conference_docx::{Figure, Section, StructuredPaper};

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub fn paper(sections: &[(&str, &str)]) -> StructuredPaper {
    StructuredPaper {
        title: "A Study of Things".into(),
        authors: "Ada Lovelace, Analytical Engine Co.".into(),
        r#abstract: "We study things.".into(),
        keywords: vec!["things".into(), "study".into()],
        sections: sections.iter().map(|(h, c)| Section::new(*h, *c)).collect(),
        figures: vec![],
        references: vec![],
    }
}

pub fn with_figures(mut paper: StructuredPaper, figures: Vec<Figure>) -> StructuredPaper {
    paper.figures = figures;
    paper
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 30, 30]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([30, 30, 200]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Jpeg).unwrap();
    out.into_inner()
}

pub struct Package {
    archive: zip::ZipArchive<Cursor<Vec<u8>>>,
}

impl Package {
    pub fn open(bytes: Vec<u8>) -> Self {
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("output is not a ZIP archive");
        Self { archive }
    }

    pub fn names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    pub fn text(&mut self, name: &str) -> String {
        let mut content = String::new();
        self.archive
            .by_name(name)
            .unwrap_or_else(|_| panic!("missing part {name}"))
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    pub fn bytes(&mut self, name: &str) -> Vec<u8> {
        let mut data = Vec::new();
        self.archive
            .by_name(name)
            .unwrap_or_else(|_| panic!("missing part {name}"))
            .read_to_end(&mut data)
            .unwrap();
        data
    }

    pub fn media_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .names()
            .into_iter()
            .filter(|n| n.starts_with("word/media/"))
            .collect();
        names.sort();
        names
    }

    pub fn paragraphs(&mut self) -> Vec<Para> {
        body_paragraphs(&self.text("word/document.xml"))
    }
}

/// A body paragraph as read back from word/document.xml.
#[derive(Debug)]
pub struct Para {
    pub style: Option<String>,
    pub jc: Option<String>,
    pub text: String,
    pub drawings: Vec<String>, // r:embed ids
    pub ends_section: bool,
    pub columns: Option<String>,
}

fn wml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

fn wml_val<'a>(node: roxmltree::Node<'a, 'a>, child: &str) -> Option<String> {
    wml(node, child)
        .and_then(|n| n.attribute((WML_NS, "val")))
        .map(String::from)
}

pub fn body_paragraphs(xml: &str) -> Vec<Para> {
    let doc = roxmltree::Document::parse(xml).expect("document.xml is not well-formed");
    let body = wml(doc.root_element(), "body").expect("missing w:body");
    let rel_ns = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    body.children()
        .filter(|n| n.tag_name().name() == "p" && n.tag_name().namespace() == Some(WML_NS))
        .map(|p| {
            let ppr = wml(p, "pPr");
            let sect = ppr.and_then(|n| wml(n, "sectPr"));
            let text = p
                .descendants()
                .filter(|n| n.tag_name().name() == "t" && n.tag_name().namespace() == Some(WML_NS))
                .filter_map(|n| n.text())
                .collect();
            let drawings = p
                .descendants()
                .filter(|n| n.tag_name().name() == "blip")
                .filter_map(|n| n.attribute((rel_ns, "embed")))
                .map(String::from)
                .collect();
            Para {
                style: ppr.and_then(|n| wml_val(n, "pStyle")),
                jc: ppr.and_then(|n| wml_val(n, "jc")),
                text,
                drawings,
                ends_section: sect.is_some(),
                columns: sect
                    .and_then(|s| wml(s, "cols"))
                    .and_then(|c| c.attribute((WML_NS, "num")))
                    .map(String::from),
            }
        })
        .collect()
}

/// Texts of paragraphs after the section break that ends the title block.
pub fn body_texts(paras: &[Para]) -> Vec<String> {
    let start = paras
        .iter()
        .position(|p| p.ends_section)
        .map(|i| i + 1)
        .unwrap_or(0);
    paras[start..].iter().map(|p| p.text.clone()).collect()
}

pub fn captions(paras: &[Para]) -> Vec<String> {
    paras
        .iter()
        .filter(|p| p.style.as_deref() == Some("IEEECaption"))
        .map(|p| p.text.clone())
        .collect()
}
