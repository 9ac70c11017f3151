mod document;
mod styles;
mod xml;

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

use crate::error::Error;
use crate::model::{Document, ImageFormat, StyleId};

use xml::XmlPart;

pub(super) const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(super) const DML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const WPD_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const PIC_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const REL_TYPE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_TYPE_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_TYPE_IMAGE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
const REL_TYPE_CORE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_TYPE_EXTENDED: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";

const CT_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const CT_STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
const CT_CORE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_EXTENDED: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";
const CT_RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";

pub(super) fn media_file_name(slot: usize, format: ImageFormat) -> String {
    format!("image{}.{}", slot + 1, format.extension())
}

/// rId1 is styles.xml; media follow from rId2.
pub(super) fn media_rel_id(slot: usize) -> String {
    format!("rId{}", slot + 2)
}

fn write_content_types(doc: &Document) -> Result<Vec<u8>, Error> {
    let mut xml = XmlPart::new()?;
    xml.open("Types", &[("xmlns", CONTENT_TYPES_NS)])?;
    xml.empty("Default", &[("Extension", "rels"), ("ContentType", CT_RELS)])?;
    xml.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;

    let mut formats: Vec<ImageFormat> = Vec::new();
    for img in &doc.media {
        if !formats.contains(&img.format) {
            formats.push(img.format);
        }
    }
    for format in formats {
        xml.empty(
            "Default",
            &[
                ("Extension", format.extension()),
                ("ContentType", format.content_type()),
            ],
        )?;
    }

    for (part, content_type) in [
        ("/word/document.xml", CT_DOCUMENT),
        ("/word/styles.xml", CT_STYLES),
        ("/docProps/core.xml", CT_CORE),
        ("/docProps/app.xml", CT_EXTENDED),
    ] {
        xml.empty("Override", &[("PartName", part), ("ContentType", content_type)])?;
    }
    xml.close("Types")?;
    Ok(xml.into_bytes())
}

fn write_package_rels() -> Result<Vec<u8>, Error> {
    let mut xml = XmlPart::new()?;
    xml.open("Relationships", &[("xmlns", PKG_REL_NS)])?;
    for (id, rel_type, target) in [
        ("rId1", REL_TYPE_DOCUMENT, "word/document.xml"),
        ("rId2", REL_TYPE_CORE, "docProps/core.xml"),
        ("rId3", REL_TYPE_EXTENDED, "docProps/app.xml"),
    ] {
        xml.empty(
            "Relationship",
            &[("Id", id), ("Type", rel_type), ("Target", target)],
        )?;
    }
    xml.close("Relationships")?;
    Ok(xml.into_bytes())
}

fn write_document_rels(doc: &Document) -> Result<Vec<u8>, Error> {
    let mut xml = XmlPart::new()?;
    xml.open("Relationships", &[("xmlns", PKG_REL_NS)])?;
    xml.empty(
        "Relationship",
        &[("Id", "rId1"), ("Type", REL_TYPE_STYLES), ("Target", "styles.xml")],
    )?;
    for (slot, img) in doc.media.iter().enumerate() {
        let id = media_rel_id(slot);
        let target = format!("media/{}", media_file_name(slot, img.format));
        xml.empty(
            "Relationship",
            &[
                ("Id", id.as_str()),
                ("Type", REL_TYPE_IMAGE),
                ("Target", target.as_str()),
            ],
        )?;
    }
    xml.close("Relationships")?;
    Ok(xml.into_bytes())
}

fn write_core_props(doc: &Document) -> Result<Vec<u8>, Error> {
    let mut xml = XmlPart::new()?;
    xml.open(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
        ],
    )?;
    xml.text_element("dc:title", &[], &doc.metadata.title)?;
    xml.text_element("dc:creator", &[], &doc.metadata.creator)?;
    xml.close("cp:coreProperties")?;
    Ok(xml.into_bytes())
}

fn write_app_props() -> Result<Vec<u8>, Error> {
    let mut xml = XmlPart::new()?;
    xml.open(
        "Properties",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )],
    )?;
    xml.text_element("Application", &[], env!("CARGO_PKG_NAME"))?;
    xml.close("Properties")?;
    Ok(xml.into_bytes())
}

fn entry_options(method: zip::CompressionMethod) -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(method)
        .last_modified_time(zip::DateTime::default())
}

/// Serializes `doc` as a DOCX package. Entries carry a fixed timestamp, so
/// equal documents give byte-identical output.
pub fn write(doc: &Document) -> Result<Vec<u8>, Error> {
    let default_style = doc.style(StyleId::Body);
    let parts: Vec<(String, Vec<u8>)> = vec![
        ("[Content_Types].xml".into(), write_content_types(doc)?),
        ("_rels/.rels".into(), write_package_rels()?),
        ("docProps/core.xml".into(), write_core_props(doc)?),
        ("docProps/app.xml".into(), write_app_props()?),
        ("word/document.xml".into(), document::write_document(doc)?),
        (
            "word/_rels/document.xml.rels".into(),
            write_document_rels(doc)?,
        ),
        (
            "word/styles.xml".into(),
            styles::write_styles(&doc.styles, default_style)?,
        ),
    ];

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in &parts {
        zip.start_file(name.as_str(), entry_options(zip::CompressionMethod::Deflated))?;
        zip.write_all(data)?;
    }
    for (slot, img) in doc.media.iter().enumerate() {
        // already-compressed formats gain nothing from deflate
        zip.start_file(
            format!("word/media/{}", media_file_name(slot, img.format)),
            entry_options(zip::CompressionMethod::Stored),
        )?;
        zip.write_all(&img.data)?;
    }
    Ok(zip.finish()?.into_inner())
}
