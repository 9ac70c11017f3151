//! Structured paper content, as produced by the text-structuring service.

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_AUTHORS: &str = "[Author Name]";

fn default_authors() -> String {
    DEFAULT_AUTHORS.to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructuredPaper {
    pub title: String,
    #[serde(default = "default_authors")]
    pub authors: String,
    pub r#abstract: String,
    /// Rendered in this order, joined with "; ".
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Document order; the only source of heading numbers.
    pub sections: Vec<Section>,
    #[serde(default)]
    pub figures: Vec<Figure>,
    /// Numbered from 1 by position.
    #[serde(default)]
    pub references: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    /// Blank lines separate paragraphs.
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// 0-based position in the image list handed to `generate`.
    pub index: usize,
    pub caption: String,
    /// Heading of the section this figure follows, compared case-insensitively.
    pub placement: String,
}

impl StructuredPaper {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Section {
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
        }
    }
}

impl Figure {
    pub fn new(index: usize, caption: impl Into<String>, placement: impl Into<String>) -> Self {
        Self {
            index,
            caption: caption.into(),
            placement: placement.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let paper = StructuredPaper::from_json(
            r#"{"title": "T", "abstract": "A", "sections": [{"heading": "Intro", "content": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(paper.authors, DEFAULT_AUTHORS);
        assert!(paper.keywords.is_empty());
        assert!(paper.figures.is_empty());
        assert!(paper.references.is_empty());
        assert_eq!(paper.sections, vec![Section::new("Intro", "x")]);
    }

    #[test]
    fn missing_title_is_rejected() {
        let err = StructuredPaper::from_json(r#"{"abstract": "A", "sections": []}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
