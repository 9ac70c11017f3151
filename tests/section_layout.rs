mod common;

use common::{Package, body_texts, paper};
use conference_docx::model::StyleId;

#[test]
fn two_sections_and_one_reference() {
    let _ = env_logger::try_init();
    let mut p = paper(&[("Introduction", "A."), ("Conclusion", "B.")]);
    p.references = vec!["[ref]".into()];

    let bytes = conference_docx::generate(&p, &Vec::<Vec<u8>>::new()).unwrap();
    let paras = Package::open(bytes).paragraphs();

    assert_eq!(
        body_texts(&paras),
        vec![
            "I. INTRODUCTION",
            "A.",
            "II. CONCLUSION",
            "B.",
            "REFERENCES",
            "[1] [ref]",
        ]
    );
}

#[test]
fn front_matter_is_single_column_and_in_order() {
    let p = paper(&[("Introduction", "A.")]);
    let bytes = conference_docx::generate(&p, &Vec::<Vec<u8>>::new()).unwrap();
    let paras = Package::open(bytes).paragraphs();

    let front: Vec<(Option<&str>, &str)> = paras[..4]
        .iter()
        .map(|p| (p.style.as_deref(), p.text.as_str()))
        .collect();
    assert_eq!(
        front,
        vec![
            (Some("IEEETitle"), "A Study of Things"),
            (Some("IEEEAuthor"), "Ada Lovelace, Analytical Engine Co."),
            (Some("IEEEAbstract"), "Abstract\u{2014}We study things."),
            (Some("IEEEKeywords"), "Keywords\u{2014}things; study"),
        ]
    );
    assert!(paras[3].ends_section);
    assert!(paras[..3].iter().all(|p| !p.ends_section));
}

#[test]
fn roman_numerals_stop_after_ten() {
    let headings: Vec<String> = (1..=12).map(|i| format!("Part {i}")).collect();
    let sections: Vec<(&str, &str)> = headings.iter().map(|h| (h.as_str(), "text")).collect();
    let doc = conference_docx::build_document(&paper(&sections), &Vec::<Vec<u8>>::new());

    let numbered: Vec<String> = doc
        .paragraphs()
        .filter(|p| p.style == Some(StyleId::Heading))
        .map(|p| p.text())
        .collect();
    assert_eq!(
        numbered,
        vec![
            "I. PART 1",
            "II. PART 2",
            "III. PART 3",
            "IV. PART 4",
            "V. PART 5",
            "VI. PART 6",
            "VII. PART 7",
            "VIII. PART 8",
            "IX. PART 9",
            "X. PART 10",
            "11. PART 11",
            "12. PART 12",
        ]
    );
}

#[test]
fn references_are_last_and_unnumbered() {
    let mut p = paper(&[("Method", "M."), ("Results", "R.")]);
    p.references = vec!["First, 2020.".into(), "Second, 2021.".into(), "Third.".into()];
    let doc = conference_docx::build_document(&p, &vec![common::png(4, 4)]);

    let paras: Vec<_> = doc.paragraphs().collect();
    let n = paras.len();
    let tail: Vec<String> = paras[n - 4..].iter().map(|p| p.text()).collect();
    assert_eq!(
        tail,
        vec!["REFERENCES", "[1] First, 2020.", "[2] Second, 2021.", "[3] Third."]
    );
    assert_eq!(paras[n - 4].style, Some(StyleId::Heading));
    assert!(
        paras[n - 3..]
            .iter()
            .all(|p| p.style == Some(StyleId::Reference))
    );
}

#[test]
fn body_paragraphs_are_reflowed() {
    let p = paper(&[(
        "Background",
        "Line one\ncontinues  here.\n\nSecond\tparagraph.\n\n\n\nThird.",
    )]);
    let doc = conference_docx::build_document(&p, &Vec::<Vec<u8>>::new());
    let body: Vec<String> = doc
        .paragraphs()
        .filter(|p| p.style == Some(StyleId::Body))
        .map(|p| p.text())
        .collect();
    assert_eq!(
        body,
        vec!["Line one continues here.", "Second paragraph.", "Third."]
    );
}

#[test]
fn optional_fields_have_default_rendering() {
    let p = conference_docx::StructuredPaper::from_json(
        r#"{"title": "Bare", "abstract": "Short.", "sections": [{"heading": "Only", "content": "Body."}]}"#,
    )
    .unwrap();
    let bytes = conference_docx::generate(&p, &Vec::<Vec<u8>>::new()).unwrap();
    let mut pkg = Package::open(bytes);
    let paras = pkg.paragraphs();

    assert_eq!(paras[1].text, "[Author Name]");
    assert_eq!(paras[3].text, "Keywords\u{2014}");
    assert_eq!(body_texts(&paras), vec!["I. ONLY", "Body."]);
    assert!(pkg.media_names().is_empty());
}

#[test]
fn no_sections_still_produces_a_document() {
    let p = paper(&[]);
    let bytes = conference_docx::generate(&p, &Vec::<Vec<u8>>::new()).unwrap();
    let paras = Package::open(bytes).paragraphs();
    assert_eq!(paras.len(), 4);
    assert!(body_texts(&paras).is_empty());
}
