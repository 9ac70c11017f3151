mod common;

use common::{Package, captions, paper, png, with_figures};
use conference_docx::{Figure, StructuredPaper};
use rayon::prelude::*;

struct Case {
    paper: StructuredPaper,
    images: Vec<Vec<u8>>,
}

fn cases() -> Vec<Case> {
    (0..24)
        .map(|i| {
            let figures = (0..i % 5)
                .map(|f| Figure::new(f, format!("case {i} figure {f}"), "Results"))
                .collect();
            let mut p = with_figures(
                paper(&[("Introduction", "Intro."), ("Results", "Numbers.")]),
                figures,
            );
            p.title = format!("Paper {i}");
            p.references = (0..i % 3).map(|r| format!("Reference {r}")).collect();
            Case {
                paper: p,
                images: (0..i % 4).map(|n| png(4 + n as u32, 4)).collect(),
            }
        })
        .collect()
}

#[test]
fn concurrent_calls_match_sequential_calls() {
    let _ = env_logger::try_init();
    let cases = cases();

    let sequential: Vec<Vec<u8>> = cases
        .iter()
        .map(|c| conference_docx::generate(&c.paper, &c.images).unwrap())
        .collect();
    let parallel: Vec<Vec<u8>> = cases
        .par_iter()
        .map(|c| conference_docx::generate(&c.paper, &c.images).unwrap())
        .collect();

    assert_eq!(sequential.len(), parallel.len());
    for (i, (a, b)) in sequential.iter().zip(&parallel).enumerate() {
        assert!(a == b, "case {i} differs between sequential and parallel runs");
    }
}

#[test]
fn every_document_numbers_figures_from_one() {
    let results: Vec<Vec<String>> = cases()
        .par_iter()
        .map(|c| {
            let bytes = conference_docx::generate(&c.paper, &c.images).unwrap();
            captions(&Package::open(bytes).paragraphs())
        })
        .collect();

    for caps in results {
        for (n, caption) in caps.iter().enumerate() {
            let expected = format!("Fig. {}. ", n + 1);
            assert!(
                caption.starts_with(&expected),
                "{caption:?} should start with {expected:?}"
            );
        }
    }
}
