//! Pipeline tests for the parsing module.
//!
//! Each sample message is rendered end to end and checked against the
//! invariants in [`invariants`]; targeted tests cover table mode and the
//! nesting limit.


use chatmark_config::{Config, Limits};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    error::EngineError,
    parsing::{
        MessageRenderer,
        blocks::Block,
        entities::extract_entities,
        inline::InlineNode,
        render_message,
        tables::Table,
    },
};

const SAMPLES: &[&str] = &[
    "",
    "\n\n\n",
    "Call [TEL:98765 43210] now",
    "[DOCTOR:Dr. [TEL:1]] x",
    "[DOCTORPROFILE:Dr. A|cardiology|dr-a][DEPARTMENT:ENT]",
    "**Departments**\n1. Dr. Rao - Cardiology - Full Time\n• [LOCATION:Main Gate]",
    "[TEL:abc] [EMERGENCY:108] [LOCATION:] trailing",
    "Intro\n| A | B |\n|---|---|\n| x |\n| y | z | w |\nOutro",
    "| only | header |\n||||\n| --- |\n| a | b | c | d |",
    "தமிழ் **மருத்துவர்** [TEL:0422 432 4324]",
];

fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.to_string())
}

#[test]
fn extractor_spans_cover_every_sample() {
    for sample in SAMPLES {
        invariants::check_spans(sample, &extract_entities(sample));
    }
}

#[test]
fn tables_are_rectangular_for_every_sample() {
    for sample in SAMPLES {
        invariants::check_tables(&render_message(sample));
    }
}

#[test]
fn rendering_is_deterministic() {
    for sample in SAMPLES {
        assert_eq!(render_message(sample), render_message(sample));
    }
}

#[test]
fn renderer_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MessageRenderer>();
}

#[test]
fn invalid_vocabulary_is_reported() {
    let mut config = Config::default();
    config.employment.no_category_pattern = "(".into();
    assert!(matches!(
        MessageRenderer::new(&config),
        Err(EngineError::InvalidPattern { .. })
    ));
}

/// A lone table line is dropped; the prose beside it still renders.
#[test]
fn single_table_line_is_dropped_and_text_kept() {
    let doc = render_message("Rates ---\n| A | B |");
    assert_eq!(
        doc.blocks,
        vec![Block::Section(vec![Block::Paragraph(vec![text("Rates ---")])])]
    );
}

#[test]
fn markers_without_table_lines_classify_whole_message() {
    let doc = render_message("a | b\n\n---");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Paragraph(vec![text("a | b")]),
            Block::Spacer,
            Block::Paragraph(vec![text("---")]),
        ]
    );
}

#[test]
fn prose_around_tables_becomes_sections() {
    let doc = render_message("Intro\n| A | B |\n|---|---|\n| 1 | 2 |\n\nOutro **done**");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Section(vec![Block::Paragraph(vec![text("Intro")])]),
            Block::Table(Table {
                headers: vec!["A".into(), "B".into()],
                rows: vec![vec!["1".into(), "2".into()]],
            }),
            Block::Section(vec![Block::Paragraph(vec![
                text("Outro "),
                InlineNode::Bold("done".into()),
            ])]),
        ]
    );
}

/// Sections never contain table lines, so every limit renders the same.
#[rstest]
#[case(0)]
#[case(1)]
#[case(8)]
fn nesting_limit_does_not_change_output(#[case] max_nesting_depth: usize) {
    let config = Config {
        limits: Limits { max_nesting_depth },
        ..Config::default()
    };
    let renderer = MessageRenderer::new(&config).unwrap();

    let doc = renderer.render("| A |\n|---|\nx | y ---");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Table(Table {
                headers: vec!["A".into()],
                rows: vec![],
            }),
            Block::Section(vec![Block::Paragraph(vec![text("x | y ---")])]),
        ]
    );
    assert_eq!(doc, render_message("| A |\n|---|\nx | y ---"));
}
