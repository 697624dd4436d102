//! End-to-end notebook rendering tests against the public registry API.

use nbgist_render::{Page, RenderedBlock, StrategyRegistry};

#[test]
fn two_cell_notebook_renders_two_blocks_in_order() {
    let source = include_str!("../fixtures/two-cells.ipynb");
    let registry = StrategyRegistry::default();
    let mut page = Page::new();

    let rendering = registry
        .render_file("two-cells.ipynb", source, &mut page)
        .expect("notebook renders")
        .expect("ipynb is recognized");

    assert_eq!(page.blocks().len(), 2);
    match &page.blocks()[0] {
        RenderedBlock::Executable { code, .. } => assert_eq!(code, "print(1)"),
        other => panic!("expected executable block first, got {other:?}"),
    }
    match &page.blocks()[1] {
        RenderedBlock::Prose { html } => assert!(html.contains("<h1>Hi</h1>")),
        other => panic!("expected prose block second, got {other:?}"),
    }
    assert_eq!(rendering.kernel.name(), "python3");
}

#[test]
fn code_block_inner_text_is_the_unmodified_source() {
    let source = r#"{"cells": [{"cell_type": "code", "source": "a = \"x\"\nprint(a)"}]}"#;
    let registry = StrategyRegistry::default();
    let mut page = Page::new();

    registry
        .render_file("snippet.ipynb", source, &mut page)
        .unwrap();

    match &page.blocks()[0] {
        RenderedBlock::Executable { code, .. } => assert_eq!(code, "a = \"x\"\nprint(a)"),
        other => panic!("expected executable block, got {other:?}"),
    }
}

#[test]
fn legacy_worksheet_notebook_renders_flat_cells() {
    let source = include_str!("../fixtures/legacy-worksheets.ipynb");
    let registry = StrategyRegistry::default();
    let mut page = Page::new();

    let rendering = registry
        .render_file("legacy-worksheets.ipynb", source, &mut page)
        .unwrap()
        .unwrap();

    assert_eq!(page.blocks().len(), 2);
    match &page.blocks()[0] {
        RenderedBlock::Executable { code, .. } => assert_eq!(code, "x = 41\nx + 1"),
        other => panic!("expected executable block first, got {other:?}"),
    }
    // No kernelspec in legacy metadata: the fallback applies.
    assert_eq!(rendering.kernel.name(), "python3");
}

#[test]
fn skipped_cells_leave_surrounding_order_intact() {
    let source = r##"{"cells": [
        {"cell_type": "markdown", "source": "# One"},
        {"cell_type": "code"},
        {"cell_type": "markdown", "source": "# Two"}
    ]}"##;
    let registry = StrategyRegistry::default();
    let mut page = Page::new();

    registry.render_file("gaps.ipynb", source, &mut page).unwrap();

    assert_eq!(page.blocks().len(), 2);
    let body = page.body_html();
    assert!(body.find("One").unwrap() < body.find("Two").unwrap());
}
