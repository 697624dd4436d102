//! Markdown document rendering tests.

use nbgist_render::{Page, StrategyRegistry};

#[test]
fn fenced_markdown_renders_executable_blocks() {
    let source = include_str!("../fixtures/fenced.md");
    let registry = StrategyRegistry::default();
    let mut page = Page::new();

    let rendering = registry
        .render_file("fenced.md", source, &mut page)
        .unwrap()
        .unwrap();

    let body = page.body_html();
    assert!(body.contains("<h1>Walkthrough</h1>"));
    assert!(body.contains("data-executable=\"true\""));
    assert!(body.contains("import antigravity"));
    // Two fences; the ruby one comes last and supplies the hint.
    assert_eq!(rendering.kernel.name(), "ruby");
}

#[test]
fn markdown_extension_detection_handles_both_spellings() {
    let registry = StrategyRegistry::default();
    assert_eq!(
        registry.detect_strategy_from_filename("notes.markdown"),
        Some("markdown".to_string())
    );
}

#[test]
fn multiple_files_append_in_encounter_order() {
    let registry = StrategyRegistry::default();
    let mut page = Page::new();

    registry
        .render_file("a.md", "first document\n", &mut page)
        .unwrap();
    registry
        .render_file("b.md", "second document\n", &mut page)
        .unwrap();

    let body = page.body_html();
    assert!(body.find("first document").unwrap() < body.find("second document").unwrap());
}
