//! R Markdown document rendering tests.

use nbgist_render::{Page, PageOptions, StrategyRegistry};

#[test]
fn report_renders_header_blocks_and_page_title() {
    let source = include_str!("../fixtures/report.rmd");
    let registry = StrategyRegistry::default();
    let mut page = Page::new();

    let rendering = registry
        .render_file("report.rmd", source, &mut page)
        .unwrap()
        .unwrap();

    assert_eq!(page.title(), Some("T - A"));
    let body = page.body_html();
    assert!(body.contains("<h1 class=\"title\">T</h1>"));
    assert!(body.contains("<p class=\"author\">A</p>"));
    assert!(body.contains("data-executable=\"true\""));
    assert_eq!(rendering.kernel.name(), "R");
}

#[test]
fn page_title_survives_into_the_wrapped_document() {
    let source = include_str!("../fixtures/report.rmd");
    let registry = StrategyRegistry::default();
    let mut page = Page::new();
    registry.render_file("report.rmd", source, &mut page).unwrap();

    let html = page.to_html(&PageOptions::default());
    assert!(html.contains("<title>T - A</title>"));
}
