//! Render target and final HTML document wrapping
//!
//! [`Page`] is the single render-target handle threaded through the component
//! chain. Strategies append blocks in document order; that order defines the
//! page's vertical reading order and is preserved exactly. Wrapping the block
//! sequence into a complete HTML5 document (embedded CSS, page title, one math
//! typeset pass, the execution-widget bootstrap) happens in [`Page::to_html`].

/// One rendered block appended to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    /// Code wrapped in the executable marker for the execution widget.
    Executable {
        code: String,
        language: Option<String>,
    },
    /// Markdown-derived or plain prose HTML.
    Prose { html: String },
}

impl RenderedBlock {
    /// HTML fragment for this block.
    pub fn to_html(&self) -> String {
        match self {
            RenderedBlock::Executable { code, language } => {
                executable_pre(code, language.as_deref())
            }
            RenderedBlock::Prose { html } => format!("<div class=\"md\">{html}</div>"),
        }
    }
}

/// Options for wrapping a page into a full HTML document.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Include the math typesetting pass.
    pub math: bool,
    /// Execution-widget bootstrap HTML, appended after the container.
    pub bootstrap: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            math: true,
            bootstrap: None,
        }
    }
}

/// The page being rendered: an ordered block list plus an optional title.
///
/// A single handle threaded explicitly through the render chain; strategies
/// never reach for shared state. Nothing here persists past one render;
/// `clear` resets the page so a full re-render stays idempotent.
#[derive(Debug, Default)]
pub struct Page {
    blocks: Vec<RenderedBlock>,
    title: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all rendered content and the title.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.title = None;
    }

    pub fn push_executable(&mut self, code: String, language: Option<String>) {
        self.blocks.push(RenderedBlock::Executable { code, language });
    }

    pub fn push_prose(&mut self, html: String) {
        self.blocks.push(RenderedBlock::Prose { html });
    }

    pub fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn blocks(&self) -> &[RenderedBlock] {
        &self.blocks
    }

    /// Count executable-marked blocks as the widget will find them, including
    /// fenced blocks embedded inside prose HTML.
    pub fn executable_count(&self) -> usize {
        self.body_html().matches(EXECUTABLE_MARKER).count()
    }

    /// The container contents: every block's HTML in insertion order.
    pub fn body_html(&self) -> String {
        let mut body = String::new();
        for block in &self.blocks {
            body.push_str(&block.to_html());
            body.push('\n');
        }
        body
    }

    /// Wrap the rendered blocks into a complete HTML document.
    pub fn to_html(&self, options: &PageOptions) -> String {
        let css = include_str!("../css/page.css");
        let title = escape_html(self.title.as_deref().unwrap_or("Notebook"));
        let body = self.body_html();

        let math_head = if options.math { MATH_SCRIPT } else { "" };
        let math_queue = if options.math { MATH_QUEUE } else { "" };
        let bootstrap = options.bootstrap.as_deref().unwrap_or("");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="nbgist">
  <title>{title}</title>
  <style>
{css}
  </style>
{math_head}</head>
<body>
<div id="container">
{body}</div>
{math_queue}{bootstrap}</body>
</html>"#
        )
    }
}

/// Marker attribute the execution widget scans for.
const EXECUTABLE_MARKER: &str = "data-executable=\"true\"";

const MATH_SCRIPT: &str = "  <script src=\"https://cdn.mathjax.org/mathjax/latest/MathJax.js?config=TeX-AMS_HTML\"></script>\n";

// One typeset pass over the whole page, queued after the container exists.
const MATH_QUEUE: &str =
    "<script>MathJax.Hub.Queue([\"Typeset\", MathJax.Hub]);</script>\n";

/// Build an executable code block fragment.
pub(crate) fn executable_pre(code: &str, language: Option<&str>) -> String {
    let mut html = String::from("<pre data-executable=\"true\"");
    if let Some(language) = language {
        html.push_str(" data-language=\"");
        html.push_str(&escape_html(language));
        html.push('"');
    }
    html.push('>');
    html.push_str(&escape_html(code));
    html.push_str("</pre>");
    html
}

/// Escape HTML special characters in text
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
