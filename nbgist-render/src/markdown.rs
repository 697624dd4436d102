//! Markdown rendering with the executable fence rule
//!
//! Markdown → HTML goes through comrak. For whole documents (.md and .rmd
//! bodies) the default fenced-code rendering is replaced: every fenced code
//! block is rewritten in the comrak AST into a raw HTML block carrying the
//! executable marker, and the fence's language annotation is captured. The
//! last annotation seen across the document becomes the kernel language hint.
//! Notebook markdown cells render through the plain pipeline where fences stay
//! ordinary `<pre><code>` blocks.

use crate::error::RenderError;
use crate::page::executable_pre;
use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::{format_html, markdown_to_html, parse_document, Arena, ComrakOptions};

/// Output of the executable-fence rendering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMarkdown {
    pub html: String,
    /// Language annotation of the last fenced code block, if any fence had one.
    pub language_hint: Option<String>,
}

/// Render a markdown document, turning fenced code blocks into executable
/// blocks and capturing the last fence's language annotation.
pub fn render_executable(source: &str) -> Result<RenderedMarkdown, RenderError> {
    let arena = Arena::new();
    let options = comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut language_hint = None;
    rewrite_code_blocks(root, &mut language_hint);

    let mut output = Vec::new();
    format_html(root, &options, &mut output)
        .map_err(|e| RenderError::RenderFailed(format!("markdown serialization failed: {e}")))?;
    let html = String::from_utf8(output)
        .map_err(|e| RenderError::RenderFailed(format!("UTF-8 conversion failed: {e}")))?;

    Ok(RenderedMarkdown {
        html,
        language_hint,
    })
}

/// Render prose markdown (notebook markdown cells) with the default rules.
pub fn render_prose(source: &str) -> String {
    markdown_to_html(source, &comrak_options())
}

fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // Raw HTML passes through, and the rewritten executable blocks need it.
    options.render.unsafe_ = true;
    options
}

/// Replace every fenced code block with a raw executable-block fragment,
/// recording language annotations in document order.
fn rewrite_code_blocks<'a>(node: &'a AstNode<'a>, language_hint: &mut Option<String>) {
    for child in node.children() {
        rewrite_code_blocks(child, language_hint);
    }

    let replacement = {
        let data = node.data.borrow();
        if let NodeValue::CodeBlock(block) = &data.value {
            let language = fence_language(&block.info);
            if language.is_some() {
                *language_hint = language.clone();
            }
            Some(executable_pre(&block.literal, language.as_deref()))
        } else {
            None
        }
    };

    if let Some(html) = replacement {
        node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: 6,
            literal: html,
        });
    }
}

/// Language annotation from a fence info string.
///
/// The first whitespace-separated token, with R-Markdown brace wrapping
/// stripped; per-block execution options after it are not parsed.
fn fence_language(info: &str) -> Option<String> {
    let token = info.split_whitespace().next()?;
    let token = token.trim_start_matches('{').trim_end_matches('}');
    let token = match token.split_once(',') {
        Some((language, _options)) => language,
        None => token,
    };
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
