//! Markdown rendering (.md)
//!
//! The whole document renders as one prose block whose fenced code blocks
//! carry the executable marker. The last fence's language annotation becomes
//! the kernel language hint for the page.

use crate::error::RenderError;
use crate::kernel::KernelSelection;
use crate::markdown;
use crate::page::Page;
use crate::strategy::{RenderStrategy, Rendering};

/// Strategy implementation for plain Markdown
pub struct MarkdownStrategy;

impl RenderStrategy for MarkdownStrategy {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with executable fenced code blocks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn render(&self, source: &str, page: &mut Page) -> Result<Rendering, RenderError> {
        let rendered = markdown::render_executable(source)?;
        page.push_prose(rendered.html);

        Ok(Rendering {
            kernel: KernelSelection::resolve(None, rendered.language_hint.as_deref()),
        })
    }
}
