//! R Markdown rendering (.rmd)
//!
//! Front matter splits off first. Present title/author/date fields render as
//! header blocks in that fixed order and join into the page title; the body
//! renders with the executable fence rule. The kernel is always R, whatever
//! the fences or metadata say.

use crate::error::RenderError;
use crate::frontmatter::split_front_matter;
use crate::kernel::KernelSelection;
use crate::markdown;
use crate::page::{escape_html, Page};
use crate::strategy::{RenderStrategy, Rendering};

/// Strategy implementation for R Markdown
pub struct RmarkdownStrategy;

impl RenderStrategy for RmarkdownStrategy {
    fn name(&self) -> &str {
        "rmarkdown"
    }

    fn description(&self) -> &str {
        "R Markdown with YAML front matter"
    }

    fn file_extensions(&self) -> &[&str] {
        &["rmd"]
    }

    fn render(&self, source: &str, page: &mut Page) -> Result<Rendering, RenderError> {
        let (matter, body) = split_front_matter(source)?;

        if let Some(title) = &matter.title {
            page.push_prose(format!("<h1 class=\"title\">{}</h1>", escape_html(title)));
        }
        if let Some(author) = &matter.author {
            page.push_prose(format!("<p class=\"author\">{}</p>", escape_html(author)));
        }
        if let Some(date) = &matter.date {
            page.push_prose(format!("<p class=\"date\">{}</p>", escape_html(date)));
        }
        if let Some(title) = matter.page_title() {
            page.set_title(title);
        }

        let rendered = markdown::render_executable(body)?;
        page.push_prose(rendered.html);

        // Fence hints never override the fixed R kernel.
        Ok(Rendering {
            kernel: KernelSelection::r(),
        })
    }
}
