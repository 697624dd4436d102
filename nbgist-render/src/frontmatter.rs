//! YAML front-matter splitting
//!
//! R Markdown documents may open with a metadata block delimited by lines of
//! exactly `---`. The splitter separates that block from the body text and
//! decodes it with serde_yaml. A document without a leading block yields empty
//! front matter and the full input as body. Malformed YAML is not tolerated
//! here; it propagates to the caller.

use crate::error::RenderError;
use serde::Deserialize;

/// Metadata decoded from a document's leading YAML block.
///
/// Unknown keys are ignored; only the fields the renderer uses are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl FrontMatter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.date.is_none()
    }

    /// Join the present fields as "title - author - date", skipping absent
    /// ones with no doubled separators.
    pub fn page_title(&self) -> Option<String> {
        let fields: Vec<&str> = [&self.title, &self.author, &self.date]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .collect();
        if fields.is_empty() {
            None
        } else {
            Some(fields.join(" - "))
        }
    }
}

/// Split an optional leading front-matter block from the document body.
///
/// The opening delimiter must be the document's first line and the closing
/// delimiter a later line of exactly `---`. Without a well-formed pair the
/// whole input is body text.
pub fn split_front_matter(source: &str) -> Result<(FrontMatter, &str), RenderError> {
    let Some(rest) = strip_delimiter_line(source) else {
        return Ok((FrontMatter::default(), source));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);
        if content == "---" {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let matter = decode_block(block)?;
            return Ok((matter, body));
        }
        offset += line.len();
    }

    // No closing delimiter; nothing to split.
    Ok((FrontMatter::default(), source))
}

/// Strip a leading `---` line, returning the text after its newline.
fn strip_delimiter_line(source: &str) -> Option<&str> {
    let rest = source.strip_prefix("---")?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

fn decode_block(block: &str) -> Result<FrontMatter, RenderError> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(block).map_err(|e| RenderError::FrontMatterError(e.to_string()))
}
