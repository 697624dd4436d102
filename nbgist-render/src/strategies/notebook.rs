//! Jupyter notebook rendering (.ipynb)
//!
//! Two schema generations exist in the wild: the current one keeps cells as a
//! flat top-level list with a canonical `source` field; the legacy one nests
//! cells under a single `worksheets` entry and names the code source field
//! `input`. Normalization resolves the variant once, up front, into a flat
//! cell list — downstream code never presence-checks `worksheets` again.
//!
//! Cell sources arrive either as one string or as a list of string fragments;
//! both collapse to one string (fragments concatenated in order, no
//! separators). A cell missing its type tag or source is skipped with a log
//! line, not an error, and skipping never reorders the surviving blocks.

use crate::error::RenderError;
use crate::kernel::KernelSelection;
use crate::markdown;
use crate::page::Page;
use crate::strategy::{RenderStrategy, Rendering};
use serde::Deserialize;
use serde_json::Value;

/// Notebook document as it appears on the wire, either schema generation.
#[derive(Debug, Deserialize)]
pub struct RawNotebook {
    #[serde(default)]
    pub cells: Option<Vec<RawCell>>,
    #[serde(default)]
    pub worksheets: Option<Vec<RawWorksheet>>,
    #[serde(default)]
    pub metadata: Value,
}

#[derive(Debug, Deserialize)]
pub struct RawWorksheet {
    #[serde(default)]
    pub cells: Vec<RawCell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCell {
    #[serde(default)]
    pub cell_type: Option<String>,
    #[serde(default)]
    pub source: Option<CellSource>,
    /// Legacy name of the source field in worksheet-schema notebooks.
    #[serde(default)]
    pub input: Option<CellSource>,
}

/// Cell source: a single string or ordered fragments to concatenate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Scalar(String),
    Fragments(Vec<String>),
}

impl CellSource {
    /// Collapse to one string; fragments concatenate with no separator.
    pub fn into_text(self) -> String {
        match self {
            CellSource::Scalar(text) => text,
            CellSource::Fragments(fragments) => fragments.concat(),
        }
    }
}

/// Schema variant, resolved exactly once per notebook.
#[derive(Debug)]
enum SchemaCells {
    Current(Vec<RawCell>),
    Legacy(Vec<RawCell>),
}

/// A normalized notebook: flat ordered cells plus the declared kernel name.
#[derive(Debug)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub kernel_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    Code,
    Markdown,
    Other(String),
}

/// Normalize either schema generation into a flat cell list.
pub fn normalize(raw: RawNotebook) -> Notebook {
    let resolved = match (raw.cells, raw.worksheets) {
        (Some(cells), _) => SchemaCells::Current(cells),
        (None, Some(worksheets)) => SchemaCells::Legacy(
            worksheets
                .into_iter()
                .next()
                .map(|worksheet| worksheet.cells)
                .unwrap_or_default(),
        ),
        (None, None) => SchemaCells::Current(Vec::new()),
    };

    let raw_cells = match resolved {
        SchemaCells::Current(cells) => cells,
        SchemaCells::Legacy(cells) => cells
            .into_iter()
            .map(|mut cell| {
                // Copy the legacy source field into the canonical one.
                if cell.source.is_none() {
                    cell.source = cell.input.take();
                }
                cell
            })
            .collect(),
    };

    let mut cells = Vec::with_capacity(raw_cells.len());
    for raw_cell in raw_cells {
        match (raw_cell.cell_type, raw_cell.source) {
            (Some(cell_type), Some(source)) => cells.push(Cell {
                kind: cell_kind(&cell_type),
                source: source.into_text(),
            }),
            (cell_type, _) => {
                log::warn!(
                    "skipping cell without source and/or cell_type (type: {cell_type:?})"
                );
            }
        }
    }

    Notebook {
        cells,
        kernel_name: kernel_name(&raw.metadata),
    }
}

fn cell_kind(cell_type: &str) -> CellKind {
    match cell_type {
        "code" => CellKind::Code,
        "markdown" => CellKind::Markdown,
        other => CellKind::Other(other.to_string()),
    }
}

/// Declared kernel name, if the metadata carries a well-formed one.
fn kernel_name(metadata: &Value) -> Option<String> {
    metadata
        .get("kernelspec")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

/// Strategy implementation for Jupyter notebooks
pub struct NotebookStrategy;

impl RenderStrategy for NotebookStrategy {
    fn name(&self) -> &str {
        "notebook"
    }

    fn description(&self) -> &str {
        "Jupyter notebook JSON (current or legacy worksheet schema)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["ipynb"]
    }

    fn render(&self, source: &str, page: &mut Page) -> Result<Rendering, RenderError> {
        let raw: RawNotebook = serde_json::from_str(source)
            .map_err(|e| RenderError::ParseError(format!("invalid notebook JSON: {e}")))?;
        let notebook = normalize(raw);

        for cell in notebook.cells {
            match cell.kind {
                CellKind::Code => page.push_executable(cell.source, None),
                CellKind::Markdown => page.push_prose(markdown::render_prose(&cell.source)),
                CellKind::Other(kind) => {
                    log::warn!("unrecognized cell type '{kind}', nothing rendered");
                }
            }
        }

        Ok(Rendering {
            kernel: KernelSelection::resolve(notebook.kernel_name.as_deref(), None),
        })
    }
}
