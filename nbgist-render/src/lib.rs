//! Rendering core for gist-hosted notebook documents
//!
//!     This crate turns notebook-like documents (Jupyter .ipynb JSON, Markdown,
//!     R Markdown with YAML front matter) into an ordered sequence of HTML blocks
//!     on a [`Page`]: executable code blocks, marked for a remote execution widget
//!     to pick up, and prose blocks rendered from markdown.
//!
//!     This is a pure lib: it powers the nbgist CLI but is shell and network
//!     agnostic. Fetching gist listings and raw content lives in the CLI crate;
//!     everything here takes source text in and appends blocks to an injected
//!     render target.
//!
//! Architecture
//!
//!     Each supported document kind is a [`RenderStrategy`]. The
//!     [`StrategyRegistry`] picks a strategy from the filename extension
//!     (case-insensitive) and dispatches; files with an unknown extension are
//!     skipped silently. Strategies append [`RenderedBlock`]s to the shared
//!     [`Page`] and report a [`KernelSelection`] for the execution widget.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── strategy.rs             # RenderStrategy trait definition
//!     ├── registry.rs             # StrategyRegistry for detection and dispatch
//!     ├── page.rs                 # Render target + final HTML document wrapping
//!     ├── frontmatter.rs          # YAML front-matter splitting for .rmd
//!     ├── markdown.rs             # comrak rendering with the executable fence rule
//!     ├── kernel.rs               # Kernel name resolution
//!     ├── binder.rs               # Execution widget bootstrap emission
//!     ├── strategies
//!     │   ├── notebook.rs         # .ipynb (current and legacy worksheet schema)
//!     │   ├── markdown.rs         # .md
//!     │   └── rmarkdown.rs        # .rmd
//!     └── lib.rs
//!
//! Library Choices
//!
//!     Markdown is never rendered by hand: comrak parses and serializes, and the
//!     executable-block rule is injected by rewriting fenced-code nodes in its
//!     AST before serialization. Front matter is decoded by serde_yaml. Notebook
//!     JSON is plain serde data; the two schema generations are normalized once
//!     into a flat cell list instead of duck-typing at every use site.
//!
//! Error Policy
//!
//!     Per-cell problems degrade silently: a cell missing its type tag or source
//!     is skipped with a log line and surrounding block order is preserved.
//!     Document-level problems (unparseable notebook JSON, malformed front
//!     matter) propagate as [`RenderError`] for the caller to surface.

pub mod binder;
pub mod error;
pub mod frontmatter;
pub mod kernel;
pub mod markdown;
pub mod page;
pub mod registry;
pub mod strategies;
pub mod strategy;

pub use binder::{BinderOptions, ExecutionBinder};
pub use error::RenderError;
pub use frontmatter::{split_front_matter, FrontMatter};
pub use kernel::KernelSelection;
pub use page::{Page, PageOptions, RenderedBlock};
pub use registry::StrategyRegistry;
pub use strategy::{RenderStrategy, Rendering};
