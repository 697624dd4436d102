//! Execution widget bootstrap
//!
//! The interactive-execution widget is an external collaborator: it scans the
//! page for executable-marked blocks and attaches run controls wired to a
//! remote kernel service. The binder's whole obligation is to hand it a
//! correct kernel name and service URL once all executable blocks exist on the
//! page, which is why one binder is constructed per full document render,
//! after rendering finishes.

use crate::error::RenderError;
use crate::page::{escape_html, Page};
use serde::Serialize;

/// Connection settings for the execution widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinderOptions {
    /// Base URL of the remote kernel service.
    pub service_url: String,
    /// URL of the widget script itself.
    pub widget_url: String,
    /// Kernel the widget should launch for this page.
    pub kernel_name: String,
}

/// Binds rendered executable blocks to the execution widget.
pub struct ExecutionBinder {
    options: BinderOptions,
}

#[derive(Serialize)]
struct WidgetConfig<'a> {
    url: &'a str,
    kernel_name: &'a str,
}

impl ExecutionBinder {
    pub fn new(options: BinderOptions) -> Self {
        Self { options }
    }

    /// Emit the bootstrap HTML: the widget's JSON config followed by its
    /// script tag. Must be called only after every block is on the page.
    pub fn bootstrap_html(&self, page: &Page) -> Result<String, RenderError> {
        let executable = page.executable_count();
        log::info!(
            "binding {executable} executable block(s) to kernel '{}'",
            self.options.kernel_name
        );

        let config = serde_json::to_string(&WidgetConfig {
            url: &self.options.service_url,
            kernel_name: &self.options.kernel_name,
        })
        .map_err(|e| RenderError::RenderFailed(format!("widget config failed: {e}")))?;

        Ok(format!(
            "<script type=\"application/json\" id=\"exec-widget-config\">{config}</script>\n<script src=\"{}\"></script>\n",
            escape_html(&self.options.widget_url)
        ))
    }
}
