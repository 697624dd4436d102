//! Strategy registry for document detection and dispatch
//!
//! This module provides a centralized registry for all rendering strategies.
//! Strategies can be registered, retrieved by name, or selected from a
//! filename extension.

use crate::error::RenderError;
use crate::page::Page;
use crate::strategy::{RenderStrategy, Rendering};
use std::collections::HashMap;
use std::path::Path;

/// Registry of document rendering strategies
///
/// # Examples
///
/// ```ignore
/// let registry = StrategyRegistry::default();
/// let mut page = Page::new();
/// registry.render_file("analysis.ipynb", source, &mut page)?;
/// ```
pub struct StrategyRegistry {
    strategies: HashMap<String, Box<dyn RenderStrategy>>,
}

impl StrategyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        StrategyRegistry {
            strategies: HashMap::new(),
        }
    }

    /// Register a strategy
    ///
    /// If a strategy with the same name already exists, it will be replaced.
    pub fn register<S: RenderStrategy + 'static>(&mut self, strategy: S) {
        self.strategies
            .insert(strategy.name().to_string(), Box::new(strategy));
    }

    /// Get a strategy by name
    pub fn get(&self, name: &str) -> Result<&dyn RenderStrategy, RenderError> {
        self.strategies
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| RenderError::StrategyNotFound(name.to_string()))
    }

    /// Check if a strategy exists
    pub fn has(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// List all available strategy names (sorted)
    pub fn list_strategies(&self) -> Vec<String> {
        let mut names: Vec<_> = self.strategies.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect a strategy from a filename's extension, case-insensitively.
    ///
    /// Returns the strategy name if a matching extension is found, or None
    /// otherwise.
    pub fn detect_strategy_from_filename(&self, filename: &str) -> Option<String> {
        let lowered = filename.to_ascii_lowercase();
        let extension = Path::new(&lowered).extension().and_then(|ext| ext.to_str())?;

        for strategy in self.strategies.values() {
            if strategy.file_extensions().contains(&extension) {
                return Some(strategy.name().to_string());
            }
        }

        None
    }

    /// Render one file onto the page if any strategy recognizes it.
    ///
    /// Files with an unrecognized extension are skipped silently: no block is
    /// appended, no error is surfaced, and `Ok(None)` is returned.
    pub fn render_file(
        &self,
        filename: &str,
        source: &str,
        page: &mut Page,
    ) -> Result<Option<Rendering>, RenderError> {
        let Some(name) = self.detect_strategy_from_filename(filename) else {
            log::debug!("no strategy for '{filename}', skipping");
            return Ok(None);
        };
        let strategy = self.get(&name)?;
        log::info!("rendering '{filename}' as {name}");
        strategy.render(source, page).map(Some)
    }

    /// Create a registry with the built-in strategies
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::strategies::notebook::NotebookStrategy);
        registry.register(crate::strategies::markdown::MarkdownStrategy);
        registry.register(crate::strategies::rmarkdown::RmarkdownStrategy);

        registry
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::KernelSelection;

    struct TestStrategy;
    impl RenderStrategy for TestStrategy {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test strategy"
        }
        fn file_extensions(&self) -> &[&str] {
            &["tst"]
        }
        fn render(&self, source: &str, page: &mut Page) -> Result<Rendering, RenderError> {
            page.push_prose(format!("<p>{source}</p>"));
            Ok(Rendering {
                kernel: KernelSelection::fallback(),
            })
        }
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = StrategyRegistry::new();
        registry.register(TestStrategy);

        assert!(registry.has("test"));
        assert_eq!(registry.get("test").unwrap().name(), "test");
        assert_eq!(registry.list_strategies(), vec!["test"]);
    }

    #[test]
    fn registry_get_nonexistent() {
        let registry = StrategyRegistry::new();
        match registry.get("nonexistent") {
            Err(RenderError::StrategyNotFound(name)) => assert_eq!(name, "nonexistent"),
            Ok(s) => panic!("Expected StrategyNotFound, got Ok({})", s.name()),
            Err(other) => panic!("Expected StrategyNotFound, got {other:?}"),
        }
    }

    #[test]
    fn detect_from_filename() {
        let registry = StrategyRegistry::with_defaults();

        assert_eq!(
            registry.detect_strategy_from_filename("analysis.ipynb"),
            Some("notebook".to_string())
        );
        assert_eq!(
            registry.detect_strategy_from_filename("notes.md"),
            Some("markdown".to_string())
        );
        assert_eq!(
            registry.detect_strategy_from_filename("report.rmd"),
            Some("rmarkdown".to_string())
        );
        assert_eq!(registry.detect_strategy_from_filename("data.csv"), None);
        assert_eq!(registry.detect_strategy_from_filename("no-extension"), None);
    }

    #[test]
    fn detection_is_case_insensitive() {
        let registry = StrategyRegistry::with_defaults();

        assert_eq!(
            registry.detect_strategy_from_filename("Analysis.IPYNB"),
            Some("notebook".to_string())
        );
        assert_eq!(
            registry.detect_strategy_from_filename("report.Rmd"),
            Some("rmarkdown".to_string())
        );
    }

    #[test]
    fn unknown_extension_renders_nothing() {
        let registry = StrategyRegistry::with_defaults();
        let mut page = Page::new();

        let result = registry.render_file("image.png", "binarydata", &mut page);
        assert_eq!(result.unwrap(), None);
        assert!(page.blocks().is_empty());
    }

    #[test]
    fn render_file_dispatches_to_matching_strategy() {
        let mut registry = StrategyRegistry::new();
        registry.register(TestStrategy);
        let mut page = Page::new();

        let rendering = registry.render_file("a.tst", "hello", &mut page).unwrap();
        assert!(rendering.is_some());
        assert_eq!(page.blocks().len(), 1);
    }

    #[test]
    fn defaults_register_all_three_strategies() {
        let registry = StrategyRegistry::default();
        assert!(registry.has("notebook"));
        assert!(registry.has("markdown"));
        assert!(registry.has("rmarkdown"));
    }
}
