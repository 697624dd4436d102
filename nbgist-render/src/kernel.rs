//! Kernel name resolution
//!
//! Every rendered document resolves to one kernel name for the execution
//! widget. Resolution priority: an explicit kernel declared in document
//! metadata, then a language hint taken from the last fenced code block, then
//! the fixed fallback. R Markdown documents bypass all of that and always
//! select the R kernel.

/// Fallback kernel when neither metadata nor a language hint is available.
pub const FALLBACK_KERNEL: &str = "python3";

/// Kernel flavor targeted by a document's executable blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelSelection {
    name: String,
}

impl KernelSelection {
    /// Resolve a kernel name from the available signals.
    ///
    /// `explicit` is a kernel name declared by the document itself
    /// (`metadata.kernelspec.name` for notebooks); it wins when present and
    /// non-empty. `hint` is the language annotation of the last fenced code
    /// block seen in a markdown document. With neither, the fallback applies.
    pub fn resolve(explicit: Option<&str>, hint: Option<&str>) -> Self {
        let name = explicit
            .filter(|name| !name.is_empty())
            .or_else(|| hint.filter(|hint| !hint.is_empty()))
            .unwrap_or(FALLBACK_KERNEL);
        Self {
            name: name.to_string(),
        }
    }

    /// The fixed selection for R Markdown documents.
    pub fn r() -> Self {
        Self {
            name: "R".to_string(),
        }
    }

    /// The fallback selection.
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_KERNEL.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_metadata_name_wins() {
        let kernel = KernelSelection::resolve(Some("julia-1.9"), Some("python"));
        assert_eq!(kernel.name(), "julia-1.9");
    }

    #[test]
    fn empty_explicit_name_is_treated_as_absent() {
        let kernel = KernelSelection::resolve(Some(""), None);
        assert_eq!(kernel.name(), "python3");
    }

    #[test]
    fn language_hint_beats_fallback() {
        let kernel = KernelSelection::resolve(None, Some("ruby"));
        assert_eq!(kernel.name(), "ruby");
    }

    #[test]
    fn fallback_when_no_signal() {
        let kernel = KernelSelection::resolve(None, None);
        assert_eq!(kernel.name(), "python3");
    }

    #[test]
    fn rmarkdown_selection_is_fixed() {
        assert_eq!(KernelSelection::r().name(), "R");
    }
}
