//! Dialect lookup by name.

use super::{AzureDevOpsMarkdown, Format, FormatError, GitHubFlavoredMarkdown, PlainMarkdown};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of markdown dialects, keyed by [`Format::name`].
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let format = registry.get("azure-devops")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Arc<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a dialect, replacing any dialect with the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Arc::new(format));
    }

    /// Get a dialect by name. Unknown names are rejected.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Format>, FormatError> {
        self.formats
            .get(name)
            .cloned()
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// All dialect names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registry holding the built-in dialects.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(GitHubFlavoredMarkdown);
        registry.register(AzureDevOpsMarkdown);
        registry.register(PlainMarkdown);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.list_formats(),
            vec!["azure-devops", "github", "plain"]
        );
    }

    #[test]
    fn test_registry_get() {
        let registry = FormatRegistry::default();
        let format = registry.get("plain").unwrap();
        assert_eq!(format.name(), "plain");
    }

    #[test]
    fn test_registry_rejects_unknown_format() {
        let registry = FormatRegistry::default();
        match registry.get("asciidoc") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "asciidoc"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("asciidoc should not be registered"),
        }
    }

    #[test]
    fn test_registry_register_replaces() {
        let mut registry = FormatRegistry::new();
        assert!(!registry.has("github"));
        registry.register(GitHubFlavoredMarkdown);
        registry.register(GitHubFlavoredMarkdown);
        assert_eq!(registry.list_formats(), vec!["github"]);
    }
}
