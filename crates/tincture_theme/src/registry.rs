//! Named theme registry

use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::config::ThemeDocument;
use crate::error::{Result, ThemeError};
use crate::presets::ThemePreset;
use crate::theme::DesignSystem;

/// Themes addressable by name.
///
/// Values are shared as `Arc<DesignSystem>` so a lookup can be handed to a
/// [`ThemeState`](crate::ThemeState) without copying the token tables.
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: FxHashMap<String, Arc<DesignSystem>>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with every built-in preset under its display name
    pub fn with_presets() -> Self {
        let mut registry = Self::new();
        for preset in ThemePreset::all() {
            registry
                .themes
                .insert(preset.display_name().to_string(), Arc::new(preset.build()));
        }
        registry
    }

    /// Adds a theme; fails if the name is taken
    pub fn register(&mut self, theme: DesignSystem) -> Result<Arc<DesignSystem>> {
        if self.themes.contains_key(theme.name()) {
            return Err(ThemeError::DuplicateTheme(theme.name().to_string()));
        }
        let theme = Arc::new(theme);
        self.themes.insert(theme.name().to_string(), Arc::clone(&theme));
        tracing::debug!(theme = theme.name(), "registered theme");
        Ok(theme)
    }

    /// Adds or replaces a theme, returning the previous one
    pub fn replace(&mut self, theme: DesignSystem) -> Option<Arc<DesignSystem>> {
        let name = theme.name().to_string();
        let previous = self.themes.insert(name, Arc::new(theme));
        if previous.is_some() {
            tracing::debug!("replaced registered theme");
        }
        previous
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<DesignSystem>> {
        self.themes.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<DesignSystem>> {
        self.themes.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Builds and registers a document.
    ///
    /// A document extending a preset by id resolves against the built-in
    /// catalog, not against registered themes.
    pub fn load_document(&mut self, document: &ThemeDocument) -> Result<Arc<DesignSystem>> {
        self.register(document.build()?)
    }

    pub fn load_toml_str(&mut self, content: &str) -> Result<Arc<DesignSystem>> {
        self.load_document(&ThemeDocument::from_toml_str(content)?)
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Arc<DesignSystem>> {
        self.load_document(&ThemeDocument::load(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_seeded() {
        let registry = ThemeRegistry::with_presets();
        assert_eq!(registry.names(), vec!["Default", "Minimal", "Pop"]);
        assert_eq!(*registry.get("Pop").unwrap(), DesignSystem::pop());
        assert!(registry.get("pop").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = ThemeRegistry::with_presets();
        let err = registry.register(DesignSystem::minimal()).unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateTheme(ref name) if name == "Minimal"));

        let previous = registry.replace(DesignSystem::minimal());
        assert!(previous.is_some());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_load_toml() {
        let mut registry = ThemeRegistry::new();
        assert!(registry.is_empty());

        let theme = registry
            .load_toml_str("name = \"Night\"\nextends = \"minimal\"\n[spacing]\nmd = 20")
            .unwrap();
        assert_eq!(theme.name(), "Night");
        assert_eq!(theme.spacing().md, 20.0);
        assert!(registry.contains("Night"));

        // Same name again
        assert!(registry.load_toml_str("name = \"Night\"").is_err());
        assert!(registry.remove("Night").is_some());
        assert!(registry.is_empty());
    }
}
