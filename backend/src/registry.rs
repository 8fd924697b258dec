//! The in-process table of created links.
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use dioxus::logger::tracing::trace;
use url::Url;

static REGISTRY: LazyLock<LinkRegistry> = LazyLock::new(LinkRegistry::default);

pub(crate) fn get_registry() -> &'static LinkRegistry {
    &REGISTRY
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Slug already in use")]
    SlugTaken,
    #[error("The link registry is unavailable")]
    Poisoned,
}

/// Maps slugs to their destinations. A slug can be registered once.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    links: RwLock<HashMap<String, String>>,
}

impl LinkRegistry {
    /// # Errors
    /// Fails with [`RegistryError::SlugTaken`] if the slug already points somewhere.
    pub fn register(&self, slug: &str, target: &Url) -> Result<(), RegistryError> {
        let mut links = self.links.write().map_err(|_| RegistryError::Poisoned)?;
        if links.contains_key(slug) {
            return Err(RegistryError::SlugTaken);
        }
        trace!("Registering {} -> {}", slug, target);
        links.insert(slug.to_string(), target.to_string());
        Ok(())
    }

    #[must_use]
    pub fn target_of(&self, slug: &str) -> Option<String> {
        self.links.read().ok()?.get(slug).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.read().map_or(0, |links| links.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("valid url")
    }

    #[test]
    fn registered_slug_resolves() {
        let registry = LinkRegistry::default();
        assert!(registry.is_empty());
        registry
            .register("mylink", &url("https://example.com/page"))
            .expect("free slug");
        assert_eq!(
            registry.target_of("mylink").as_deref(),
            Some("https://example.com/page")
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn taken_slug_keeps_first_target() {
        let registry = LinkRegistry::default();
        registry
            .register("mylink", &url("https://one.example"))
            .expect("free slug");
        assert_eq!(
            registry.register("mylink", &url("https://two.example")),
            Err(RegistryError::SlugTaken)
        );
        assert_eq!(
            registry.target_of("mylink").as_deref(),
            Some("https://one.example/")
        );
    }
}
