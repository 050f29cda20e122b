//! Renderer resolution with caching.
//!
//! The factory is a total function from a requested variant id to a
//! renderer: unknown or misspelled ids resolve to the centered fallback
//! instead of failing, so a page never loses its hero because a section
//! type was renamed. Resolved renderers are cached per (artifact, variant)
//! pair and the cache keeps hit/miss counters for diagnostics.

use std::{
    collections::HashMap,
    str::FromStr,
    sync::{Arc, Mutex},
};

use log::warn;

use crate::{
    render::{self, VariantRenderer},
    variant::HeroVariant,
};

/// Which artifact of a section is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Editor,
    Preview,
}

/// Cache counters, taken as a consistent snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

struct CacheState {
    renderers: HashMap<(ArtifactKind, HeroVariant), Arc<dyn VariantRenderer>>,
    hits: u64,
    misses: u64,
}

/// Resolves variant renderers, memoizing per (artifact, variant).
pub struct SectionFactory {
    cache: Mutex<CacheState>,
}

impl Default for SectionFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionFactory {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(CacheState {
                renderers: HashMap::new(),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Maps a requested variant string to the variant that will render it.
    ///
    /// Accepts both the bare variant tag (`centered`) and the section id
    /// (`hero-centered`). Anything unknown falls back to
    /// [`HeroVariant::Centered`] with a warning.
    pub fn resolve_variant(&self, requested: &str) -> HeroVariant {
        HeroVariant::from_str(requested).unwrap_or_else(|_| {
            warn!("unknown section variant `{requested}`, falling back to centered");
            HeroVariant::Centered
        })
    }

    /// The preview renderer for a requested variant string.
    pub fn renderer(&self, requested: &str) -> Arc<dyn VariantRenderer> {
        self.renderer_for(ArtifactKind::Preview, self.resolve_variant(requested))
    }

    /// The renderer for one artifact of a known variant.
    ///
    /// Editors and previews of the same variant are cached independently
    /// even though both currently share one renderer implementation.
    pub fn renderer_for(&self, kind: ArtifactKind, variant: HeroVariant) -> Arc<dyn VariantRenderer> {
        let mut cache = self.cache.lock().expect("factory cache poisoned");
        if let Some(renderer) = cache.renderers.get(&(kind, variant)).cloned() {
            cache.hits += 1;
            return renderer;
        }
        cache.misses += 1;
        let renderer = render::renderer_for(variant);
        cache.renderers.insert((kind, variant), renderer.clone());
        renderer
    }

    pub fn stats(&self) -> CacheStats {
        let cache = self.cache.lock().expect("factory cache poisoned");
        CacheStats {
            hits: cache.hits,
            misses: cache.misses,
            size: cache.renderers.len(),
        }
    }

    /// Drops all cached renderers; counters are reset too.
    pub fn clear(&self) {
        let mut cache = self.cache.lock().expect("factory cache poisoned");
        cache.renderers.clear();
        cache.hits = 0;
        cache.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_falls_back_to_centered() {
        let factory = SectionFactory::new();
        let fallback = factory.renderer("not-a-real-variant");
        let centered = factory.renderer("centered");
        assert!(Arc::ptr_eq(&fallback, &centered));
        assert_eq!(factory.resolve_variant("hero-gallery"), HeroVariant::Gallery);
    }

    #[test]
    fn test_cache_counts_hits_and_misses() {
        let factory = SectionFactory::new();
        assert_eq!(factory.stats(), CacheStats::default());

        factory.renderer("video");
        factory.renderer("video");
        factory.renderer("minimal");
        let stats = factory.stats();
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.size, 2);

        factory.clear();
        assert_eq!(factory.stats(), CacheStats::default());
    }

    #[test]
    fn test_editor_and_preview_cached_separately() {
        let factory = SectionFactory::new();
        factory.renderer_for(ArtifactKind::Editor, HeroVariant::Cta);
        factory.renderer_for(ArtifactKind::Preview, HeroVariant::Cta);
        assert_eq!(factory.stats().size, 2);
    }
}
