use crate::accessor::{AccessorRegistry, VariableAccessor};
use crate::extractor::CssVariables;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

type Entry = Arc<dyn Any + Send + Sync>;

/// Per-type accessor lists, built on first use and shared afterwards.
///
/// Two threads missing on the same type both build the list and the later
/// write wins; the lists are identical, so output never depends on the
/// cache.
#[derive(Default)]
pub struct AccessorCache {
    entries: RwLock<HashMap<TypeId, Entry>>,
    builds: AtomicUsize,
}

impl AccessorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache used by the free extraction functions
    pub fn global() -> &'static AccessorCache {
        static GLOBAL: OnceLock<AccessorCache> = OnceLock::new();
        GLOBAL.get_or_init(AccessorCache::new)
    }

    /// Accessors for `T`, registering them on a miss
    pub fn accessors<T: CssVariables>(&self) -> Arc<Vec<VariableAccessor<T>>> {
        let key = TypeId::of::<T>();

        let cached = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();

        if let Some(entry) = cached {
            if let Ok(accessors) = entry.downcast::<Vec<VariableAccessor<T>>>() {
                return accessors;
            }
        }

        let accessors = Arc::new(build_accessors::<T>());
        self.builds.fetch_add(1, Ordering::Relaxed);
        debug!(
            type_name = std::any::type_name::<T>(),
            count = accessors.len(),
            "Cached CSS variable accessors"
        );

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, accessors.clone());

        accessors
    }

    /// Number of types with cached accessors
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many accessor lists have been built, including rebuilds after races
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

fn build_accessors<T: CssVariables>() -> Vec<VariableAccessor<T>> {
    let mut registry = AccessorRegistry::new();
    T::register(&mut registry);
    registry.into_accessors()
}
