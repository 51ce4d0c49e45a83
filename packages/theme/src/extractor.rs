//! Walks variable-bearing objects into a flat custom-property map.

use crate::accessor::AccessorRegistry;
use crate::cache::AccessorCache;
use indexmap::IndexMap;
use std::any::Any;
use stylecraft_compiler_css::{CssBlock, CssDocument};
use tracing::{debug, instrument};

/// Namespace used when none is configured
pub const DEFAULT_PREFIX: &str = "sc";

/// Variable name → value, in first-insertion order
pub type VariableMap = IndexMap<String, String>;

/// A type whose fields carry CSS variables.
///
/// `register` lists the variable-bearing fields and runs once per type;
/// `nested` returns child objects walked after this one's own fields.
pub trait CssVariables: Any {
    fn register(registry: &mut AccessorRegistry<Self>)
    where
        Self: Sized;

    fn nested(&self) -> Vec<&dyn VariableSource> {
        Vec::new()
    }
}

/// Object-safe view of [`CssVariables`] used while walking a source graph
pub trait VariableSource {
    fn collect_variables(&self, scope: &mut ExtractScope<'_>);
}

impl<T: CssVariables> VariableSource for T {
    fn collect_variables(&self, scope: &mut ExtractScope<'_>) {
        let accessors = scope.cache.accessors::<T>();

        for accessor in accessors.iter() {
            if let Some(value) = accessor.read(self) {
                scope
                    .variables
                    .insert(accessor.variable_name(scope.prefix), value);
            }
        }

        for child in self.nested() {
            child.collect_variables(scope);
        }
    }
}

/// State threaded through one extraction
pub struct ExtractScope<'a> {
    prefix: &'a str,
    cache: &'a AccessorCache,
    variables: &'a mut VariableMap,
}

/// Extracts and renders CSS variables under one namespace prefix
#[derive(Clone, Copy)]
pub struct VariableExtractor<'c> {
    prefix: &'c str,
    cache: &'c AccessorCache,
}

impl VariableExtractor<'static> {
    /// Extractor backed by the process-wide accessor cache
    pub fn new(prefix: &'static str) -> Self {
        Self::with_cache(prefix, AccessorCache::global())
    }
}

impl<'c> VariableExtractor<'c> {
    /// # Panics
    ///
    /// Panics if `prefix` is blank; unprefixed names would collide with
    /// every other stylesheet on the page.
    pub fn with_cache(prefix: &'c str, cache: &'c AccessorCache) -> Self {
        assert!(
            !prefix.trim().is_empty(),
            "CSS variable prefix must not be empty"
        );
        Self { prefix, cache }
    }

    pub fn prefix(&self) -> &str {
        self.prefix
    }

    /// Merge the variables of every source; later sources win on collisions
    #[instrument(skip_all, fields(prefix = %self.prefix, sources = sources.len()))]
    pub fn extract(&self, sources: &[&dyn VariableSource]) -> VariableMap {
        let mut variables = VariableMap::new();
        let mut scope = ExtractScope {
            prefix: self.prefix,
            cache: self.cache,
            variables: &mut variables,
        };

        // Later sources overwrite in place, keeping first-seen positions
        for source in sources {
            source.collect_variables(&mut scope);
        }

        debug!(count = variables.len(), "Extracted CSS variables");
        variables
    }

    /// `:root` block plus one block per inferred component
    #[instrument(skip_all, fields(prefix = %self.prefix))]
    pub fn render_root_css(&self, sources: &[&dyn VariableSource]) -> String {
        render_variable_css(&self.extract(sources))
    }
}

/// Extract with the default prefix and the global cache
pub fn extract_variables(sources: &[&dyn VariableSource]) -> VariableMap {
    VariableExtractor::new(DEFAULT_PREFIX).extract(sources)
}

/// Render root CSS with the default prefix and the global cache
pub fn render_root_css(sources: &[&dyn VariableSource]) -> String {
    VariableExtractor::new(DEFAULT_PREFIX).render_root_css(sources)
}

/// Render a variable map as `:root { … }` followed by `.{component} { … }`
/// blocks, one per component inferred from the variable names.
pub fn render_variable_css(variables: &VariableMap) -> String {
    let mut document = CssDocument::new();

    document.push_block(CssBlock {
        selector: ":root".to_string(),
        declarations: variables
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect(),
    });

    // One block per component, re-declaring its variables
    let mut components: IndexMap<&str, Vec<String>> = IndexMap::new();
    for (name, value) in variables {
        if let Some(component) = component_of(name) {
            components
                .entry(component)
                .or_default()
                .push(format!("{}: {}", name, value));
        }
    }

    for (component, declarations) in components {
        document.push_block(CssBlock {
            selector: format!(".{}", component),
            declarations,
        });
    }

    document.to_css()
}

/// Component segment of `--{prefix}-{component}-{property…}`.
///
/// Names with fewer than three segments have no component.
pub fn component_of(name: &str) -> Option<&str> {
    let mut segments = name.trim_start_matches('-').split('-');
    segments.next()?;
    let component = segments.next()?;
    segments.next()?;
    (!component.is_empty()).then_some(component)
}
