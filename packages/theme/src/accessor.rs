use std::fmt;

/// Reads one CSS variable out of a `T`.
///
/// `name` is a logical name namespaced by the extractor prefix
/// (`card-bg` → `--sc-card-bg`) unless `is_variable` is set, in which case
/// it already is a custom property name and is written as is.
pub struct VariableAccessor<T> {
    pub name: &'static str,
    pub is_variable: bool,
    getter: fn(&T) -> Option<String>,
}

impl<T> VariableAccessor<T> {
    pub fn new(name: &'static str, is_variable: bool, getter: fn(&T) -> Option<String>) -> Self {
        Self {
            name,
            is_variable,
            getter,
        }
    }

    /// Full custom property name under `prefix`
    pub fn variable_name(&self, prefix: &str) -> String {
        if self.is_variable {
            if self.name.starts_with("--") {
                self.name.to_string()
            } else {
                format!("--{}", self.name)
            }
        } else {
            format!("--{}-{}", prefix, self.name)
        }
    }

    pub fn read(&self, source: &T) -> Option<String> {
        (self.getter)(source)
    }
}

impl<T> fmt::Debug for VariableAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableAccessor")
            .field("name", &self.name)
            .field("is_variable", &self.is_variable)
            .finish()
    }
}

/// Registration table a variable-bearing type fills once
pub struct AccessorRegistry<T> {
    accessors: Vec<VariableAccessor<T>>,
}

impl<T> AccessorRegistry<T> {
    pub fn new() -> Self {
        Self {
            accessors: Vec::new(),
        }
    }

    /// Register a field under a logical, namespaced name
    pub fn field(&mut self, name: &'static str, getter: fn(&T) -> Option<String>) -> &mut Self {
        self.accessors
            .push(VariableAccessor::new(name, false, getter));
        self
    }

    /// Register a field under a full custom property name
    pub fn variable(&mut self, name: &'static str, getter: fn(&T) -> Option<String>) -> &mut Self {
        self.accessors.push(VariableAccessor::new(name, true, getter));
        self
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    pub fn into_accessors(self) -> Vec<VariableAccessor<T>> {
        self.accessors
    }
}

impl<T> Default for AccessorRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
