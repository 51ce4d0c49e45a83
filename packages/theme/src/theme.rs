//! Concrete theme: variables plus component options, loadable from JSON.

use crate::cache::AccessorCache;
use crate::extractor::{
    render_variable_css, VariableExtractor, VariableMap, VariableSource, DEFAULT_PREFIX,
};
use crate::variables::ThemeVariables;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stylecraft_common::error::CommonError;
use stylecraft_common::filesystem::{FileSystem, RealFileSystem};
use stylecraft_common::result::CommonResult;
use stylecraft_compiler_css::{
    generate_theme_css, ButtonOptions, CardOptions, ComponentCssRule, CssRuleSource,
    DatePickerOptions, InputOptions, NavBarOptions, ThemeLike,
};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub name: String,
    /// Custom property namespace; blank falls back to `sc`
    pub prefix: String,
    pub variables: ThemeVariables,
    pub button: Option<ButtonOptions>,
    pub card: Option<CardOptions>,
    pub input: Option<InputOptions>,
    pub nav_bar: Option<NavBarOptions>,
    pub date_picker: Option<DatePickerOptions>,
    /// Extra rules appended after the component options
    pub custom: Vec<ComponentCssRule>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            variables: ThemeVariables::default(),
            button: None,
            card: None,
            input: None,
            nav_bar: None,
            date_picker: None,
            custom: Vec::new(),
        }
    }
}

impl ThemeLike for Theme {
    fn style_sources(&self) -> Vec<Option<&dyn CssRuleSource>> {
        vec![
            self.button.as_ref().map(|s| s as &dyn CssRuleSource),
            self.card.as_ref().map(|s| s as &dyn CssRuleSource),
            self.input.as_ref().map(|s| s as &dyn CssRuleSource),
            self.nav_bar.as_ref().map(|s| s as &dyn CssRuleSource),
            self.date_picker.as_ref().map(|s| s as &dyn CssRuleSource),
            Some(&self.custom as &dyn CssRuleSource),
        ]
    }
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> CommonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a theme file from disk
    pub fn load(path: &Path) -> CommonResult<Self> {
        Self::load_with(&RealFileSystem, path)
    }

    pub fn load_with(fs: &dyn FileSystem, path: &Path) -> CommonResult<Self> {
        let content = fs.read_to_string(path)?;

        // Parse errors carry the file path
        let theme: Theme =
            serde_json::from_str(&content).map_err(|source| CommonError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(name = %theme.name, path = %path.display(), "Loaded theme");
        Ok(theme)
    }

    pub fn effective_prefix(&self) -> &str {
        let prefix = self.prefix.trim();
        if prefix.is_empty() {
            DEFAULT_PREFIX
        } else {
            prefix
        }
    }

    fn extractor(&self) -> VariableExtractor<'_> {
        VariableExtractor::with_cache(self.effective_prefix(), AccessorCache::global())
    }

    pub fn variables(&self) -> VariableMap {
        self.extractor().extract(&[&self.variables])
    }

    pub fn root_css(&self) -> String {
        render_variable_css(&self.variables())
    }

    pub fn component_css(&self) -> String {
        generate_theme_css(self)
    }

    /// Root variables followed by component CSS
    #[instrument(skip(self), fields(theme = %self.name))]
    pub fn to_css(&self) -> String {
        join_blocks([self.root_css(), self.component_css()])
    }
}

/// Themes applied in order; later layers override earlier variables and
/// append their component CSS.
#[derive(Debug, Default, Clone)]
pub struct ThemeStack<'a> {
    layers: Vec<&'a Theme>,
}

impl<'a> ThemeStack<'a> {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn push(&mut self, theme: &'a Theme) -> &mut Self {
        self.layers.push(theme);
        self
    }

    pub fn layers(&self) -> &[&'a Theme] {
        &self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Prefix of the base layer
    pub fn prefix(&self) -> &str {
        self.layers
            .first()
            .map(|theme| theme.effective_prefix())
            .unwrap_or(DEFAULT_PREFIX)
    }

    pub fn variables(&self) -> VariableMap {
        let sources: Vec<&dyn VariableSource> = self
            .layers
            .iter()
            .map(|theme| &theme.variables as &dyn VariableSource)
            .collect();

        VariableExtractor::with_cache(self.prefix(), AccessorCache::global()).extract(&sources)
    }

    pub fn root_css(&self) -> String {
        if self.layers.is_empty() {
            return String::new();
        }
        render_variable_css(&self.variables())
    }

    pub fn to_css(&self) -> String {
        // One merged :root, then each layer's components in order
        let mut blocks = vec![self.root_css()];
        blocks.extend(self.layers.iter().map(|theme| theme.component_css()));
        join_blocks(blocks)
    }
}

impl<'a> FromIterator<&'a Theme> for ThemeStack<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Theme>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

fn join_blocks(blocks: impl IntoIterator<Item = String>) -> String {
    blocks
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
