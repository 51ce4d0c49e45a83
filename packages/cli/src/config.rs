use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stylecraft_common::filesystem::FileSystem;
use stylecraft_theme::{Theme, DEFAULT_PREFIX};

pub const DEFAULT_CONFIG_NAME: &str = "stylecraft.config.json";

/// Stylecraft project configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace for generated CSS variables
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Base theme file
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Extra theme files layered over the base, later ones win
    #[serde(default)]
    pub layers: Vec<String>,

    /// Stylesheet written by `build`
    #[serde(default = "default_out_file")]
    pub out_file: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_theme() -> String {
    "theme.json".to_string()
}

fn default_out_file() -> String {
    "dist/theme.css".to_string()
}

impl Config {
    /// Load config from `path`, falling back to defaults when it is missing
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        if !fs.exists(path) {
            return Ok(Config::default());
        }

        let content = fs.read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Theme files in layer order, resolved against `root`
    pub fn theme_paths(&self, root: &Path) -> Vec<PathBuf> {
        std::iter::once(&self.theme)
            .chain(&self.layers)
            .map(|file| root.join(file))
            .collect()
    }

    pub fn out_path(&self, root: &Path) -> PathBuf {
        root.join(&self.out_file)
    }

    /// Load every theme layer; the configured prefix replaces the base
    /// layer's own.
    pub fn load_themes(&self, fs: &dyn FileSystem, root: &Path) -> Result<Vec<Theme>> {
        let mut themes = self
            .theme_paths(root)
            .iter()
            .map(|path| Theme::load_with(fs, path).map_err(anyhow::Error::from))
            .collect::<Result<Vec<_>>>()?;

        if let Some(base) = themes.first_mut() {
            base.prefix = self.prefix.clone();
        }

        Ok(themes)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            theme: default_theme(),
            layers: vec![],
            out_file: default_out_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecraft_common::filesystem::MockFileSystem;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "prefix": "acme",
            "theme": "themes/base.json",
            "layers": ["themes/dark.json"],
            "outFile": "public/acme.css"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.prefix, "acme");
        assert_eq!(config.theme, "themes/base.json");
        assert_eq!(config.layers, vec!["themes/dark.json"]);
        assert_eq!(config.out_file, "public/acme.css");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.prefix, "sc");
        assert_eq!(config.theme, "theme.json");
        assert!(config.layers.is_empty());
        assert_eq!(config.out_file, "dist/theme.css");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let fs = MockFileSystem::new();
        let config = Config::load(&fs, Path::new("stylecraft.config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut fs = MockFileSystem::new();
        fs.add_file("stylecraft.config.json", r#"{ "layers": ["dark.json"] }"#);

        let config = Config::load(&fs, Path::new("stylecraft.config.json")).unwrap();
        assert_eq!(config.prefix, "sc");
        assert_eq!(
            config.theme_paths(Path::new("/project")),
            vec![
                PathBuf::from("/project/theme.json"),
                PathBuf::from("/project/dark.json"),
            ]
        );
    }

    #[test]
    fn test_load_themes_applies_prefix_to_base() {
        let mut fs = MockFileSystem::new();
        fs.add_file("/project/theme.json", r#"{ "name": "base", "prefix": "x" }"#);
        fs.add_file("/project/dark.json", r#"{ "name": "dark" }"#);

        let config = Config {
            prefix: "acme".to_string(),
            layers: vec!["dark.json".to_string()],
            ..Default::default()
        };

        let themes = config.load_themes(&fs, Path::new("/project")).unwrap();
        assert_eq!(themes.len(), 2);
        assert_eq!(themes[0].prefix, "acme");
        assert_eq!(themes[1].name, "dark");
    }

    #[test]
    fn test_missing_layer_is_an_error() {
        let mut fs = MockFileSystem::new();
        fs.add_file("/project/theme.json", "{}");

        let config = Config {
            layers: vec!["missing.json".to_string()],
            ..Default::default()
        };

        assert!(config.load_themes(&fs, Path::new("/project")).is_err());
    }
}
