pub mod build;
pub mod init;
pub mod variables;

pub use build::{build, BuildArgs};
pub use init::{init, InitArgs};
pub use variables::{variables, VariablesArgs};

use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use stylecraft_common::filesystem::{FileSystem, RealFileSystem};
use stylecraft_theme::Theme;

/// Config plus every theme layer it names
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub themes: Vec<Theme>,
}

impl Project {
    /// Load a project from `config` (relative to `cwd`) or the default config
    /// name; theme paths resolve against the config file's directory.
    pub fn load(cwd: &Path, config: Option<&Path>) -> Result<Self> {
        let config_path = cwd.join(config.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_NAME)));
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());

        let fs = RealFileSystem;

        // Defaults only stand in for the implicit config file
        if config.is_some() && !fs.exists(&config_path) {
            bail!("Config file not found: {}", config_path.display());
        }

        let config = Config::load(&fs, &config_path)?;

        // Base theme first, then each layer in order
        let themes = config.load_themes(&fs, &root)?;

        Ok(Self {
            root,
            config,
            themes,
        })
    }
}
