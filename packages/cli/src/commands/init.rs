use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;
use stylecraft_theme::{
    CardVariables, ComponentVariables, PaletteVariables, Theme, ThemeVariables,
};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Variable namespace prefix
    #[arg(short, long, default_value = "sc")]
    pub prefix: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Stylecraft project...".bright_blue().bold());

    let config = Config {
        prefix: args.prefix,
        ..Default::default()
    };

    // Never clobber a theme the user already has
    let theme_path = cwd.join(&config.theme);
    if !theme_path.exists() {
        fs::write(&theme_path, serde_json::to_string_pretty(&starter_theme())?)?;
        println!("  {} Created {}", "✓".green(), config.theme);
    }

    // Write config file
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("Next steps:");
    println!("  1. Edit {}", config.theme);
    println!("  2. Run: stylecraft build");
    println!("  3. Check output in {}", config.out_file);

    Ok(())
}

fn starter_theme() -> Theme {
    Theme {
        name: "starter".to_string(),
        variables: ThemeVariables {
            palette: PaletteVariables {
                primary: Some("#0d6efd".to_string()),
                secondary: Some("#6c757d".to_string()),
                background: Some("#ffffff".to_string()),
                foreground: Some("#212529".to_string()),
                ..Default::default()
            },
            components: ComponentVariables {
                card: CardVariables {
                    radius: Some("0.5rem".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_project() {
        let dir = TempDir::new().unwrap();
        let args = InitArgs {
            prefix: "acme".to_string(),
            force: false,
        };
        init(args, dir.path()).unwrap();

        let config: Config = serde_json::from_str(
            &fs::read_to_string(dir.path().join(DEFAULT_CONFIG_NAME)).unwrap(),
        )
        .unwrap();
        assert_eq!(config.prefix, "acme");

        let theme = Theme::load(&dir.path().join("theme.json")).unwrap();
        assert_eq!(theme, starter_theme());
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{}").unwrap();

        let args = InitArgs {
            prefix: "acme".to_string(),
            force: false,
        };
        init(args, dir.path()).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join(DEFAULT_CONFIG_NAME)).unwrap(),
            "{}"
        );
        assert!(!dir.path().join("theme.json").exists());
    }
}
