use super::Project;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use stylecraft_theme::ThemeStack;
use tracing::info;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Config file (defaults to stylecraft.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (overrides config)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn build(args: BuildArgs, cwd: &Path) -> Result<()> {
    let project = Project::load(cwd, args.config.as_deref())?;
    let stack: ThemeStack = project.themes.iter().collect();
    let css = stack.to_css();

    // Print only, nothing touches disk
    if args.stdout {
        println!("{}", css);
        return Ok(());
    }

    // --out is relative to where the command runs, outFile to the config
    let out_path = match args.out {
        Some(out) => cwd.join(out),
        None => project.config.out_path(&project.root),
    };

    // Create output directory
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, &css)?;

    info!(path = %out_path.display(), bytes = css.len(), "Wrote stylesheet");
    println!(
        "{} Built {} theme layer(s) → {}",
        "✓".green(),
        project.themes.len(),
        out_path.display()
    );

    Ok(())
}
