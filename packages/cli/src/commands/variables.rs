use super::Project;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use stylecraft_theme::{ThemeStack, VariableMap};

#[derive(Debug, Args)]
pub struct VariablesArgs {
    /// Config file (defaults to stylecraft.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn variables(args: VariablesArgs, cwd: &Path) -> Result<()> {
    let map = merged_variables(cwd, args.config.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}

fn merged_variables(cwd: &Path, config: Option<&Path>) -> Result<VariableMap> {
    let project = Project::load(cwd, config)?;
    let stack: ThemeStack = project.themes.iter().collect();
    Ok(stack.variables())
}
