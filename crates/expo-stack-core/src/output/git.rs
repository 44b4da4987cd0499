//! Git repository initialization

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use tokio::process::Command;

/// Run `git init` in the project directory
pub async fn init_repository(project_dir: &Path) -> Result<()> {
    let status = Command::new("git")
        .arg("init")
        .arg("--quiet")
        .current_dir(project_dir)
        .status()
        .await
        .context("failed to run git init")?;

    if !status.success() {
        bail!("git init exited with {}", status);
    }

    println!("{}", "Initialized a git repository".green());
    Ok(())
}
