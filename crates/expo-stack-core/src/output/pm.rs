//! Package-manager invocation

use crate::catalog::PackageManager;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use tokio::process::Command;

/// Install dependencies in the project directory with the chosen manager
pub async fn install_dependencies(manager: PackageManager, project_dir: &Path) -> Result<()> {
    let (bin, args) = manager.install_args();

    println!();
    println!(
        "{} {} {}",
        "Running:".dimmed(),
        bin.yellow(),
        args.join(" ").yellow()
    );

    let status = Command::new(bin)
        .args(args)
        .current_dir(project_dir)
        .status()
        .await
        .with_context(|| format!("failed to run {}", bin))?;

    if !status.success() {
        bail!("{} install exited with {}", manager, status);
    }

    println!("{}", "Dependencies installed".green());
    Ok(())
}
