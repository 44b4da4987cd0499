//! Delegation to the Ignite CLI for the opinionated stack
//!
//! Ignite owns its own prompt flow and file generation; we only forward the
//! name and the flag echoes from the minimal configuration.

use crate::config::ProjectConfig;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use tokio::process::Command;

pub async fn run_ignite(config: &ProjectConfig) -> Result<()> {
    let mut command = Command::new("npx");
    command
        .arg("ignite-cli@latest")
        .arg("new")
        .arg(&config.project_name);

    if let Some(pm) = config.flags.package_manager {
        command.arg("--packager").arg(pm.flag());
    }
    if config.flags.no_git {
        command.arg("--git=false");
    }
    if config.flags.no_install {
        command.arg("--install-deps=false");
    }

    println!(
        "{} {}",
        "Handing off to".dimmed(),
        "Ignite".red().bold()
    );

    let status = command
        .status()
        .await
        .context("failed to run the Ignite CLI")?;

    if !status.success() {
        bail!("ignite-cli exited with {}", status);
    }

    Ok(())
}
