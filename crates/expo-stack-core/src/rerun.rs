//! Rerun-script generation: serialize a finalized configuration back into a
//! command line that reproduces it
//!
//! Best-effort audit trail; its correctness property is round-trip
//! equivalence, exercised by the tests here via [`parse`].

use crate::catalog::{manager_for_flag, package_for_flag, PackageKind};
use crate::config::{ImportAlias, ProjectConfig};
use crate::resolve::RawOptions;

/// Emit the single-line command that recreates this configuration.
///
/// Order: name, packages (navigation adds `--tabs`/`--drawer` only for
/// non-stack layouts), `--noInstall`/`--noGit`, `--importAlias`, package
/// manager.
pub fn generate(config: &ProjectConfig) -> String {
    let mut script = format!("npx create-expo-stack {}", config.project_name);

    for selection in &config.packages {
        script.push_str(" --");
        script.push_str(selection.name.flag());
        if selection.kind == PackageKind::Navigation {
            if let Some(flag) = selection.navigation.and_then(|kind| kind.flag()) {
                script.push_str(" --");
                script.push_str(flag);
            }
        }
    }

    if config.flags.no_install {
        script.push_str(" --noInstall");
    }
    if config.flags.no_git {
        script.push_str(" --noGit");
    }

    match &config.flags.import_alias {
        ImportAlias::Default => script.push_str(" --importAlias"),
        ImportAlias::Custom(alias) => {
            script.push_str(" --importAlias ");
            script.push_str(alias);
        }
    }

    if let Some(pm) = config.flags.package_manager {
        script.push_str(" --");
        script.push_str(pm.flag());
    }

    script
}

/// Parse a rerun script back into raw options.
///
/// Understands exactly the surface [`generate`] emits; used to verify the
/// round-trip property.
pub fn parse(script: &str) -> RawOptions {
    let mut raw = RawOptions::default();
    let mut tokens = script.split_whitespace().peekable();

    while let Some(token) = tokens.next() {
        if let Some(flag) = token.strip_prefix("--") {
            match flag {
                "tabs" => raw.tabs = true,
                "drawer" => raw.drawer = true,
                "noInstall" => raw.no_install = true,
                "noGit" => raw.no_git = true,
                "overwrite" => raw.overwrite = true,
                "importAlias" => {
                    let value = tokens
                        .peek()
                        .filter(|next| !next.starts_with("--"))
                        .map(|next| next.to_string());
                    if value.is_some() {
                        tokens.next();
                    }
                    raw.import_alias = Some(value);
                }
                other => {
                    if let Some(package) = package_for_flag(other) {
                        raw.push_package(package);
                    } else if let Some(pm) = manager_for_flag(other) {
                        if !raw.package_managers.contains(&pm) {
                            raw.package_managers.push(pm);
                        }
                    }
                }
            }
        } else if token != "npx" && token != "create-expo-stack" && raw.project_name.is_none() {
            raw.project_name = Some(token.to_string());
        }
    }

    raw
}
