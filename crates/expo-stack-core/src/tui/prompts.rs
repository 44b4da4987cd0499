//! Charm-style CLI prompts using cliclack
//!
//! Collects an [`Answers`] value carrying the same information as the flag
//! surface; the resolver folds it through the identical field-setting path,
//! so prompting and flags stay observably equivalent.

use crate::catalog::{NavigationKind, PackageManager, PackageName};
use crate::config::ImportAlias;
use crate::error::{Error, Result};
use crate::resolve::Answers;
use crate::DEFAULT_APP_NAME;
use std::path::Path;

/// Map prompt I/O failures; an interrupted prompt is a user cancellation,
/// not an error.
fn prompt_err(e: std::io::Error) -> Error {
    if e.kind() == std::io::ErrorKind::Interrupted {
        Error::UserCancelled
    } else {
        Error::Io(e)
    }
}

/// Run the full prompt flow and collect the user's answers
pub fn collect() -> Result<Answers> {
    cliclack::intro(
        console::style(" create-expo-stack ")
            .on_cyan()
            .black()
            .to_string(),
    )
    .map_err(prompt_err)?;

    let project_name: String = cliclack::input("What do you want to name your project?")
        .placeholder(DEFAULT_APP_NAME)
        .default_input(DEFAULT_APP_NAME)
        .interact()
        .map_err(prompt_err)?;

    let navigation_package: Option<PackageName> =
        cliclack::select("Which navigation library would you like to use?")
            .item(None, "None", "no navigation")
            .item(
                Some(PackageName::ExpoRouter),
                "Expo Router",
                "file-based routing",
            )
            .item(
                Some(PackageName::ReactNavigation),
                "React Navigation",
                "component-based routing",
            )
            .interact()
            .map_err(prompt_err)?;

    let navigation = match navigation_package {
        None => None,
        Some(package) => {
            let kind: NavigationKind = cliclack::select("What layout would you like to use?")
                .item(NavigationKind::Stack, "Stack", "")
                .item(NavigationKind::Tabs, "Tabs", "")
                .item(NavigationKind::Drawer, "Drawer", "")
                .interact()
                .map_err(prompt_err)?;
            Some((package, kind))
        }
    };

    let styling: PackageName = cliclack::select("What would you like to use for styling?")
        .item(
            PackageName::Stylesheet,
            "StyleSheet",
            "plain React Native styles",
        )
        .item(PackageName::Nativewind, "NativeWind", "Tailwind for React Native")
        .item(PackageName::Tamagui, "Tamagui", "universal UI kit")
        .interact()
        .map_err(prompt_err)?;

    let authentication: Vec<PackageName> =
        cliclack::multiselect("Which authentication providers would you like? (optional)")
            .item(PackageName::Supabase, "Supabase", "")
            .item(PackageName::Firebase, "Firebase", "")
            .required(false)
            .interact()
            .map_err(prompt_err)?;

    let analytics: bool = cliclack::confirm("Add vexo-analytics?")
        .initial_value(false)
        .interact()
        .map_err(prompt_err)?;

    let package_manager: PackageManager =
        cliclack::select("Which package manager would you like to use?")
            .item(PackageManager::Npm, "npm", "")
            .item(PackageManager::Yarn, "yarn", "")
            .item(PackageManager::Pnpm, "pnpm", "")
            .item(PackageManager::Bun, "bun", "")
            .interact()
            .map_err(prompt_err)?;

    let alias: String = cliclack::input("What import alias would you like?")
        .placeholder(ImportAlias::DEFAULT_VALUE)
        .default_input(ImportAlias::DEFAULT_VALUE)
        .validate(|input: &String| {
            if input.is_empty() || input.ends_with("/*") {
                Ok(())
            } else {
                Err("import alias must end in `/*`, for example `@/*` or `~/*`")
            }
        })
        .interact()
        .map_err(prompt_err)?;
    let import_alias = if alias.is_empty() || alias == ImportAlias::DEFAULT_VALUE {
        None
    } else {
        Some(alias)
    };

    let git: bool = cliclack::confirm("Initialize a git repository?")
        .initial_value(true)
        .interact()
        .map_err(prompt_err)?;

    let install: bool = cliclack::confirm("Install dependencies?")
        .initial_value(true)
        .interact()
        .map_err(prompt_err)?;

    Ok(Answers {
        project_name: Some(project_name),
        navigation,
        styling: Some(styling),
        authentication,
        analytics,
        no_git: !git,
        no_install: !install,
        package_manager: Some(package_manager),
        import_alias,
    })
}

/// Outcome of the directory-collision prompt loop
#[derive(Debug, Clone)]
pub struct NameDecision {
    pub name: String,
    /// The user chose to overwrite; the caller removes the existing tree
    pub remove_existing: bool,
}

/// Re-prompt until the project name is free, the user opts to overwrite, or
/// they cancel.
pub fn confirm_project_name(initial: String, parent: &Path) -> Result<NameDecision> {
    let mut name = initial;

    loop {
        if !parent.join(&name).exists() {
            return Ok(NameDecision {
                name,
                remove_existing: false,
            });
        }

        cliclack::log::warning(format!("A directory named `{}` already exists.", name))
            .map_err(prompt_err)?;

        let action: &str = cliclack::select("What would you like to do?")
            .item("rename", "Choose a different name", "")
            .item("overwrite", "Overwrite the existing directory", "")
            .item("cancel", "Cancel", "")
            .interact()
            .map_err(prompt_err)?;

        match action {
            "rename" => {
                name = cliclack::input("What do you want to name your project?")
                    .placeholder(DEFAULT_APP_NAME)
                    .default_input(DEFAULT_APP_NAME)
                    .interact()
                    .map_err(prompt_err)?;
            }
            "overwrite" => {
                return Ok(NameDecision {
                    name,
                    remove_existing: true,
                })
            }
            _ => return Err(Error::UserCancelled),
        }
    }
}
