//! Option resolution: raw flags or prompt answers to a [`ProjectConfig`]
//!
//! Three modes exist. Ignite bypasses package resolution entirely;
//! non-interactive reads flags; interactive folds prompt answers into the
//! same flag shape via [`Answers::into_raw`] so both paths run through the
//! identical field-setting code.

use crate::catalog::{
    NavigationKind, PackageManager, PackageName, PACKAGE_MANAGER_PRECEDENCE,
};
use crate::config::{ImportAlias, ProjectConfig};
use crate::error::Result;
use crate::{select, validate, DEFAULT_APP_NAME};

/// Raw, unresolved input as collected from the command line.
///
/// Package flags are canonicalized to [`PackageName`] before landing here;
/// spelling variants never survive past argument conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawOptions {
    /// Positional project name, if given
    pub project_name: Option<String>,

    /// `--default` / `-d`
    pub use_default: bool,

    /// `--nonInteractive`
    pub non_interactive: bool,

    /// `--blank`
    pub blank: bool,

    /// `--ignite`
    pub ignite: bool,

    pub overwrite: bool,
    pub no_install: bool,
    pub no_git: bool,
    pub tabs: bool,
    pub drawer: bool,

    /// `None` = flag absent, `Some(None)` = bare `--importAlias`,
    /// `Some(Some(s))` = `--importAlias <s>`
    pub import_alias: Option<Option<String>>,

    /// Requested packages, canonicalized and deduplicated
    pub packages: Vec<PackageName>,

    /// Package-manager flags that were set; precedence picks the winner
    pub package_managers: Vec<PackageManager>,
}

impl RawOptions {
    /// Record a package flag, ignoring repeated spellings of the same package
    pub fn push_package(&mut self, name: PackageName) {
        if !self.packages.contains(&name) {
            self.packages.push(name);
        }
    }

    /// Whether the given package was requested
    pub fn has_package(&self, name: PackageName) -> bool {
        self.packages.contains(&name)
    }

    /// Whether any navigation package was requested
    pub fn has_navigation(&self) -> bool {
        self.has_package(PackageName::ReactNavigation) || self.has_package(PackageName::ExpoRouter)
    }
}

/// How the run's answers are supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Opinionated stack; package resolution is delegated externally
    Ignite,
    /// Answers come exclusively from flags and defaults
    NonInteractive,
    /// Answers come from the prompt flow
    Interactive,
}

/// Decide the resolution mode. Any package flag, `--default`,
/// `--nonInteractive`, or `--blank` suppresses the prompt flow.
pub fn detect_mode(raw: &RawOptions) -> Mode {
    if raw.ignite {
        Mode::Ignite
    } else if raw.use_default || raw.non_interactive || raw.blank || !raw.packages.is_empty() {
        Mode::NonInteractive
    } else {
        Mode::Interactive
    }
}

/// Answers collected by the interactive prompt flow.
///
/// These carry the same information as the flag surface; resolution converts
/// them back into a [`RawOptions`] so interactive and flag-driven runs are
/// observably equivalent for the same logical choices.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    /// Empty or missing resolves to the default project name
    pub project_name: Option<String>,
    pub navigation: Option<(PackageName, NavigationKind)>,
    pub styling: Option<PackageName>,
    pub authentication: Vec<PackageName>,
    pub analytics: bool,
    pub no_git: bool,
    pub no_install: bool,
    pub package_manager: Option<PackageManager>,
    /// Custom import alias; `None` keeps the tool default
    pub import_alias: Option<String>,
}

impl Answers {
    /// Fold answers into the flag shape, on top of any flags already given
    pub fn into_raw(self, base: RawOptions) -> RawOptions {
        let mut raw = base;

        if let Some(name) = self.project_name.filter(|n| !n.is_empty()) {
            raw.project_name = Some(name);
        }

        if let Some((package, kind)) = self.navigation {
            raw.push_package(package);
            match kind {
                NavigationKind::Tabs => raw.tabs = true,
                NavigationKind::Drawer => raw.drawer = true,
                NavigationKind::Stack => {}
            }
        }

        if let Some(styling) = self.styling {
            raw.push_package(styling);
        }

        for package in self.authentication {
            raw.push_package(package);
        }

        if self.analytics {
            raw.push_package(PackageName::VexoAnalytics);
        }

        raw.no_git = raw.no_git || self.no_git;
        raw.no_install = raw.no_install || self.no_install;

        if let Some(pm) = self.package_manager {
            if !raw.package_managers.contains(&pm) {
                raw.package_managers.push(pm);
            }
        }

        if let Some(alias) = self.import_alias {
            raw.import_alias = Some(Some(alias));
        }

        raw
    }
}

/// Winner among the requested package-manager flags, consulted once against
/// the fixed priority order
fn resolve_package_manager(raw: &RawOptions) -> PackageManager {
    PACKAGE_MANAGER_PRECEDENCE
        .iter()
        .copied()
        .find(|pm| raw.package_managers.contains(pm))
        .unwrap_or_default()
}

/// Produce the resolved configuration from raw input.
///
/// Validates first, then sets fields with explicit-flag-over-default
/// precedence. Ignite mode returns a minimal configuration (name and flag
/// echoes only) and skips package selection.
pub fn resolve(raw: &RawOptions) -> Result<ProjectConfig> {
    validate::check_flags(raw)?;

    let mut config = ProjectConfig::default_config();

    if let Some(name) = raw.project_name.as_deref().filter(|n| !n.is_empty()) {
        config.project_name = name.to_string();
    }

    config.flags.no_install = raw.no_install;
    config.flags.no_git = raw.no_git;
    config.flags.overwrite = raw.overwrite;
    config.flags.import_alias = match &raw.import_alias {
        Some(Some(alias)) => ImportAlias::Custom(alias.clone()),
        _ => ImportAlias::Default,
    };
    config.flags.package_manager = Some(resolve_package_manager(raw));

    if detect_mode(raw) == Mode::Ignite {
        // Ignite requires PascalCase project names
        config.project_name = pascal_case(&config.project_name);
        return Ok(config);
    }

    select::apply(&mut config, raw);

    Ok(config)
}

/// PascalCase conversion for Ignite project names
fn pascal_case(input: &str) -> String {
    input
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PackageKind;

    #[test]
    fn test_default_mode_is_interactive() {
        assert_eq!(detect_mode(&RawOptions::default()), Mode::Interactive);
    }

    #[test]
    fn test_package_flag_triggers_non_interactive() {
        let mut raw = RawOptions::default();
        raw.push_package(PackageName::Nativewind);
        assert_eq!(detect_mode(&raw), Mode::NonInteractive);
    }

    #[test]
    fn test_blank_and_default_trigger_non_interactive() {
        for raw in [
            RawOptions {
                blank: true,
                ..RawOptions::default()
            },
            RawOptions {
                use_default: true,
                ..RawOptions::default()
            },
            RawOptions {
                non_interactive: true,
                ..RawOptions::default()
            },
        ] {
            assert_eq!(detect_mode(&raw), Mode::NonInteractive);
        }
    }

    #[test]
    fn test_ignite_takes_priority() {
        let mut raw = RawOptions {
            ignite: true,
            use_default: true,
            ..RawOptions::default()
        };
        raw.push_package(PackageName::Supabase);
        assert_eq!(detect_mode(&raw), Mode::Ignite);
    }

    #[test]
    fn test_missing_name_resolves_to_default() {
        let raw = RawOptions {
            use_default: true,
            ..RawOptions::default()
        };
        let config = resolve(&raw).unwrap();
        assert_eq!(config.project_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn test_empty_interactive_name_resolves_to_default() {
        let answers = Answers {
            project_name: Some(String::new()),
            ..Answers::default()
        };
        let raw = answers.into_raw(RawOptions::default());
        let config = resolve(&raw).unwrap();
        assert_eq!(config.project_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn test_package_manager_precedence_bun_beats_npm() {
        let raw = RawOptions {
            use_default: true,
            package_managers: vec![PackageManager::Npm, PackageManager::Bun],
            ..RawOptions::default()
        };
        let config = resolve(&raw).unwrap();
        assert_eq!(config.flags.package_manager, Some(PackageManager::Bun));
    }

    #[test]
    fn test_package_manager_defaults_to_npm() {
        let raw = RawOptions {
            use_default: true,
            ..RawOptions::default()
        };
        let config = resolve(&raw).unwrap();
        assert_eq!(config.flags.package_manager, Some(PackageManager::Npm));
    }

    #[test]
    fn test_bare_import_alias_resolves_to_default() {
        let raw = RawOptions {
            use_default: true,
            import_alias: Some(None),
            ..RawOptions::default()
        };
        let config = resolve(&raw).unwrap();
        assert_eq!(config.flags.import_alias, ImportAlias::Default);
    }

    #[test]
    fn test_custom_import_alias_is_kept() {
        let raw = RawOptions {
            use_default: true,
            import_alias: Some(Some("~/*".to_string())),
            ..RawOptions::default()
        };
        let config = resolve(&raw).unwrap();
        assert_eq!(
            config.flags.import_alias,
            ImportAlias::Custom("~/*".to_string())
        );
    }

    #[test]
    fn test_invalid_alias_fails_before_any_mutation() {
        let raw = RawOptions {
            use_default: true,
            import_alias: Some(Some("@".to_string())),
            ..RawOptions::default()
        };
        assert!(resolve(&raw).is_err());
    }

    #[test]
    fn test_ignite_returns_minimal_config() {
        let raw = RawOptions {
            ignite: true,
            project_name: Some("my cool app".to_string()),
            no_git: true,
            ..RawOptions::default()
        };
        let config = resolve(&raw).unwrap();
        assert_eq!(config.project_name, "MyCoolApp");
        assert!(config.packages.is_empty());
        assert!(config.flags.no_git);
    }

    #[test]
    fn test_answers_match_equivalent_flags() {
        // The same logical choices through either path must resolve
        // identically.
        let answers = Answers {
            project_name: Some("my-app".to_string()),
            navigation: Some((PackageName::ExpoRouter, NavigationKind::Tabs)),
            styling: Some(PackageName::Nativewind),
            authentication: vec![PackageName::Supabase],
            no_git: true,
            package_manager: Some(PackageManager::Pnpm),
            ..Answers::default()
        };
        let from_answers = resolve(&answers.into_raw(RawOptions::default())).unwrap();

        let mut flags = RawOptions {
            project_name: Some("my-app".to_string()),
            tabs: true,
            no_git: true,
            package_managers: vec![PackageManager::Pnpm],
            ..RawOptions::default()
        };
        flags.push_package(PackageName::ExpoRouter);
        flags.push_package(PackageName::Nativewind);
        flags.push_package(PackageName::Supabase);
        let from_flags = resolve(&flags).unwrap();

        assert_eq!(from_answers, from_flags);
        assert_eq!(
            from_answers
                .active(PackageKind::Navigation)
                .and_then(|p| p.navigation),
            Some(NavigationKind::Tabs)
        );
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("my-expo-app"), "MyExpoApp");
        assert_eq!(pascal_case("already"), "Already");
        assert_eq!(pascal_case("two words"), "TwoWords");
    }
}
