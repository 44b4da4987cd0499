//! The resolved project configuration
//!
//! A [`ProjectConfig`] starts from [`ProjectConfig::default_config`], is
//! mutated through the resolution steps, and is treated as read-only once it
//! reaches the file planner. Every run builds a fresh value; the default is
//! never a shared global.

use crate::catalog::{NavigationKind, PackageKind, PackageManager, PackageName};
use crate::DEFAULT_APP_NAME;
use serde::{Serialize, Serializer};

/// Import alias for the generated tsconfig: either a user-supplied string
/// (must end in `/*`) or the tool default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportAlias {
    /// Use the tool default alias
    Default,
    /// User-supplied alias, validated to end in `/*`
    Custom(String),
}

impl ImportAlias {
    /// Alias used when the user did not supply one
    pub const DEFAULT_VALUE: &'static str = "@/*";

    /// The alias string to substitute into templates
    pub fn value(&self) -> &str {
        match self {
            ImportAlias::Default => Self::DEFAULT_VALUE,
            ImportAlias::Custom(alias) => alias,
        }
    }
}

impl Serialize for ImportAlias {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

/// One selected package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSelection {
    pub name: PackageName,
    #[serde(rename = "type")]
    pub kind: PackageKind,
    /// Layout choice, only meaningful for navigation packages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationKind>,
}

impl PackageSelection {
    /// Selection for a non-navigation package
    pub fn new(name: PackageName) -> Self {
        Self {
            name,
            kind: name.kind(),
            navigation: None,
        }
    }

    /// Selection for a navigation package with its layout
    pub fn navigation(name: PackageName, kind: NavigationKind) -> Self {
        Self {
            name,
            kind: name.kind(),
            navigation: Some(kind),
        }
    }
}

/// Cross-cutting flags carried alongside the package list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFlags {
    pub no_git: bool,
    pub no_install: bool,
    pub overwrite: bool,
    pub import_alias: ImportAlias,
    /// `None` only transiently; resolution fills in npm if never chosen
    pub package_manager: Option<PackageManager>,
}

/// The canonical, resolved description of the project to generate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    pub project_name: String,
    /// Insertion order affects display and rerun-script order only
    pub packages: Vec<PackageSelection>,
    pub flags: ProjectFlags,
}

impl ProjectConfig {
    /// Fresh default configuration; called once per run
    pub fn default_config() -> Self {
        Self {
            project_name: DEFAULT_APP_NAME.to_string(),
            packages: Vec::new(),
            flags: ProjectFlags {
                no_git: false,
                no_install: false,
                overwrite: false,
                import_alias: ImportAlias::Default,
                package_manager: None,
            },
        }
    }

    /// First selection of the given kind, if any
    pub fn active(&self, kind: PackageKind) -> Option<&PackageSelection> {
        self.packages.iter().find(|p| p.kind == kind)
    }

    /// Whether the given package was selected
    pub fn has(&self, name: PackageName) -> bool {
        self.packages.iter().any(|p| p.name == name)
    }

    /// Drop any existing styling selection. Styling is exclusive: adding a
    /// new one must purge the old one first.
    pub fn clear_styling(&mut self) {
        self.packages.retain(|p| p.kind != PackageKind::Styling);
    }

    /// Replace the styling selection with `name`
    pub fn push_styling(&mut self, name: PackageName) {
        self.clear_styling();
        self.packages.push(PackageSelection::new(name));
    }

    /// Package manager to use, npm if never chosen
    pub fn package_manager(&self) -> PackageManager {
        self.flags.package_manager.unwrap_or_default()
    }
}
