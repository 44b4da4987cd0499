//! The fixed package catalog and flag-spelling tables
//!
//! Every CLI spelling of a package flag resolves once through
//! [`package_for_flag`] into a canonical [`PackageName`]; the rest of the
//! crate never compares raw flag strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identifiers for every package the CLI knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageName {
    ReactNavigation,
    ExpoRouter,
    Nativewind,
    Tamagui,
    Stylesheet,
    Supabase,
    Firebase,
    VexoAnalytics,
}

impl PackageName {
    /// The canonical flag spelling, as emitted in rerun scripts
    pub fn flag(&self) -> &'static str {
        match self {
            PackageName::ReactNavigation => "react-navigation",
            PackageName::ExpoRouter => "expo-router",
            PackageName::Nativewind => "nativewind",
            PackageName::Tamagui => "tamagui",
            PackageName::Stylesheet => "stylesheet",
            PackageName::Supabase => "supabase",
            PackageName::Firebase => "firebase",
            PackageName::VexoAnalytics => "vexo-analytics",
        }
    }

    /// Which category this package belongs to
    pub fn kind(&self) -> PackageKind {
        match self {
            PackageName::ReactNavigation | PackageName::ExpoRouter => PackageKind::Navigation,
            PackageName::Nativewind | PackageName::Tamagui | PackageName::Stylesheet => {
                PackageKind::Styling
            }
            PackageName::Supabase | PackageName::Firebase => PackageKind::Authentication,
            PackageName::VexoAnalytics => PackageKind::Analytics,
        }
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// Package categories
///
/// Styling is exclusive (last writer wins); the other categories are
/// additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    Navigation,
    Styling,
    Authentication,
    Analytics,
}

/// Screen layout for a navigation package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationKind {
    #[default]
    Stack,
    Tabs,
    Drawer,
}

impl NavigationKind {
    /// The CLI flag for non-default layouts; `Stack` has no flag
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            NavigationKind::Stack => None,
            NavigationKind::Tabs => Some("tabs"),
            NavigationKind::Drawer => Some("drawer"),
        }
    }
}

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Yarn,
    #[default]
    Npm,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// The CLI flag spelling, which doubles as the binary name
    pub fn flag(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Binary plus arguments for installing dependencies
    pub fn install_args(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            PackageManager::Yarn => ("yarn", &[]),
            PackageManager::Npm => ("npm", &["install"]),
            PackageManager::Pnpm => ("pnpm", &["install"]),
            PackageManager::Bun => ("bun", &["install"]),
        }
    }

    /// Prefix for running package.json scripts, used in rendered templates
    pub fn run_command(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm run",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun run",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// Priority order when more than one package-manager flag is set.
/// The first entry present among the requested flags wins silently.
pub const PACKAGE_MANAGER_PRECEDENCE: &[PackageManager] = &[
    PackageManager::Bun,
    PackageManager::Pnpm,
    PackageManager::Npm,
    PackageManager::Yarn,
];

/// Every accepted flag spelling mapped to its canonical package.
/// react-navigation and expo-router each accept three spellings.
const FLAG_ALIASES: &[(&str, PackageName)] = &[
    ("react-navigation", PackageName::ReactNavigation),
    ("reactNavigation", PackageName::ReactNavigation),
    ("reactnavigation", PackageName::ReactNavigation),
    ("expo-router", PackageName::ExpoRouter),
    ("expoRouter", PackageName::ExpoRouter),
    ("exporouter", PackageName::ExpoRouter),
    ("nativewind", PackageName::Nativewind),
    ("tamagui", PackageName::Tamagui),
    ("stylesheet", PackageName::Stylesheet),
    ("supabase", PackageName::Supabase),
    ("firebase", PackageName::Firebase),
    ("vexo-analytics", PackageName::VexoAnalytics),
];

/// Resolve a raw flag spelling to its canonical package
pub fn package_for_flag(flag: &str) -> Option<PackageName> {
    FLAG_ALIASES
        .iter()
        .find(|(spelling, _)| *spelling == flag)
        .map(|(_, name)| *name)
}

/// Resolve a package-manager flag spelling
pub fn manager_for_flag(flag: &str) -> Option<PackageManager> {
    PACKAGE_MANAGER_PRECEDENCE
        .iter()
        .find(|pm| pm.flag() == flag)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_react_navigation_spellings_resolve() {
        for spelling in ["react-navigation", "reactNavigation", "reactnavigation"] {
            assert_eq!(
                package_for_flag(spelling),
                Some(PackageName::ReactNavigation)
            );
        }
    }

    #[test]
    fn test_all_expo_router_spellings_resolve() {
        for spelling in ["expo-router", "expoRouter", "exporouter"] {
            assert_eq!(package_for_flag(spelling), Some(PackageName::ExpoRouter));
        }
    }

    #[test]
    fn test_unknown_flag_resolves_to_none() {
        assert_eq!(package_for_flag("webpack"), None);
    }

    #[test]
    fn test_precedence_order_is_bun_pnpm_npm_yarn() {
        assert_eq!(
            PACKAGE_MANAGER_PRECEDENCE,
            &[
                PackageManager::Bun,
                PackageManager::Pnpm,
                PackageManager::Npm,
                PackageManager::Yarn
            ]
        );
    }

    #[test]
    fn test_manager_for_flag() {
        assert_eq!(manager_for_flag("pnpm"), Some(PackageManager::Pnpm));
        assert_eq!(manager_for_flag("cargo"), None);
    }

    #[test]
    fn test_package_kinds() {
        assert_eq!(PackageName::ExpoRouter.kind(), PackageKind::Navigation);
        assert_eq!(PackageName::Nativewind.kind(), PackageKind::Styling);
        assert_eq!(PackageName::Supabase.kind(), PackageKind::Authentication);
        assert_eq!(PackageName::VexoAnalytics.kind(), PackageKind::Analytics);
    }
}
