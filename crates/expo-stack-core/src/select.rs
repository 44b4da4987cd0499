//! Package selection: requested flags to concrete [`PackageSelection`] entries

use crate::catalog::{NavigationKind, PackageKind, PackageName};
use crate::config::{PackageSelection, ProjectConfig};
use crate::resolve::RawOptions;

/// Layout for navigation packages; tabs takes precedence over drawer if both
/// flags are somehow set.
fn navigation_kind(raw: &RawOptions) -> NavigationKind {
    if raw.tabs {
        NavigationKind::Tabs
    } else if raw.drawer {
        NavigationKind::Drawer
    } else {
        NavigationKind::Stack
    }
}

/// Append selections for every requested package.
///
/// Navigation and authentication are additive; styling is exclusive and a
/// `stylesheet` fallback guarantees a styling selection always exists.
/// Deterministic: equal flags yield equal selection multisets.
pub fn apply(config: &mut ProjectConfig, raw: &RawOptions) {
    let kind = navigation_kind(raw);
    if raw.has_package(PackageName::ReactNavigation) {
        config
            .packages
            .push(PackageSelection::navigation(PackageName::ReactNavigation, kind));
    }
    if raw.has_package(PackageName::ExpoRouter) {
        config
            .packages
            .push(PackageSelection::navigation(PackageName::ExpoRouter, kind));
    }

    // Styling priority: nativewind > tamagui > stylesheet
    if raw.has_package(PackageName::Nativewind) {
        config.push_styling(PackageName::Nativewind);
    } else if raw.has_package(PackageName::Tamagui) {
        config.push_styling(PackageName::Tamagui);
    } else if raw.has_package(PackageName::Stylesheet) {
        config.push_styling(PackageName::Stylesheet);
    } else if config.active(PackageKind::Styling).is_none() {
        config.push_styling(PackageName::Stylesheet);
    }

    if raw.has_package(PackageName::Supabase) {
        config
            .packages
            .push(PackageSelection::new(PackageName::Supabase));
    }
    if raw.has_package(PackageName::Firebase) {
        config
            .packages
            .push(PackageSelection::new(PackageName::Firebase));
    }

    if raw.has_package(PackageName::VexoAnalytics) {
        config
            .packages
            .push(PackageSelection::new(PackageName::VexoAnalytics));
    }
}
