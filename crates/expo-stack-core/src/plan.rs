//! File planning: a finalized configuration to an ordered list of template
//! files plus their substitution context
//!
//! Pure function of its inputs: the same configuration always yields the
//! same plan. No clock, randomness, or directory reads happen here; the
//! renderer owns all I/O.

use crate::catalog::{NavigationKind, PackageKind, PackageManager, PackageName};
use crate::config::ProjectConfig;
use serde::Serialize;

/// One file to render: a template identifier and its destination inside the
/// project directory. Identifiers ending in `.ejs` are substituted; anything
/// else is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub template: String,
    pub dest: String,
}

impl PlannedFile {
    fn new(template: &str, dest: &str) -> Self {
        Self {
            template: template.to_string(),
            dest: dest.to_string(),
        }
    }
}

/// Substitution parameters shared by every file in a plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderContext {
    pub project_name: String,
    pub navigation: Option<PackageName>,
    pub navigation_kind: Option<NavigationKind>,
    pub styling: PackageName,
    pub supabase: bool,
    pub firebase: bool,
    pub analytics: bool,
    pub import_alias: String,
    pub package_manager: PackageManager,
    pub run_command: String,
}

/// The complete render plan for one project
#[derive(Debug, Clone, PartialEq)]
pub struct FilePlan {
    pub files: Vec<PlannedFile>,
    pub context: RenderContext,
}

/// Scaffolding present in every project regardless of selections
const BASE_FILES: &[(&str, &str)] = &[
    ("base/package.json.ejs", "package.json"),
    ("base/app.json.ejs", "app.json"),
    ("base/babel.config.js.ejs", "babel.config.js"),
    ("base/tsconfig.json.ejs", "tsconfig.json"),
    ("base/gitignore", ".gitignore"),
    ("base/assets/adaptive-icon.png", "assets/adaptive-icon.png"),
    ("base/assets/icon.png", "assets/icon.png"),
    ("base/assets/splash.png", "assets/splash.png"),
];

/// Derive the ordered file list and render context from a finalized
/// configuration.
pub fn plan(config: &ProjectConfig) -> FilePlan {
    let navigation = config.active(PackageKind::Navigation);
    let styling = config
        .active(PackageKind::Styling)
        .map(|p| p.name)
        .unwrap_or(PackageName::Stylesheet);
    let supabase = config.has(PackageName::Supabase);
    let firebase = config.has(PackageName::Firebase);

    let mut files: Vec<PlannedFile> = BASE_FILES
        .iter()
        .map(|(template, dest)| PlannedFile::new(template, dest))
        .collect();

    match navigation {
        None => files.push(PlannedFile::new("base/App.tsx.ejs", "App.tsx")),
        Some(selection) => {
            let kind = selection.navigation.unwrap_or_default();
            navigation_files(selection.name, kind, &mut files);
        }
    }

    styling_files(styling, &mut files);

    if supabase {
        files.push(PlannedFile::new(
            "packages/supabase/supabase.ts.ejs",
            "utils/supabase.ts",
        ));
        files.push(PlannedFile::new("packages/supabase/env.ejs", ".env"));
    }
    if firebase {
        files.push(PlannedFile::new(
            "packages/firebase/firebase.ts.ejs",
            "utils/firebase.ts",
        ));
        files.push(PlannedFile::new(
            "packages/firebase/firebase.json.ejs",
            "firebase.json",
        ));
    }

    let package_manager = config.package_manager();
    let context = RenderContext {
        project_name: config.project_name.clone(),
        navigation: navigation.map(|p| p.name),
        navigation_kind: navigation.map(|p| p.navigation.unwrap_or_default()),
        styling,
        supabase,
        firebase,
        analytics: config.has(PackageName::VexoAnalytics),
        import_alias: config.flags.import_alias.value().to_string(),
        package_manager,
        run_command: package_manager.run_command().to_string(),
    };

    FilePlan { files, context }
}

fn navigation_files(name: PackageName, kind: NavigationKind, files: &mut Vec<PlannedFile>) {
    match name {
        PackageName::ExpoRouter => {
            files.push(PlannedFile::new(
                "packages/expo-router/index.ts.ejs",
                "index.ts",
            ));
            match kind {
                NavigationKind::Stack => {
                    files.push(PlannedFile::new(
                        "packages/expo-router/stack/_layout.tsx.ejs",
                        "app/_layout.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/expo-router/stack/index.tsx.ejs",
                        "app/index.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/expo-router/stack/details.tsx.ejs",
                        "app/details.tsx",
                    ));
                }
                NavigationKind::Tabs => {
                    files.push(PlannedFile::new(
                        "packages/expo-router/tabs/_layout.tsx.ejs",
                        "app/_layout.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/expo-router/tabs/tabs-layout.tsx.ejs",
                        "app/(tabs)/_layout.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/expo-router/tabs/index.tsx.ejs",
                        "app/(tabs)/index.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/expo-router/tabs/two.tsx.ejs",
                        "app/(tabs)/two.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/expo-router/tabs/modal.tsx.ejs",
                        "app/modal.tsx",
                    ));
                }
                NavigationKind::Drawer => {
                    files.push(PlannedFile::new(
                        "packages/expo-router/drawer/_layout.tsx.ejs",
                        "app/_layout.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/expo-router/drawer/drawer-layout.tsx.ejs",
                        "app/(drawer)/_layout.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/expo-router/drawer/index.tsx.ejs",
                        "app/(drawer)/index.tsx",
                    ));
                }
            }
        }
        PackageName::ReactNavigation => {
            files.push(PlannedFile::new(
                "packages/react-navigation/App.tsx.ejs",
                "App.tsx",
            ));
            match kind {
                NavigationKind::Stack => {
                    files.push(PlannedFile::new(
                        "packages/react-navigation/stack/index.tsx.ejs",
                        "navigation/index.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/react-navigation/stack/overview.tsx.ejs",
                        "screens/overview.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/react-navigation/stack/details.tsx.ejs",
                        "screens/details.tsx",
                    ));
                }
                NavigationKind::Tabs => {
                    files.push(PlannedFile::new(
                        "packages/react-navigation/tabs/index.tsx.ejs",
                        "navigation/index.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/react-navigation/tabs/tab-navigator.tsx.ejs",
                        "navigation/tab-navigator.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/react-navigation/tabs/one.tsx.ejs",
                        "screens/one.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/react-navigation/tabs/two.tsx.ejs",
                        "screens/two.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/react-navigation/tabs/modal.tsx.ejs",
                        "screens/modal.tsx",
                    ));
                }
                NavigationKind::Drawer => {
                    files.push(PlannedFile::new(
                        "packages/react-navigation/drawer/index.tsx.ejs",
                        "navigation/index.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/react-navigation/drawer/drawer-navigator.tsx.ejs",
                        "navigation/drawer-navigator.tsx",
                    ));
                    files.push(PlannedFile::new(
                        "packages/react-navigation/drawer/home.tsx.ejs",
                        "screens/home.tsx",
                    ));
                }
            }
        }
        // Non-navigation packages never reach here
        _ => {}
    }
}

fn styling_files(styling: PackageName, files: &mut Vec<PlannedFile>) {
    match styling {
        PackageName::Nativewind => {
            files.push(PlannedFile::new(
                "packages/nativewind/tailwind.config.js.ejs",
                "tailwind.config.js",
            ));
            files.push(PlannedFile::new(
                "packages/nativewind/nativewind-env.d.ts",
                "nativewind-env.d.ts",
            ));
        }
        PackageName::Tamagui => {
            files.push(PlannedFile::new(
                "packages/tamagui/tamagui.config.ts.ejs",
                "tamagui.config.ts",
            ));
        }
        // Plain StyleSheet needs no extra files
        _ => {}
    }
}
