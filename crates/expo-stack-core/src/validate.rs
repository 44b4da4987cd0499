//! Pure go/no-go checks run before any configuration mutation

use crate::error::{Error, Result};
use crate::resolve::RawOptions;
use std::path::Path;

/// Reject contradictory or malformed flag combinations.
///
/// No side effects; on failure the caller aborts before generating files.
pub fn check_flags(raw: &RawOptions) -> Result<()> {
    if raw.tabs && !raw.has_navigation() {
        return Err(Error::InvalidOptionCombination { flag: "tabs" });
    }
    if raw.drawer && !raw.has_navigation() {
        return Err(Error::InvalidOptionCombination { flag: "drawer" });
    }

    if let Some(Some(alias)) = &raw.import_alias {
        if !alias.ends_with("/*") {
            return Err(Error::InvalidImportAlias(alias.clone()));
        }
    }

    Ok(())
}

/// Reject a target directory that already exists, unless overwriting.
///
/// Interactive callers re-prompt instead of calling this; non-interactive
/// callers treat the error as fatal.
pub fn check_target_dir(project_name: &str, target: &Path, overwrite: bool) -> Result<()> {
    if target.exists() && !overwrite {
        return Err(Error::ProjectNameAlreadyExists(project_name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PackageName;

    #[test]
    fn test_tabs_without_navigation_is_rejected() {
        let raw = RawOptions {
            tabs: true,
            ..RawOptions::default()
        };
        assert!(matches!(
            check_flags(&raw),
            Err(Error::InvalidOptionCombination { flag: "tabs" })
        ));
    }

    #[test]
    fn test_drawer_without_navigation_is_rejected() {
        let raw = RawOptions {
            drawer: true,
            ..RawOptions::default()
        };
        assert!(matches!(
            check_flags(&raw),
            Err(Error::InvalidOptionCombination { flag: "drawer" })
        ));
    }

    #[test]
    fn test_tabs_with_expo_router_is_accepted() {
        let mut raw = RawOptions {
            tabs: true,
            ..RawOptions::default()
        };
        raw.push_package(PackageName::ExpoRouter);
        assert!(check_flags(&raw).is_ok());
    }

    #[test]
    fn test_valid_import_alias_passes() {
        let raw = RawOptions {
            import_alias: Some(Some("@/*".to_string())),
            ..RawOptions::default()
        };
        assert!(check_flags(&raw).is_ok());
    }

    #[test]
    fn test_import_alias_without_suffix_fails() {
        let raw = RawOptions {
            import_alias: Some(Some("@".to_string())),
            ..RawOptions::default()
        };
        assert!(matches!(
            check_flags(&raw),
            Err(Error::InvalidImportAlias(alias)) if alias == "@"
        ));
    }

    #[test]
    fn test_bare_import_alias_flag_passes() {
        let raw = RawOptions {
            import_alias: Some(None),
            ..RawOptions::default()
        };
        assert!(check_flags(&raw).is_ok());
    }

    #[test]
    fn test_existing_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("my-app");
        std::fs::create_dir(&target).unwrap();

        assert!(matches!(
            check_target_dir("my-app", &target, false),
            Err(Error::ProjectNameAlreadyExists(name)) if name == "my-app"
        ));
    }

    #[test]
    fn test_existing_directory_with_overwrite_passes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("my-app");
        std::fs::create_dir(&target).unwrap();

        assert!(check_target_dir("my-app", &target, true).is_ok());
    }

    #[test]
    fn test_missing_directory_passes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("my-app");
        assert!(check_target_dir("my-app", &target, false).is_ok());
    }
}
