//! Writes a file plan to disk from an on-disk template tree
//!
//! Templates ending in `.ejs` get `{{ key }}` markers substituted from the
//! render context; everything else is copied byte-for-byte.

use crate::plan::FilePlan;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Environment variable overriding the template tree location
pub const TEMPLATE_DIR_ENV: &str = "CES_TEMPLATE_DIR";

/// Template tree location: env override or `templates/` next to the binary's
/// working directory
pub fn template_root() -> PathBuf {
    std::env::var_os(TEMPLATE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("templates"))
}

/// Render every planned file into `target_dir`, returning the destinations
/// written.
pub async fn render(plan: &FilePlan, template_root: &Path, target_dir: &Path) -> Result<Vec<String>> {
    fs::create_dir_all(target_dir)
        .await
        .context("failed to create target directory")?;

    let vars = serde_yaml::to_value(&plan.context).context("failed to build template variables")?;

    let mut written = Vec::new();
    for file in &plan.files {
        let source = template_root.join(&file.template);
        let target = target_dir.join(&file.dest);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }

        if file.template.ends_with(".ejs") {
            let body = fs::read_to_string(&source)
                .await
                .with_context(|| format!("failed to read template: {}", source.display()))?;
            fs::write(&target, substitute(&body, &vars))
                .await
                .with_context(|| format!("failed to write file: {}", target.display()))?;
        } else {
            let bytes = fs::read(&source)
                .await
                .with_context(|| format!("failed to read template: {}", source.display()))?;
            fs::write(&target, &bytes)
                .await
                .with_context(|| format!("failed to write file: {}", target.display()))?;
        }

        written.push(file.dest.clone());
    }

    Ok(written)
}

/// Replace `{{ key }}` markers with context values. Unknown keys are left
/// in place so a bad template is visible in the output rather than silently
/// blanked.
pub fn substitute(input: &str, vars: &serde_yaml::Value) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                match lookup(vars, key) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str("{{");
                        out.push_str(&after[..end]);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn lookup(vars: &serde_yaml::Value, key: &str) -> Option<String> {
    match vars.get(key)? {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Null => Some(String::new()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PackageName;
    use crate::plan::plan;
    use crate::resolve::{resolve, RawOptions};

    fn demo_plan() -> FilePlan {
        let mut raw = RawOptions {
            use_default: true,
            project_name: Some("demo-app".to_string()),
            ..RawOptions::default()
        };
        raw.push_package(PackageName::Supabase);
        plan(&resolve(&raw).unwrap())
    }

    #[test]
    fn test_substitute_replaces_known_keys() {
        let vars = serde_yaml::to_value(&demo_plan().context).unwrap();
        let out = substitute("name: {{ project_name }}, auth: {{ supabase }}", &vars);
        assert_eq!(out, "name: demo-app, auth: true");
    }

    #[test]
    fn test_substitute_leaves_unknown_keys_in_place() {
        let vars = serde_yaml::to_value(&demo_plan().context).unwrap();
        let out = substitute("{{ mystery_key }}", &vars);
        assert_eq!(out, "{{ mystery_key }}");
    }

    #[test]
    fn test_substitute_renders_null_as_empty() {
        // No navigation selected, so the navigation key is null
        let vars = serde_yaml::to_value(&demo_plan().context).unwrap();
        assert_eq!(substitute("[{{ navigation }}]", &vars), "[]");
    }

    #[test]
    fn test_substitute_handles_unterminated_marker() {
        let vars = serde_yaml::to_value(&demo_plan().context).unwrap();
        assert_eq!(substitute("broken {{ project_name", &vars), "broken {{ project_name");
    }

    #[tokio::test]
    async fn test_render_writes_substituted_files() {
        let templates = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();

        let mut file_plan = demo_plan();
        file_plan.files.truncate(1); // base/package.json.ejs
        let source = templates.path().join("base/package.json.ejs");
        std::fs::create_dir_all(source.parent().unwrap()).unwrap();
        std::fs::write(&source, "{\"name\": \"{{ project_name }}\"}").unwrap();

        let written = render(&file_plan, templates.path(), target.path())
            .await
            .unwrap();

        assert_eq!(written, vec!["package.json".to_string()]);
        let body = std::fs::read_to_string(target.path().join("package.json")).unwrap();
        assert_eq!(body, "{\"name\": \"demo-app\"}");
    }

    #[tokio::test]
    async fn test_render_fails_on_missing_template() {
        let templates = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();

        let mut file_plan = demo_plan();
        file_plan.files.truncate(1);

        assert!(render(&file_plan, templates.path(), target.path())
            .await
            .is_err());
    }
}
