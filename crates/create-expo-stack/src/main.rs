//! create-expo-stack - Create a new Expo project

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use expo_stack_core::catalog::{PackageManager, PackageName};
use expo_stack_core::error::Error;
use expo_stack_core::{detect_mode, output, plan, rerun, resolve, validate, Mode, ProjectConfig, RawOptions};

const ISSUES_URL: &str = "https://github.com/danstepanov/create-expo-stack#reporting-bugs--feedback";

#[derive(Parser, Debug)]
#[command(name = "create-expo-stack")]
#[command(about = "Create a new Expo project")]
#[command(version)]
pub struct Args {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Accept all defaults and skip the prompts
    #[arg(long = "default", short = 'd')]
    pub use_default: bool,

    /// Answer from flags only; never prompt
    #[arg(long = "nonInteractive")]
    pub non_interactive: bool,

    /// Generate a blank TypeScript project
    #[arg(long)]
    pub blank: bool,

    /// Use the opinionated Ignite stack instead
    #[arg(long)]
    pub ignite: bool,

    /// Skip installing dependencies
    #[arg(long = "noInstall")]
    pub no_install: bool,

    /// Skip initializing a git repository
    #[arg(long = "noGit")]
    pub no_git: bool,

    /// Replace an existing directory with the same name
    #[arg(long)]
    pub overwrite: bool,

    /// Use a tabs layout (requires a navigation package)
    #[arg(long)]
    pub tabs: bool,

    /// Use a drawer layout (requires a navigation package)
    #[arg(long)]
    pub drawer: bool,

    /// Import alias for tsconfig; must end in `/*` (bare flag uses `@/*`)
    #[arg(long = "importAlias", num_args = 0..=1)]
    pub import_alias: Option<Option<String>>,

    /// Add React Navigation
    #[arg(long = "reactNavigation", aliases = ["react-navigation", "reactnavigation"])]
    pub react_navigation: bool,

    /// Add Expo Router
    #[arg(long = "expoRouter", aliases = ["expo-router", "exporouter"])]
    pub expo_router: bool,

    /// Style with NativeWind
    #[arg(long)]
    pub nativewind: bool,

    /// Style with Tamagui
    #[arg(long)]
    pub tamagui: bool,

    /// Style with plain React Native StyleSheet
    #[arg(long)]
    pub stylesheet: bool,

    /// Add Supabase authentication
    #[arg(long)]
    pub supabase: bool,

    /// Add Firebase authentication
    #[arg(long)]
    pub firebase: bool,

    /// Add vexo-analytics
    #[arg(long = "vexo-analytics")]
    pub vexo_analytics: bool,

    /// Use bun as the package manager
    #[arg(long)]
    pub bun: bool,

    /// Use pnpm as the package manager
    #[arg(long)]
    pub pnpm: bool,

    /// Use npm as the package manager
    #[arg(long)]
    pub npm: bool,

    /// Use yarn as the package manager
    #[arg(long)]
    pub yarn: bool,
}

impl From<Args> for RawOptions {
    fn from(args: Args) -> Self {
        let mut raw = RawOptions {
            project_name: args.project_name,
            use_default: args.use_default,
            non_interactive: args.non_interactive,
            blank: args.blank,
            ignite: args.ignite,
            overwrite: args.overwrite,
            no_install: args.no_install,
            no_git: args.no_git,
            tabs: args.tabs,
            drawer: args.drawer,
            import_alias: args.import_alias,
            ..RawOptions::default()
        };

        for (set, package) in [
            (args.react_navigation, PackageName::ReactNavigation),
            (args.expo_router, PackageName::ExpoRouter),
            (args.nativewind, PackageName::Nativewind),
            (args.tamagui, PackageName::Tamagui),
            (args.stylesheet, PackageName::Stylesheet),
            (args.supabase, PackageName::Supabase),
            (args.firebase, PackageName::Firebase),
            (args.vexo_analytics, PackageName::VexoAnalytics),
        ] {
            if set {
                raw.push_package(package);
            }
        }

        for (set, pm) in [
            (args.bun, PackageManager::Bun),
            (args.pnpm, PackageManager::Pnpm),
            (args.npm, PackageManager::Npm),
            (args.yarn, PackageManager::Yarn),
        ] {
            if set {
                raw.package_managers.push(pm);
            }
        }

        raw
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        if let Some(core) = err.downcast_ref::<Error>() {
            match core {
                Error::UserCancelled => {
                    println!("\n{}", "Cancelled... 👋".green());
                    return;
                }
                Error::InvalidOptionCombination { .. }
                | Error::InvalidImportAlias(_)
                | Error::ProjectNameAlreadyExists(_) => {
                    eprintln!("\n{} {}\n", "Error:".red().bold(), core);
                    std::process::exit(1);
                }
                Error::Io(_) => {}
            }
        }

        print_something_went_wrong();
        eprintln!("{:?}", err);
        std::process::exit(1);
    }
}

fn print_something_went_wrong() {
    println!();
    println!("Oops, something went wrong while creating your project 😢");
    println!();
    println!("If this was unexpected, please open an issue: {}", ISSUES_URL);
    println!();
}

async fn run(args: Args) -> Result<()> {
    ctrlc::set_handler(|| {
        let _ = console::Term::stderr().show_cursor();
        println!("\nCancelled... 👋");
        std::process::exit(0);
    })
    .context("failed to set interrupt handler")?;

    let mut raw = RawOptions::from(args);
    let mode = detect_mode(&raw);

    // Contradictory flags are rejected before any prompt renders; resolve
    // re-checks after interactive answers are folded in.
    validate::check_flags(&raw)?;

    if mode == Mode::Interactive {
        let answers = expo_stack_core::tui::collect()?;
        raw = answers.into_raw(raw);
    }

    let mut config = resolve(&raw)?;

    // Directory collision: interactive runs re-prompt, everything else is
    // fatal unless --overwrite was given.
    let parent = std::env::current_dir().context("failed to resolve current directory")?;
    let mut remove_existing = false;
    if mode == Mode::Interactive && !config.flags.overwrite {
        let decision =
            expo_stack_core::tui::confirm_project_name(config.project_name.clone(), &parent)?;
        config.project_name = decision.name;
        remove_existing = decision.remove_existing;
    } else {
        validate::check_target_dir(
            &config.project_name,
            &parent.join(&config.project_name),
            config.flags.overwrite,
        )?;
    }

    let target = parent.join(&config.project_name);
    if remove_existing && target.exists() {
        tokio::fs::remove_dir_all(&target)
            .await
            .with_context(|| format!("failed to remove {}", target.display()))?;
    }

    if mode == Mode::Ignite {
        output::ignite::run_ignite(&config).await?;
        return Ok(());
    }

    println!();
    println!("{}", "Your project configuration:".cyan().bold());
    print!(
        "{}",
        serde_yaml::to_string(&config).context("failed to serialize configuration")?
    );
    println!();
    println!("{}", "To recreate this project, run:".cyan().bold());
    println!("  {}", rerun::generate(&config).yellow());

    let file_plan = plan(&config);
    let written =
        output::render::render(&file_plan, &output::render::template_root(), &target).await?;
    println!();
    println!(
        "{} {} files in {}",
        "Created".green().bold(),
        written.len(),
        target.display()
    );

    if !config.flags.no_git {
        output::git::init_repository(&target).await?;
    }
    if !config.flags.no_install {
        output::pm::install_dependencies(config.package_manager(), &target).await?;
    }

    print_next_steps(&config);

    Ok(())
}

fn print_next_steps(config: &ProjectConfig) {
    let manager = config.package_manager();
    let mut steps = vec![format!("cd {}", config.project_name)];
    if config.flags.no_install {
        let (bin, args) = manager.install_args();
        steps.push(format!("{} {}", bin, args.join(" ")).trim_end().to_string());
    }
    steps.push(format!("{} ios", manager.run_command()));
    steps.push(format!("{} android", manager.run_command()));

    println!();
    println!("  Next steps");
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(argv: &[&str]) -> RawOptions {
        let mut full = vec!["create-expo-stack"];
        full.extend_from_slice(argv);
        RawOptions::from(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn test_all_navigation_spellings_parse() {
        for spelling in ["--reactNavigation", "--react-navigation", "--reactnavigation"] {
            assert!(raw(&[spelling]).has_package(PackageName::ReactNavigation));
        }
        for spelling in ["--expoRouter", "--expo-router", "--exporouter"] {
            assert!(raw(&[spelling]).has_package(PackageName::ExpoRouter));
        }
    }

    #[test]
    fn test_bare_import_alias_flag() {
        assert_eq!(raw(&["--importAlias"]).import_alias, Some(None));
    }

    #[test]
    fn test_valued_import_alias_flag() {
        assert_eq!(
            raw(&["--importAlias", "~/*"]).import_alias,
            Some(Some("~/*".to_string()))
        );
    }

    #[test]
    fn test_absent_import_alias_flag() {
        assert_eq!(raw(&["my-app"]).import_alias, None);
    }

    #[test]
    fn test_conflicting_package_manager_flags_resolve_to_bun() {
        let options = raw(&["my-app", "--npm", "--bun"]);
        let config = resolve(&options).unwrap();
        assert_eq!(config.flags.package_manager, Some(PackageManager::Bun));
    }

    #[test]
    fn test_positional_name_and_flags() {
        let options = raw(&["my-app", "--expo-router", "--tabs", "--noGit"]);
        assert_eq!(options.project_name.as_deref(), Some("my-app"));
        assert!(options.tabs);
        assert!(options.no_git);
    }

    #[test]
    fn test_default_short_flag() {
        assert!(raw(&["-d"]).use_default);
    }

    #[test]
    fn test_tabs_alone_fails_before_any_prompt() {
        // A bare layout flag leaves the run interactive, but the flag check
        // runs ahead of the prompt flow and rejects it immediately.
        let options = raw(&["--tabs"]);
        assert_eq!(detect_mode(&options), Mode::Interactive);
        assert!(matches!(
            validate::check_flags(&options),
            Err(Error::InvalidOptionCombination { flag: "tabs" })
        ));
    }

    #[test]
    fn test_drawer_alone_fails_before_any_prompt() {
        let options = raw(&["--drawer"]);
        assert_eq!(detect_mode(&options), Mode::Interactive);
        assert!(matches!(
            validate::check_flags(&options),
            Err(Error::InvalidOptionCombination { flag: "drawer" })
        ));
    }
}
