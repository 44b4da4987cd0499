//! expo-stack-core - Option resolution and file planning for create-expo-stack
//!
//! This library turns user intent (flags, interactive answers, or defaults)
//! into a single resolved project configuration, then derives the ordered
//! list of template files and their render parameters from it. The same
//! logical choices produce the same plan regardless of which input mode
//! supplied them.
//!
//! # Architecture
//!
//! The pipeline runs strictly in order:
//!
//! - **Validation** ([`validate`]) - pure go/no-go checks on the raw flags
//! - **Resolution** ([`resolve`]) - merge defaults, flags, and prompt
//!   answers into one [`ProjectConfig`]
//! - **Selection** ([`select`]) - append package selections, enforcing
//!   styling exclusivity
//! - **Planning** ([`plan`]) - derive the file list and render context
//! - **Rerun script** ([`rerun`]) - serialize the configuration back into a
//!   reproducing command line
//!
//! The [`output`] module holds the collaborator glue (renderer,
//! package-manager runner, git, Ignite); the core never depends on it.
//!
//! # Feature Flags
//!
//! - `tui` (default): enables the cliclack-based interactive prompt flow

pub mod catalog;
pub mod config;
pub mod error;
pub mod output;
pub mod plan;
pub mod rerun;
pub mod resolve;
pub mod select;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{NavigationKind, PackageKind, PackageManager, PackageName};
pub use config::{ImportAlias, PackageSelection, ProjectConfig, ProjectFlags};
pub use error::Error;
pub use plan::{plan, FilePlan, PlannedFile, RenderContext};
pub use resolve::{detect_mode, resolve, Answers, Mode, RawOptions};

/// Project name used when the user gives none (or an empty answer)
pub const DEFAULT_APP_NAME: &str = "my-expo-app";
