//! Collaborator glue around the core: template rendering, package-manager
//! invocation, git initialization, and Ignite delegation
//!
//! The core treats all of these as black boxes; nothing here feeds back into
//! option resolution or planning.

pub mod git;
pub mod ignite;
pub mod pm;
pub mod render;
