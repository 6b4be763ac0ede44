//! Bundle operations behind the CLI commands
//!
//! - [`edit`]: select a bundle by partial name and open it
//! - [`update`]: pull installed bundles in sequence
//! - [`install`]: clone a bundle from GitHub
//!
//! Operations take their collaborators (repository, process runner, cancel
//! token) as arguments; the command layer wires up the real ones.

pub mod edit;
pub mod install;
pub mod update;
