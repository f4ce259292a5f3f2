//! Statement import building blocks
//!
//! - `config`: per-account YAML importer files
//! - `transform`: running shell commands as line filters

pub mod config;
pub mod transform;

pub use config::{discover_importers, Field, ImporterConfig, Transformations};
pub use transform::{LineTransform, ShellTransform};
