//! Configuration module for MoneyGrep
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MoneyGrepPaths;
pub use settings::Settings;
