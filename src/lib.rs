pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::SystemLauncher;
pub use crate::config::{env::EnvSnapshot, toml_config::LaunchProfile, CliConfig};
pub use crate::core::{bootstrap::Bootstrapper, LaunchPlan, Outcome};
pub use crate::utils::error::{BootstrapError, Result};
