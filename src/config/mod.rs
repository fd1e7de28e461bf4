pub mod cli;
pub mod env;
pub mod toml_config;

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "entrypoint")]
#[command(about = "Container entrypoint: starts the reverse proxy and the application server")]
pub struct CliConfig {
    #[arg(long, help = "TOML launch profile")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Service name the identity variable must equal")]
    pub expected_service: Option<String>,

    #[arg(long, help = "Environment variable holding the container identity")]
    pub identity_var: Option<String>,

    #[arg(long, help = "Environment variable holding the bind host")]
    pub host_var: Option<String>,

    #[arg(long, help = "Environment variable holding the bind port")]
    pub port_var: Option<String>,

    #[arg(long, help = "Print the launch plan as JSON and exit")]
    pub dry_run: bool,

    #[arg(long, help = "Run the server as a child process instead of replacing this one")]
    pub no_exec: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
