use crate::domain::model::{CommandSpec, ServiceStatus};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait Launcher: Send + Sync {
    /// Asks the host service manager to start a service and reports whether it did.
    async fn start_service(&self, command: &CommandSpec) -> Result<ServiceStatus>;

    /// Runs the application server in the foreground and returns its exit code.
    async fn run_server(&self, command: &CommandSpec) -> Result<i32>;
}

/// Variable lookup used when taking the environment snapshot.
pub trait EnvSource {
    fn get(&self, name: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
