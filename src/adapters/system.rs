use crate::domain::model::{CommandSpec, ServiceStatus};
use crate::domain::ports::Launcher;
use crate::utils::error::{BootstrapError, Result};
use async_trait::async_trait;
use std::process::ExitStatus;
use tokio::process::Command;

/// Launches real processes on the host.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    exec: bool,
}

impl SystemLauncher {
    /// With `exec` set, `run_server` replaces the entrypoint process on Unix so
    /// the server receives the container's signals directly.
    pub fn new(exec: bool) -> Self {
        Self { exec }
    }

    pub fn spawning() -> Self {
        Self::new(false)
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        cmd
    }

    #[cfg(unix)]
    fn exec_server(spec: &CommandSpec) -> Result<i32> {
        use std::os::unix::process::CommandExt;

        // exec 只有失敗時才會返回
        let err = std::process::Command::new(&spec.program)
            .args(&spec.args)
            .exec();
        Err(BootstrapError::launch(&spec.program, err))
    }

    async fn spawn_server(spec: &CommandSpec) -> Result<i32> {
        let mut child = Self::command(spec)
            .spawn()
            .map_err(|e| BootstrapError::launch(&spec.program, e))?;
        tracing::debug!("Application server running as pid {:?}", child.id());

        let status = child.wait().await?;
        Ok(exit_code(status))
    }
}

#[async_trait]
impl Launcher for SystemLauncher {
    async fn start_service(&self, command: &CommandSpec) -> Result<ServiceStatus> {
        let status = Self::command(command)
            .status()
            .await
            .map_err(|e| BootstrapError::launch(&command.program, e))?;

        if status.success() {
            Ok(ServiceStatus::Started)
        } else {
            Ok(ServiceStatus::Failed {
                code: status.code(),
            })
        }
    }

    async fn run_server(&self, command: &CommandSpec) -> Result<i32> {
        #[cfg(unix)]
        if self.exec {
            return Self::exec_server(command);
        }

        Self::spawn_server(command).await
    }
}

/// Maps a child status to the code a shell would report: the exit code, or
/// `128 + signal` when the child was killed.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
