use crate::domain::model::{LaunchAction, LaunchPlan, Outcome};
use crate::domain::ports::Launcher;
use crate::utils::error::Result;

pub struct Bootstrapper<L: Launcher> {
    launcher: L,
}

impl<L: Launcher> Bootstrapper<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Runs the plan in order. A proxy that fails to start is logged and
    /// skipped past; a server that cannot be launched is an error.
    pub async fn run(&self, plan: &LaunchPlan) -> Result<Outcome> {
        if plan.is_empty() {
            tracing::debug!("Container identity does not match, nothing to start");
            return Ok(Outcome::Skipped);
        }

        let mut outcome = Outcome::Skipped;

        for action in &plan.actions {
            match action {
                LaunchAction::StartProxy(cmd) => {
                    tracing::info!("Starting reverse proxy: {}", cmd);
                    match self.launcher.start_service(cmd).await {
                        Ok(status) if status.is_started() => {
                            tracing::info!("Reverse proxy started");
                        }
                        Ok(status) => {
                            tracing::warn!(
                                "Reverse proxy start reported {:?}, continuing",
                                status
                            );
                        }
                        Err(e) => {
                            tracing::warn!("Reverse proxy could not be started: {}, continuing", e);
                        }
                    }
                }
                LaunchAction::RunServer(cmd) => {
                    tracing::info!("Launching application server: {}", cmd);
                    let code = self.launcher.run_server(cmd).await?;
                    tracing::info!("Application server exited with status {}", code);
                    outcome = Outcome::Exited(code);
                }
            }
        }

        Ok(outcome)
    }
}
