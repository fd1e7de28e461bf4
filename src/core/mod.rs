pub mod bootstrap;
pub mod plan;

pub use crate::domain::model::{CommandSpec, LaunchAction, LaunchPlan, Outcome, ServiceStatus};
pub use crate::domain::ports::{EnvSource, Launcher, ProcessEnv};
pub use crate::utils::error::Result;
