use serde::{Deserialize, Serialize};
use std::fmt;

/// A single process invocation: program plus its arguments, passed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "command", rename_all = "snake_case")]
pub enum LaunchAction {
    StartProxy(CommandSpec),
    RunServer(CommandSpec),
}

impl LaunchAction {
    pub fn command(&self) -> &CommandSpec {
        match self {
            LaunchAction::StartProxy(cmd) | LaunchAction::RunServer(cmd) => cmd,
        }
    }
}

/// Ordered launch steps. An empty plan means the container is not ours to start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub actions: Vec<LaunchAction>,
}

impl LaunchPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Started,
    Failed { code: Option<i32> },
}

impl ServiceStatus {
    pub fn is_started(&self) -> bool {
        matches!(self, ServiceStatus::Started)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Exited(i32),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Skipped => 0,
            Outcome::Exited(code) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display_quotes_blank_arguments() {
        let cmd = CommandSpec::new("uvicorn")
            .arg("main:app")
            .args(["--host", "", "--port", "80 80"]);
        assert_eq!(cmd.to_string(), r#"uvicorn main:app --host "" --port "80 80""#);
    }

    #[test]
    fn test_plan_serializes_with_action_tags() {
        let plan = LaunchPlan {
            actions: vec![LaunchAction::StartProxy(
                CommandSpec::new("service").args(["nginx", "start"]),
            )],
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["actions"][0]["action"], "start_proxy");
        assert_eq!(json["actions"][0]["command"]["program"], "service");
    }
}
