use crate::config::env::EnvSnapshot;
use crate::config::toml_config::{LaunchProfile, ProxyConfig, ServerConfig};
use crate::domain::model::{CommandSpec, LaunchAction, LaunchPlan};

impl LaunchPlan {
    /// Builds the launch steps for this container.
    ///
    /// The identity must equal `service.expected` byte for byte; anything else,
    /// including an unset or empty variable, yields an empty plan. Host and port
    /// are handed to the server untouched.
    pub fn resolve(profile: &LaunchProfile, env: &EnvSnapshot) -> Self {
        match env.identity.as_deref() {
            Some(identity) if identity == profile.service.expected => {}
            Some(identity) => {
                tracing::debug!(
                    "Identity {:?} does not match {:?}, nothing to launch",
                    identity,
                    profile.service.expected
                );
                return Self::empty();
            }
            None => {
                tracing::debug!(
                    "{} is not set, nothing to launch",
                    profile.service.identity_var
                );
                return Self::empty();
            }
        }

        let mut actions = Vec::with_capacity(2);
        if profile.proxy.enabled {
            actions.push(LaunchAction::StartProxy(proxy_command(&profile.proxy)));
        }
        actions.push(LaunchAction::RunServer(server_command(
            &profile.server,
            &env.host,
            &env.port,
        )));

        Self { actions }
    }
}

fn proxy_command(proxy: &ProxyConfig) -> CommandSpec {
    let mut cmd = CommandSpec::new(&proxy.manager).arg(&proxy.name);
    if !proxy.action.is_empty() {
        cmd = cmd.arg(&proxy.action);
    }
    cmd
}

fn server_command(server: &ServerConfig, host: &str, port: &str) -> CommandSpec {
    // 有 APM wrapper 時由 wrapper 帶起 server
    let cmd = match server.wrapper.split_first() {
        Some((wrapper, wrapper_args)) => CommandSpec::new(wrapper)
            .args(wrapper_args.iter().map(String::as_str))
            .arg(&server.program),
        None => CommandSpec::new(&server.program),
    };

    cmd.arg(&server.app)
        .args(["--host", host, "--port", port])
        .args(server.extra_args.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(identity: Option<&str>, host: &str, port: &str) -> EnvSnapshot {
        EnvSnapshot {
            identity: identity.map(str::to_string),
            host: host.to_string(),
            port: port.to_string(),
        }
    }

    #[test]
    fn test_matching_identity_builds_proxy_then_server() {
        let plan = LaunchPlan::resolve(
            &LaunchProfile::default(),
            &snapshot(Some("roteador-contrato"), "0.0.0.0", "8080"),
        );

        assert_eq!(
            plan.actions,
            vec![
                LaunchAction::StartProxy(CommandSpec::new("service").args(["nginx", "start"])),
                LaunchAction::RunServer(CommandSpec::new("ddtrace-run").args([
                    "uvicorn", "main:app", "--host", "0.0.0.0", "--port", "8080"
                ])),
            ]
        );
    }

    #[test]
    fn test_non_matching_identity_is_empty() {
        let profile = LaunchProfile::default();

        for identity in [
            Some("other-service"),
            Some(""),
            Some("Roteador-Contrato"),
            Some(" roteador-contrato"),
            None,
        ] {
            let plan = LaunchPlan::resolve(&profile, &snapshot(identity, "0.0.0.0", "8080"));
            assert!(plan.is_empty(), "identity {:?} should not launch", identity);
        }
    }

    #[test]
    fn test_missing_host_and_port_pass_through_empty() {
        let plan = LaunchPlan::resolve(
            &LaunchProfile::default(),
            &snapshot(Some("roteador-contrato"), "", ""),
        );

        let server = plan.actions[1].command();
        assert_eq!(
            server.args,
            vec!["uvicorn", "main:app", "--host", "", "--port", ""]
        );
    }

    #[test]
    fn test_bare_server_without_wrapper_or_proxy() {
        let mut profile = LaunchProfile::default();
        profile.proxy.enabled = false;
        profile.server.wrapper.clear();
        profile.server.extra_args = vec!["--proxy-headers".to_string()];

        let plan = LaunchPlan::resolve(&profile, &snapshot(Some("roteador-contrato"), "::", "80"));

        assert_eq!(
            plan.actions,
            vec![LaunchAction::RunServer(CommandSpec::new("uvicorn").args([
                "main:app",
                "--host",
                "::",
                "--port",
                "80",
                "--proxy-headers"
            ]))]
        );
    }

    #[test]
    fn test_multi_part_wrapper() {
        let mut profile = LaunchProfile::default();
        profile.server.wrapper = vec!["newrelic-admin".to_string(), "run-program".to_string()];

        let plan = LaunchPlan::resolve(&profile, &snapshot(Some("roteador-contrato"), "h", "1"));
        let server = plan.actions[1].command();

        assert_eq!(server.program, "newrelic-admin");
        assert_eq!(server.args[..3], ["run-program", "uvicorn", "main:app"]);
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let profile = LaunchProfile::default();
        let env = snapshot(Some("roteador-contrato"), "0.0.0.0", "8080");

        assert_eq!(
            LaunchPlan::resolve(&profile, &env),
            LaunchPlan::resolve(&profile, &env)
        );
    }
}
