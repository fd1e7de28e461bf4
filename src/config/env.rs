use crate::config::toml_config::ServiceConfig;
use crate::domain::ports::EnvSource;

/// Environment values read once at startup. Host and port are kept verbatim;
/// an unset variable becomes an empty string and is passed on as such.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub identity: Option<String>,
    pub host: String,
    pub port: String,
}

impl EnvSnapshot {
    pub fn capture<E: EnvSource + ?Sized>(service: &ServiceConfig, env: &E) -> Self {
        Self {
            identity: env.get(&service.identity_var),
            host: env.get(&service.host_var).unwrap_or_default(),
            port: env.get(&service.port_var).unwrap_or_default(),
        }
    }
}
