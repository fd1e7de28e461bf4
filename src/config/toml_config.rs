use crate::domain::ports::{EnvSource, ProcessEnv};
use crate::utils::error::{BootstrapError, Result};
use crate::utils::validation::{
    validate_env_var_name, validate_non_empty_string, validate_program, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EXPECTED_SERVICE: &str = "roteador-contrato";
pub const DEFAULT_IDENTITY_VAR: &str = "CONTAINER_NAME";
pub const DEFAULT_HOST_VAR: &str = "HOST";
pub const DEFAULT_PORT_VAR: &str = "PORT";

/// Launch profile. Every field defaults to the stock container behaviour, so
/// an empty profile starts NGINX and then `ddtrace-run uvicorn main:app`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchProfile {
    pub service: ServiceConfig,
    pub proxy: ProxyConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub expected: String,
    pub identity_var: String,
    pub host_var: String,
    pub port_var: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            expected: DEFAULT_EXPECTED_SERVICE.to_string(),
            identity_var: DEFAULT_IDENTITY_VAR.to_string(),
            host_var: DEFAULT_HOST_VAR.to_string(),
            port_var: DEFAULT_PORT_VAR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyConfig {
    pub enabled: bool,
    pub manager: String,
    pub name: String,
    pub action: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            manager: "service".to_string(),
            name: "nginx".to_string(),
            action: "start".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// APM wrapper prepended to the server command; empty runs the server bare.
    pub wrapper: Vec<String>,
    pub program: String,
    pub app: String,
    pub extra_args: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            wrapper: vec!["ddtrace-run".to_string()],
            program: "uvicorn".to_string(),
            app: "main:app".to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl LaunchProfile {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            BootstrapError::ProfileReadError {
                path: path.as_ref().display().to_string(),
                source: e,
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with_env(content, &ProcessEnv)
    }

    /// 同上，但 `${VAR}` 由指定的來源取值
    pub fn from_toml_str_with_env<E: EnvSource + ?Sized>(content: &str, env: &E) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content, env)?;

        toml::from_str(&processed_content).map_err(|e| BootstrapError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${APM_WRAPPER})，未定義者保留原文
    fn substitute_env_vars<E: EnvSource + ?Sized>(content: &str, env: &E) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BootstrapError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            env.get(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("service.expected", &self.service.expected)?;
        validate_env_var_name("service.identity_var", &self.service.identity_var)?;
        validate_env_var_name("service.host_var", &self.service.host_var)?;
        validate_env_var_name("service.port_var", &self.service.port_var)?;

        if self.proxy.enabled {
            validate_program("proxy.manager", &self.proxy.manager)?;
            validate_non_empty_string("proxy.name", &self.proxy.name)?;
        }

        for (i, part) in self.server.wrapper.iter().enumerate() {
            validate_program(&format!("server.wrapper[{}]", i), part)?;
        }
        validate_program("server.program", &self.server.program)?;

        Ok(())
    }
}

impl Validate for LaunchProfile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
