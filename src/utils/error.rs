use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot read launch profile {path}: {source}")]
    ProfileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Failed to launch `{program}`: {source}")]
    LaunchError {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl BootstrapError {
    pub fn launch(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::LaunchError {
            program: program.into(),
            source,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigValidationError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::MissingConfigError { .. }
                | Self::ProfileReadError { .. }
        )
    }

    /// Exit status reported to the container runtime, following the shell
    /// conventions for commands that cannot be found or executed.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LaunchError { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                127
            }
            Self::LaunchError { .. } => 126,
            e if e.is_config_error() => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::LaunchError { program, source }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                format!("{}: command not found", program)
            }
            Self::LaunchError { program, source } => format!("{}: {}", program, source),
            Self::ConfigValidationError { field, message } => {
                format!("launch profile is invalid ({}): {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("launch profile field `{}` {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("`{}` is required", field),
            Self::ProfileReadError { path, source } => {
                format!("cannot read launch profile {}: {}", path, source)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
