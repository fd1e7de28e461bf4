use crate::utils::error::{BootstrapError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Environment variable names may not be empty and may not contain `=` or NUL,
/// otherwise the lookup can never succeed.
pub fn validate_env_var_name(field_name: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(BootstrapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Variable name cannot be empty".to_string(),
        });
    }

    if name.contains('=') || name.contains('\0') {
        return Err(BootstrapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Variable name cannot contain '=' or null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_program(field_name: &str, program: &str) -> Result<()> {
    if program.trim().is_empty() {
        return Err(BootstrapError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    if program.contains('\0') {
        return Err(BootstrapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: program.to_string(),
            reason: "Program contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BootstrapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_env_var_name() {
        assert!(validate_env_var_name("service.identity_var", "CONTAINER_NAME").is_ok());
        assert!(validate_env_var_name("service.identity_var", "").is_err());
        assert!(validate_env_var_name("service.identity_var", "A=B").is_err());
        assert!(validate_env_var_name("service.identity_var", "A\0").is_err());
    }

    #[test]
    fn test_validate_program() {
        assert!(validate_program("server.program", "uvicorn").is_ok());
        assert!(matches!(
            validate_program("server.program", "  "),
            Err(BootstrapError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("service.expected", "roteador-contrato").is_ok());
        assert!(validate_non_empty_string("service.expected", "\t").is_err());
    }
}
