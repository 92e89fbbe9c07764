use crate::utils::error::{GuideError, Result};
use tracing_subscriber::EnvFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GuideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GuideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GuideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Accepts anything `RUST_LOG` would accept, e.g. `debug` or `monitoring_guide=trace`.
pub fn validate_filter_directive(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    EnvFilter::try_new(value)
        .map(|_| ())
        .map_err(|e| GuideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid log filter: {}", e),
        })
}
