//! Configuration validation.

use crate::config::schema::{Config, MAX_LIST_WINDOW_DAYS};
use crate::database::MAX_BUSY_TIMEOUT_SECONDS;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use slotbook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { list_window_days: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref file) = config.database_file {
            Self::validate_database_file(file)?;
        }

        if let Some(days) = config.list_window_days {
            if days == 0 || days > MAX_LIST_WINDOW_DAYS {
                return Err(Error::Validation {
                    field: "list_window_days".into(),
                    message: format!("Must be between 1 and {MAX_LIST_WINDOW_DAYS}"),
                });
            }
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
            if timeout > MAX_BUSY_TIMEOUT_SECONDS {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: format!(
                        "Timeout must be at most {MAX_BUSY_TIMEOUT_SECONDS} seconds"
                    ),
                });
            }
        }

        Ok(())
    }

    fn validate_database_file(file: &str) -> Result<()> {
        let trimmed = file.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: "database_file".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: "database_file".into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }
}
