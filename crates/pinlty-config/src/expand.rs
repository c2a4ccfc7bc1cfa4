//! Environment variable expansion for configuration strings.

use std::cell::RefCell;
use std::convert::Infallible;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// An unset `${VAR}` without a default is an error. Bare `$VAR` is left
/// untouched, as is any string without `${`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let unset = RefCell::new(Vec::new());
    let expanded = shellexpand::env_with_context(value, |var| -> Result<Option<String>, Infallible> {
        if let Ok(val) = std::env::var(var) {
            Ok(Some(val))
        } else {
            unset.borrow_mut().push(var.to_owned());
            Ok(None)
        }
    })
    .map(std::borrow::Cow::into_owned)
    .unwrap_or_else(|e| match e.cause {});

    // Unset variables with a default were substituted; the rest stay verbatim.
    if let Some(missing) = unset
        .into_inner()
        .into_iter()
        .find(|var| expanded.contains(&format!("${{{var}}}")))
    {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{missing}}} not set"),
        });
    }

    Ok(expanded)
}
