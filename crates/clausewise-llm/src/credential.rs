//! API credential resolution
//!
//! Credentials are read from an environment variable once, when the service
//! handle is built. A missing credential is not an error at that point: it is
//! reported by the first call that needs it, before any request is sent.

use crate::LlmError;
use std::fmt;

/// An API key resolved from a named environment variable
#[derive(Clone)]
pub struct Credential {
    env_var: String,
    value: Option<String>,
}

impl Credential {
    /// Resolve the credential from the environment
    ///
    /// Unset and empty variables both count as absent.
    pub fn from_env(env_var: impl Into<String>) -> Self {
        let env_var = env_var.into();
        let value = std::env::var(&env_var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Self { env_var, value }
    }

    /// Use an explicit value, remembering which variable it stands in for
    pub fn from_value(env_var: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            env_var: env_var.into(),
            value: if value.trim().is_empty() { None } else { Some(value) },
        }
    }

    /// An absent credential
    pub fn missing(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            value: None,
        }
    }

    /// Name of the environment variable the credential comes from
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// True when a non-empty value is available
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The key, or `LlmError::MissingCredential` naming the variable
    pub fn require(&self) -> Result<&str, LlmError> {
        self.value
            .as_deref()
            .ok_or_else(|| LlmError::MissingCredential(self.env_var.clone()))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("env_var", &self.env_var)
            .field("value", &self.value.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
