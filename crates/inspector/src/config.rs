//! Inspector configuration
//!
//! [`InspectorConfig`] carries the texts an inspector reports: the default
//! error catalog and the message of a strict-run failure. Applications load
//! it from JSON to localise or extend the built-in messages.
//!
//! ```rust,ignore
//! use nebula_inspector::prelude::*;
//!
//! let config = InspectorConfig::from_json(r#"{
//!     "failure_message": "Bitte korrigieren Sie die Fehler.",
//!     "default_errors": { "notBlank": "Dieses Feld darf nicht leer sein" }
//! }"#)?;
//! let inspector = Inspector::with_config(config);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{InspectorError, InspectorResult};
use crate::rules::DEFAULT_ERRORS;

/// Failure message of a strict run when none is configured.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Please correct the errors shown below.";

/// Messages an inspector starts from, and returns to on `clear`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Message carried by the failure of a strict run.
    pub failure_message: String,
    /// Rule name to message, in catalog order.
    pub default_errors: IndexMap<String, String>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            failure_message: DEFAULT_FAILURE_MESSAGE.to_owned(),
            default_errors: DEFAULT_ERRORS
                .iter()
                .map(|(name, message)| ((*name).to_owned(), (*message).to_owned()))
                .collect(),
        }
    }
}

impl InspectorConfig {
    /// Reads a config from JSON.
    ///
    /// Entries of `default_errors` are merged over the built-in catalog, so a
    /// document only needs to name the messages it changes or adds.
    pub fn from_json(json: &str) -> InspectorResult<Self> {
        #[derive(Deserialize)]
        struct Overrides {
            failure_message: Option<String>,
            #[serde(default)]
            default_errors: IndexMap<String, String>,
        }

        let overrides: Overrides =
            serde_json::from_str(json).map_err(InspectorError::InvalidConfig)?;

        let mut config = Self::default();
        if let Some(message) = overrides.failure_message {
            config.failure_message = message;
        }
        config.default_errors.extend(overrides.default_errors);
        Ok(config)
    }

    /// Sets the message for one rule name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error(mut self, rule: impl Into<String>, message: impl Into<String>) -> Self {
        self.default_errors.insert(rule.into(), message.into());
        self
    }

    /// Sets the failure message of strict runs.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    /// Returns the message configured for `rule`.
    pub fn error_for(&self, rule: &str) -> Option<&str> {
        self.default_errors.get(rule).map(String::as_str)
    }
}
