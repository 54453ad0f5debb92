//! Error types
//!
//! Two disjoint classes of error leave the inspector:
//!
//! - **configuration errors** (unknown rule name, unknown child reference,
//!   malformed pattern or settings) abort the current operation immediately;
//! - **validation failures** are only raised by
//!   [`run_strict`](crate::inspector::InspectExt::run_strict), after the whole
//!   tree has been validated, and carry the collected messages.

use serde::Serialize;

use crate::inspector::Messages;

/// Result type used throughout the crate.
pub type InspectorResult<T> = Result<T, InspectorError>;

/// Errors raised by inspectors, rule builders and settings.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum InspectorError {
    /// A rule name has no message in the error catalog, or no rule behind it.
    #[error("unsupported validation rule \"{rule}\", try using define()")]
    UnsupportedRule {
        /// The offending rule name.
        rule: String,
    },

    /// No child is registered under the reference.
    #[error("invalid inspector reference \"{reference}\"")]
    InvalidReference {
        /// The reference that was looked up.
        reference: String,
    },

    /// A message key names a registered child.
    #[error("message key \"{key}\" is already the name of a child inspector")]
    KeyShadowsChild {
        /// The key that was logged or checked.
        key: String,
    },

    /// A regular expression did not compile.
    #[error("invalid pattern \"{pattern}\": {source}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A declarative setting has the wrong shape for where it is used.
    #[error("invalid setting for \"{field}\": {reason}")]
    InvalidSetting {
        /// Field or child name the setting was addressed to.
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Settings could not be read from JSON.
    #[error("invalid settings: {0}")]
    InvalidSettings(#[source] serde_json::Error),

    /// Configuration could not be read from JSON.
    #[error("invalid inspector config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    /// A strict run collected messages.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

impl InspectorError {
    /// Creates an [`UnsupportedRule`](Self::UnsupportedRule) error.
    pub fn unsupported_rule(rule: impl Into<String>) -> Self {
        Self::UnsupportedRule { rule: rule.into() }
    }

    /// Creates an [`InvalidReference`](Self::InvalidReference) error.
    pub fn invalid_reference(reference: impl Into<String>) -> Self {
        Self::InvalidReference {
            reference: reference.into(),
        }
    }

    /// Creates a [`KeyShadowsChild`](Self::KeyShadowsChild) error.
    pub fn key_shadows_child(key: impl Into<String>) -> Self {
        Self::KeyShadowsChild { key: key.into() }
    }

    /// Creates an [`InvalidSetting`](Self::InvalidSetting) error.
    pub fn invalid_setting(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors caused by how the inspector was set up
    /// rather than by the data it inspected.
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }

    /// Returns the validation failure, if this is one.
    pub const fn as_failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Validation(failure) => Some(failure),
            _ => None,
        }
    }
}

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// Raised by a strict run that collected at least one message.
///
/// Holds a snapshot of the messages taken when the run ended, so it stays
/// meaningful after the inspector is cleared or run again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    message: String,
    count: usize,
    messages: Messages,
}

impl ValidationFailure {
    pub(crate) fn new(message: impl Into<String>, count: usize, messages: Messages) -> Self {
        Self {
            message: message.into(),
            count,
            messages,
        }
    }

    /// The user-facing failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of messages collected across the tree.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// The full message tree.
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// The messages at a field key or dotted path.
    pub fn messages_at(&self, path: &str) -> Messages {
        self.messages.at(path)
    }

    /// Consumes the failure, returning the message tree.
    pub fn into_messages(self) -> Messages {
        self.messages
    }
}
