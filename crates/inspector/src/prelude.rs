//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use nebula_inspector::prelude::*;
//! ```

pub use crate::config::InspectorConfig;
pub use crate::error::{InspectorError, InspectorResult, ValidationFailure};
pub use crate::foundation::{Rule, rule_fn};
pub use crate::inspector::{
    FormInspector, Inspect, InspectExt, Inspector, Messages, Setting, Settings,
};
pub use crate::rules::{BuiltinRules, RuleBuilder, RuleFactory, names};
