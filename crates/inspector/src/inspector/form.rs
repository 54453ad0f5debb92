//! Declarative nodes
//!
//! A [`FormInspector`] checks fields from two [`Settings`] maps instead of
//! hand-written `validate` code:
//!
//! - `checks`: field key to rule list, or child name to nested checks;
//! - `requirements`: field key to `true`/`false`, or child name to nested
//!   requirements.
//!
//! Fields are checked first, in declaration order. Then every child receives
//! the settings nested under its name and is run with its slice of the data.
//!
//! ```rust,ignore
//! use nebula_inspector::prelude::*;
//! use serde_json::json;
//!
//! let mut address = FormInspector::new();
//! address.set_checks(Settings::new().rules("zip", ["numeric"]));
//!
//! let mut form = FormInspector::new();
//! form.add("address", address)
//!     .set_checks(Settings::new().rules("email", ["email"]))
//!     .set_requirements(
//!         Settings::new()
//!             .require("email")
//!             .nested("address", Settings::new().require("zip")),
//!     );
//!
//! form.run(&json!({ "email": "user@example.com", "address": {} }))?;
//! assert_eq!(form.messages_at("address.zip").count(), 1);
//! ```

use std::sync::LazyLock;

use indexmap::IndexSet;
use serde_json::{Map, Value};
use tracing::warn;

use super::{Inspect, InspectExt, Inspector, Setting, Settings};
use crate::error::{InspectorError, InspectorResult};

static NULL: Value = Value::Null;
static EMPTY_OBJECT: LazyLock<Value> = LazyLock::new(|| Value::Object(Map::new()));

/// A node configured with per-field rule lists and requirements.
#[derive(Debug, Default)]
pub struct FormInspector {
    inspector: Inspector,
    checks: Settings,
    requirements: Settings,
}

impl FormInspector {
    /// Creates a declarative node with no checks and no requirements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a declarative node around an existing node.
    pub fn with_inspector(inspector: Inspector) -> Self {
        Self {
            inspector,
            checks: Settings::new(),
            requirements: Settings::new(),
        }
    }

    /// The underlying node.
    pub fn inner(&self) -> &Inspector {
        &self.inspector
    }

    /// The underlying node, mutably.
    pub fn inner_mut(&mut self) -> &mut Inspector {
        &mut self.inspector
    }

    /// Deep-merges `checks` into the current checks.
    pub fn set_checks(&mut self, checks: Settings) -> &mut Self {
        self.checks.merge(checks);
        self
    }

    /// Deep-merges `requirements` into the current requirements.
    ///
    /// `false` under a child's name stops this node from passing any
    /// settings down to that child, leaving the child's own configuration
    /// as it is.
    pub fn set_requirements(&mut self, requirements: Settings) -> &mut Self {
        self.requirements.merge(requirements);
        self
    }

    /// The current checks.
    pub fn checks(&self) -> &Settings {
        &self.checks
    }

    /// The current requirements.
    pub fn requirements(&self) -> &Settings {
        &self.requirements
    }

    /// Registers `child` under `reference`, replacing any previous child.
    pub fn add(&mut self, reference: impl Into<String>, child: impl Inspect + 'static) -> &mut Self {
        self.inspector.add(reference, child);
        self
    }

    /// Checks the declared fields of `data`, then runs every child.
    ///
    /// This is the declarative `validate`; types that wrap a `FormInspector`
    /// call it from their own hook.
    ///
    /// # Errors
    ///
    /// Returns [`InspectorError::InvalidSetting`] for settings of the wrong
    /// shape, and any configuration error raised by checks or children.
    pub fn validate_fields(&mut self, data: &Value) -> InspectorResult<()> {
        self.check_fields(data)?;
        self.run_children(data)
    }

    fn check_fields(&mut self, data: &Value) -> InspectorResult<()> {
        let fields: IndexSet<&str> = self
            .checks
            .keys()
            .chain(self.requirements.keys())
            .filter(|field| !self.inspector.has_child(field))
            .collect();

        for field in fields {
            let rules: &[String] = match self.checks.get(field) {
                Some(Setting::Rules(rules)) => rules,
                Some(other) => {
                    return Err(InspectorError::invalid_setting(
                        field,
                        format!("expected a rule list, found a {}", other.kind()),
                    ));
                }
                None => &[],
            };

            let value = data.get(field).unwrap_or(&NULL);
            let required = self.requirements.get(field).is_some_and(Setting::is_enabled);
            if required {
                self.inspector.check(field, value, rules)?;
            } else {
                self.inspector.check_optional(field, value, rules)?;
            }
        }

        Ok(())
    }

    fn run_children(&mut self, data: &Value) -> InspectorResult<()> {
        for (name, child) in self.inspector.children_mut() {
            let requirement = self.requirements.get(name);

            if !matches!(requirement, Some(Setting::Flag(false))) {
                let requirements = match requirement {
                    Some(Setting::Nested(nested)) => Some(nested.clone()),
                    _ => None,
                };
                let checks = match self.checks.get(name) {
                    Some(Setting::Nested(nested)) => Some(nested.clone()),
                    Some(other) => {
                        return Err(InspectorError::invalid_setting(
                            name,
                            format!("expected nested checks for a child, found a {}", other.kind()),
                        ));
                    }
                    None => None,
                };

                if requirements.is_some() || checks.is_some() {
                    match child.form_mut() {
                        Some(form) => {
                            if let Some(requirements) = requirements {
                                form.set_requirements(requirements);
                            }
                            if let Some(checks) = checks {
                                form.set_checks(checks);
                            }
                        }
                        None => warn!(child = name, "child is not declarative, nested settings ignored"),
                    }
                }
            }

            let slice = match data.get(name) {
                Some(Value::Null) | None => &*EMPTY_OBJECT,
                Some(value) => value,
            };
            child.run(slice)?;
        }

        Ok(())
    }
}

impl Inspect for FormInspector {
    fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    fn inspector_mut(&mut self) -> &mut Inspector {
        &mut self.inspector
    }

    fn validate(&mut self, data: &Value) -> InspectorResult<()> {
        self.validate_fields(data)
    }

    fn form_mut(&mut self) -> Option<&mut FormInspector> {
        Some(self)
    }
}
