//! # nebula-inspector
//!
//! Hierarchical rule and message inspection for nested form input.
//!
//! An inspector tree mirrors the shape of the data it checks: every node owns
//! a catalog of named rules with their messages, logs the messages of the
//! rules a field violates, and delegates sub-objects to named children.
//! Messages aggregate bottom-up and are addressed by dotted paths.
//!
//! ## Modules
//!
//! - [`foundation`]: the [`Rule`](foundation::Rule) capability and value helpers
//! - [`rules`]: the built-in rule library and [`RuleBuilder`](rules::RuleBuilder)
//! - [`inspector`]: the tree ([`Inspector`](inspector::Inspector),
//!   [`FormInspector`](inspector::FormInspector)) and its run lifecycle
//! - [`config`]: default messages
//! - [`error`]: configuration errors and validation failures
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use nebula_inspector::prelude::*;
//! use serde_json::json;
//!
//! let mut form = FormInspector::new();
//! form.set_checks(Settings::from_value(json!({
//!     "email": ["email"],
//!     "phone": ["phone"],
//! }))?)
//! .set_requirements(Settings::new().require("email"));
//!
//! match form.run_strict(&json!({ "email": "bad", "phone": "3822" })) {
//!     Ok(_) => println!("valid"),
//!     Err(InspectorError::Validation(failure)) => {
//!         println!("{}", failure.message());
//!         println!("{:?}", failure.messages_at("email"));
//!     }
//!     Err(other) => return Err(other),
//! }
//! ```

pub mod config;
pub mod error;
pub mod foundation;
pub mod inspector;
mod macros;
pub mod prelude;
pub mod rules;

pub use config::InspectorConfig;
pub use error::{InspectorError, InspectorResult, ValidationFailure};
pub use inspector::{FormInspector, Inspect, InspectExt, Inspector, Messages, Setting, Settings};
