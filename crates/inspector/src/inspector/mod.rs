//! The validation tree
//!
//! An [`Inspector`] is one node of the tree: it owns an error catalog, the
//! custom rules registered with [`Inspector::define`], the messages logged
//! during the current run, and its named children. Application types wrap an
//! `Inspector` and implement [`Inspect`] to supply `setup`/`validate` hooks;
//! [`FormInspector`] is the declarative variant configured with [`Settings`].
//!
//! # Lifecycle
//!
//! Every [`run`](InspectExt::run) goes through the same steps:
//!
//! ```text
//! clear ──► setup(data) ──► validate(data) ──► count ──► Ok(self) | Err(Validation)
//! ```
//!
//! Children are run from the parent's `validate`, depth first, so messages
//! aggregate bottom-up and are addressed by dotted paths
//! (`"person.firstName"`).
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_inspector::prelude::*;
//! use serde_json::{Value, json};
//!
//! struct Signup {
//!     inspector: Inspector,
//! }
//!
//! impl Inspect for Signup {
//!     fn inspector(&self) -> &Inspector { &self.inspector }
//!     fn inspector_mut(&mut self) -> &mut Inspector { &mut self.inspector }
//!
//!     fn validate(&mut self, data: &Value) -> InspectorResult<()> {
//!         self.inspector.check("email", &data["email"], &["email"])?;
//!         self.inspector.check_optional("phone", &data["phone"], &["phone"])?;
//!         Ok(())
//!     }
//! }
//!
//! let mut signup = Signup { inspector: Inspector::new() };
//! signup.run(&json!({ "email": "bad" }))?;
//! assert_eq!(signup.count_messages(), 1);
//! ```

mod form;
mod lifecycle;
mod messages;
mod node;
mod settings;

pub use form::FormInspector;
pub use lifecycle::{Inspect, InspectExt};
pub use messages::Messages;
pub use node::Inspector;
pub use settings::{Setting, Settings};
