//! Foundation types shared by the rule library and the inspector tree
//!
//! - **Traits**: [`Rule`], the opaque predicate every check resolves to
//! - **Adapters**: [`FnRule`] for closures
//! - **Value helpers**: [`is_blank`], [`as_text`], [`json_type_name`]
//!
//! # Architecture
//!
//! The inspector never looks inside a rule. A rule is anything that answers
//! `test(value) -> bool` for a [`serde_json::Value`]; the engine only cares
//! about its identity (the name it was registered or created under) and the
//! message associated with that name.
//!
//! ```rust,ignore
//! use nebula_inspector::foundation::{Rule, rule_fn};
//! use serde_json::json;
//!
//! let even = rule_fn(|v| v.as_i64().is_some_and(|n| n % 2 == 0));
//! assert!(even.test(&json!(4)));
//! assert!(!even.test(&json!("four")));
//! ```

pub mod rule;
pub mod value;

pub use rule::{FnRule, Rule, rule_fn};
pub use value::{as_number, as_text, is_blank, json_type_name};
