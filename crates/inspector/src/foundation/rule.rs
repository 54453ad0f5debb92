//! The rule capability
//!
//! This module defines the trait every validation predicate implements,
//! whether it comes from the built-in library, a [`RuleBuilder`] chain, or a
//! plain closure.
//!
//! [`RuleBuilder`]: crate::rules::RuleBuilder

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A named, reusable validation predicate.
///
/// Rules are object safe so that catalogs can hold them as `Box<dyn Rule>`.
/// They must be pure: the inspector may create and test a rule any number of
/// times during a run and expects the same answer for the same value.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_inspector::foundation::Rule;
/// use serde_json::Value;
///
/// #[derive(Debug)]
/// struct Positive;
///
/// impl Rule for Positive {
///     fn test(&self, value: &Value) -> bool {
///         value.as_f64().is_some_and(|n| n > 0.0)
///     }
/// }
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// Returns `true` if `value` satisfies the rule.
    fn test(&self, value: &Value) -> bool;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    #[inline]
    fn test(&self, value: &Value) -> bool {
        (**self).test(value)
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    #[inline]
    fn test(&self, value: &Value) -> bool {
        (**self).test(value)
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    #[inline]
    fn test(&self, value: &Value) -> bool {
        (**self).test(value)
    }
}

// ============================================================================
// CLOSURE ADAPTER
// ============================================================================

/// Adapts a closure into a [`Rule`].
#[derive(Clone)]
pub struct FnRule<F> {
    predicate: F,
}

impl<F> FnRule<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    /// Wraps `predicate`.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

// Manual Debug: closures are opaque.
impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("predicate", &"<function>")
            .finish()
    }
}

/// Creates a rule from a closure.
pub fn rule_fn<F>(predicate: F) -> FnRule<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    FnRule::new(predicate)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct AlwaysPasses;

    impl Rule for AlwaysPasses {
        fn test(&self, _value: &Value) -> bool {
            true
        }
    }

    #[test]
    fn test_boxed_rule_delegates() {
        let rule: Box<dyn Rule> = Box::new(AlwaysPasses);
        assert!(rule.test(&json!(null)));
    }

    #[test]
    fn test_fn_rule() {
        let rule = rule_fn(|v| v.as_str() == Some("yes"));
        assert!(rule.test(&json!("yes")));
        assert!(!rule.test(&json!("no")));
    }

    #[test]
    fn test_fn_rule_debug_hides_closure() {
        let rule = rule_fn(|_| true);
        assert_eq!(format!("{rule:?}"), r#"FnRule { predicate: "<function>" }"#);
    }
}
