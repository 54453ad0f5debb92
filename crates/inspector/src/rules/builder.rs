//! Fluent rule chains
//!
//! [`RuleBuilder`] is what [`Inspector::define`] hands back: an all-of chain
//! of rules that is itself a [`Rule`]. Each method appends a rule and returns
//! the builder for chaining.
//!
//! ```rust,ignore
//! use nebula_inspector::prelude::*;
//!
//! let mut inspector = Inspector::new();
//! inspector
//!     .define("username", "Pick a username of 3 to 16 letters")
//!     .rule("alpha")?
//!     .length(Some(3), Some(16));
//! ```
//!
//! [`Inspector::define`]: crate::inspector::Inspector::define

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use super::{BuiltinRules, RuleFactory};
use crate::error::{InspectorError, InspectorResult};
use crate::foundation::{FnRule, Rule, as_number, as_text};

// ============================================================================
// PARAMETERISED RULES
// ============================================================================

/// Inverts another rule.
#[derive(Debug)]
pub struct Not {
    inner: Box<dyn Rule>,
}

impl Not {
    /// Wraps `rule`.
    pub fn new(rule: impl Rule + 'static) -> Self {
        Self {
            inner: Box::new(rule),
        }
    }
}

impl Rule for Not {
    fn test(&self, value: &Value) -> bool {
        !self.inner.test(value)
    }
}

/// Passes for text matching a regular expression.
#[derive(Debug, Clone)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`InspectorError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> InspectorResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| InspectorError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Returns the source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Rule for Matches {
    fn test(&self, value: &Value) -> bool {
        as_text(value).is_some_and(|text| self.regex.is_match(&text))
    }
}

/// Bounds the length of text (in characters), arrays or objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
}

impl Length {
    /// Creates a length rule; `None` leaves that side unbounded.
    pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl Rule for Length {
    fn test(&self, value: &Value) -> bool {
        let len = match value {
            Value::String(text) => text.chars().count(),
            Value::Array(items) => items.len(),
            Value::Object(fields) => fields.len(),
            _ => return false,
        };
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }
}

/// Passes for numbers (or numeric text) within an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Between {
    min: f64,
    max: f64,
}

impl Between {
    /// Creates an inclusive range rule.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Rule for Between {
    fn test(&self, value: &Value) -> bool {
        as_number(value).is_some_and(|number| (self.min..=self.max).contains(&number))
    }
}

/// Passes for values equal to one of a fixed set.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    allowed: Vec<Value>,
}

impl OneOf {
    /// Creates the rule from the allowed values.
    pub fn new<I, V>(allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Rule for OneOf {
    fn test(&self, value: &Value) -> bool {
        self.allowed.contains(value)
    }
}

/// Passes for values equal to an expected value.
#[derive(Debug, Clone, PartialEq)]
pub struct Equals {
    expected: Value,
}

impl Equals {
    /// Creates the rule.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Rule for Equals {
    fn test(&self, value: &Value) -> bool {
        *value == self.expected
    }
}

// ============================================================================
// RULE BUILDER
// ============================================================================

/// An all-of chain of rules. An empty chain passes every value.
pub struct RuleBuilder {
    rules: Vec<Box<dyn Rule>>,
    factory: Arc<dyn RuleFactory>,
}

impl RuleBuilder {
    /// Creates an empty chain resolving names through [`BuiltinRules`].
    pub fn new() -> Self {
        Self::with_factory(Arc::new(BuiltinRules))
    }

    /// Creates an empty chain resolving names through `factory`.
    pub fn with_factory(factory: Arc<dyn RuleFactory>) -> Self {
        Self {
            rules: Vec::new(),
            factory,
        }
    }

    /// Appends a rule.
    pub fn with(&mut self, rule: impl Rule + 'static) -> &mut Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a boxed rule.
    pub fn with_boxed(&mut self, rule: Box<dyn Rule>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Appends the inverse of `rule`.
    pub fn not(&mut self, rule: impl Rule + 'static) -> &mut Self {
        self.with(Not::new(rule))
    }

    /// Appends a named rule from the factory.
    ///
    /// # Errors
    ///
    /// Returns [`InspectorError::UnsupportedRule`] if the factory does not
    /// know `name`.
    pub fn rule(&mut self, name: &str) -> InspectorResult<&mut Self> {
        let rule = self
            .factory
            .create(name)
            .ok_or_else(|| InspectorError::unsupported_rule(name))?;
        Ok(self.with_boxed(rule))
    }

    /// Appends a regular expression match.
    ///
    /// # Errors
    ///
    /// Returns [`InspectorError::InvalidPattern`] if `pattern` does not compile.
    pub fn matches(&mut self, pattern: &str) -> InspectorResult<&mut Self> {
        let rule = Matches::new(pattern)?;
        Ok(self.with(rule))
    }

    /// Appends a length bound.
    pub fn length(&mut self, min: Option<usize>, max: Option<usize>) -> &mut Self {
        self.with(Length::new(min, max))
    }

    /// Appends an inclusive numeric range.
    pub fn between(&mut self, min: f64, max: f64) -> &mut Self {
        self.with(Between::new(min, max))
    }

    /// Appends a fixed set of allowed values.
    pub fn one_of<I, V>(&mut self, allowed: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.with(OneOf::new(allowed))
    }

    /// Appends an equality check.
    pub fn equals(&mut self, expected: impl Into<Value>) -> &mut Self {
        self.with(Equals::new(expected))
    }

    /// Appends a closure.
    pub fn custom<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.with(FnRule::new(predicate))
    }

    /// Returns the number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for RuleBuilder {
    fn test(&self, value: &Value) -> bool {
        self.rules.iter().all(|rule| rule.test(value))
    }
}

impl fmt::Debug for RuleBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBuilder")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::alpha;
    use serde_json::json;

    #[test]
    fn test_empty_builder_passes() {
        let builder = RuleBuilder::new();
        assert!(builder.is_empty());
        assert!(builder.test(&json!(null)));
    }

    #[test]
    fn test_chain_is_all_of() {
        let mut builder = RuleBuilder::new();
        builder.with(alpha()).length(Some(3), Some(5));
        assert_eq!(builder.len(), 2);
        assert!(builder.test(&json!("abcd")));
        assert!(!builder.test(&json!("ab")));
        assert!(!builder.test(&json!("abc1")));
    }

    #[test]
    fn test_named_rule() {
        let mut builder = RuleBuilder::new();
        builder.rule("email").unwrap();
        assert!(builder.test(&json!("user@example.com")));
        assert!(!builder.test(&json!("nope")));
    }

    #[test]
    fn test_unknown_named_rule_is_error() {
        let mut builder = RuleBuilder::new();
        let err = builder.rule("shouting").unwrap_err();
        assert!(matches!(err, InspectorError::UnsupportedRule { .. }));
    }

    #[test]
    fn test_matches() {
        let mut builder = RuleBuilder::new();
        builder.matches(r"^\d{5}$").unwrap();
        assert!(builder.test(&json!("12345")));
        assert!(builder.test(&json!(12345)));
        assert!(!builder.test(&json!("1234")));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let mut builder = RuleBuilder::new();
        let err = builder.matches("(unclosed").unwrap_err();
        assert!(matches!(err, InspectorError::InvalidPattern { .. }));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_not() {
        let mut builder = RuleBuilder::new();
        builder.not(alpha());
        assert!(builder.test(&json!("abc1")));
        assert!(!builder.test(&json!("abc")));
    }

    #[test]
    fn test_length_bounds() {
        assert!(Length::new(None, Some(2)).test(&json!([1, 2])));
        assert!(!Length::new(Some(3), None).test(&json!({"a": 1})));
        assert!(Length::new(Some(2), Some(2)).test(&json!("üö")));
        assert!(!Length::new(None, None).test(&json!(7)));
    }

    #[test]
    fn test_between() {
        let rule = Between::new(1.0, 10.0);
        assert!(rule.test(&json!(1)));
        assert!(rule.test(&json!("10")));
        assert!(!rule.test(&json!(10.5)));
        assert!(!rule.test(&json!("ten")));
    }

    #[test]
    fn test_one_of_and_equals() {
        let mut builder = RuleBuilder::new();
        builder.one_of(["red", "green"]);
        assert!(builder.test(&json!("red")));
        assert!(!builder.test(&json!("blue")));

        assert!(Equals::new(42).test(&json!(42)));
        assert!(!Equals::new(42).test(&json!("42")));
    }

    #[test]
    fn test_custom_closure() {
        let mut builder = RuleBuilder::new();
        builder.custom(|v| v.as_i64().is_some_and(|n| n % 2 == 0));
        assert!(builder.test(&json!(4)));
        assert!(!builder.test(&json!(3)));
    }
}
