//! The base validation node

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::{Inspect, Messages};
use crate::config::InspectorConfig;
use crate::error::{InspectorError, InspectorResult};
use crate::foundation::{Rule, is_blank, json_type_name};
use crate::rules::{BuiltinRules, RuleBuilder, RuleFactory, names};

/// One node of the validation tree.
///
/// Holds the error catalog (rule name to message), the custom rule catalog,
/// the messages logged during the current run and the named children.
/// Children are owned and validated by the node's `validate` hook; messages
/// are pulled from them on demand.
pub struct Inspector {
    config: Arc<InspectorConfig>,
    factory: Arc<dyn RuleFactory>,
    errors: IndexMap<String, String>,
    rules: IndexMap<String, RuleBuilder>,
    messages: IndexMap<String, Vec<String>>,
    children: IndexMap<String, Box<dyn Inspect>>,
}

impl Inspector {
    /// Creates a node with the default messages and the built-in rules.
    pub fn new() -> Self {
        Self::with_config(InspectorConfig::default())
    }

    /// Creates a node with the given messages and the built-in rules.
    pub fn with_config(config: InspectorConfig) -> Self {
        let errors = config.default_errors.clone();
        Self {
            config: Arc::new(config),
            factory: Arc::new(BuiltinRules),
            errors,
            rules: IndexMap::new(),
            messages: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    /// Replaces the rule library used to resolve rule names.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_factory(mut self, factory: impl RuleFactory + 'static) -> Self {
        self.set_factory(Arc::new(factory));
        self
    }

    /// Replaces the rule library used to resolve rule names.
    pub fn set_factory(&mut self, factory: Arc<dyn RuleFactory>) -> &mut Self {
        self.factory = factory;
        self
    }

    /// The configuration this node resets to.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    // ========================================================================
    // CHILDREN
    // ========================================================================

    /// Registers `child` under `reference`, replacing any previous child.
    pub fn add(&mut self, reference: impl Into<String>, child: impl Inspect + 'static) -> &mut Self {
        self.add_boxed(reference, Box::new(child))
    }

    /// Registers a boxed child under `reference`, replacing any previous child.
    pub fn add_boxed(&mut self, reference: impl Into<String>, child: Box<dyn Inspect>) -> &mut Self {
        self.children.insert(reference.into(), child);
        self
    }

    /// Returns the child registered under `reference`.
    ///
    /// Meant for `validate` hooks delegating part of the data to a child.
    pub fn fetch(&mut self, reference: &str) -> InspectorResult<&mut (dyn Inspect + 'static)> {
        self.children
            .get_mut(reference)
            .map(|child| &mut **child)
            .ok_or_else(|| InspectorError::invalid_reference(reference))
    }

    /// Returns the child registered under `reference`, if any.
    pub fn child(&self, reference: &str) -> Option<&(dyn Inspect + 'static)> {
        self.children.get(reference).map(|child| &**child)
    }

    /// Returns `true` if a child is registered under `reference`.
    pub fn has_child(&self, reference: &str) -> bool {
        self.children.contains_key(reference)
    }

    /// Iterates over children in registration order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &(dyn Inspect + 'static))> {
        self.children
            .iter()
            .map(|(reference, child)| (reference.as_str(), &**child))
    }

    pub(crate) fn children_mut(
        &mut self,
    ) -> impl Iterator<Item = (&str, &mut (dyn Inspect + 'static))> {
        self.children
            .iter_mut()
            .map(|(reference, child)| (reference.as_str(), &mut **child))
    }

    // ========================================================================
    // RULES
    // ========================================================================

    /// Registers a custom rule and its message, returning the rule's builder.
    ///
    /// Defining a name again replaces both the rule and the message. Custom
    /// rules take precedence over the rule library and are dropped by
    /// [`clear`](Self::clear), so define them from a `setup` hook.
    pub fn define(&mut self, name: impl Into<String>, message: impl Into<String>) -> &mut RuleBuilder {
        let name = name.into();
        let replaced = self.rules.contains_key(&name);
        debug!(rule = %name, replaced, "custom rule defined");

        self.errors.insert(name.clone(), message.into());
        let builder = RuleBuilder::with_factory(Arc::clone(&self.factory));
        let (index, _) = self.rules.insert_full(name, builder);
        &mut self.rules[index]
    }

    /// Returns the message logged when `rule` is violated.
    pub fn error_for(&self, rule: &str) -> Option<&str> {
        self.errors.get(rule).map(String::as_str)
    }

    /// The error catalog, in definition order.
    pub fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    /// Returns `true` if a custom rule is registered under `name`.
    pub fn is_defined(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    // ========================================================================
    // CHECKS
    // ========================================================================

    /// Checks a required field.
    ///
    /// `notBlank` is evaluated first. If it fails, its message is logged and
    /// nothing else is checked; otherwise every rule is evaluated and each
    /// violated rule logs its message under `key`, in list order.
    ///
    /// # Errors
    ///
    /// Returns [`InspectorError::UnsupportedRule`] if a rule name has no
    /// message or no rule behind it.
    pub fn check<S: AsRef<str>>(&mut self, key: &str, value: &Value, rules: &[S]) -> InspectorResult<bool> {
        self.check_with(key, value, rules, false)
    }

    /// Checks an optional field.
    ///
    /// A blank value passes without evaluating anything, unless `rules` names
    /// `notBlank` explicitly; in that case the field is checked as required.
    pub fn check_optional<S: AsRef<str>>(
        &mut self,
        key: &str,
        value: &Value,
        rules: &[S],
    ) -> InspectorResult<bool> {
        self.check_with(key, value, rules, true)
    }

    fn check_with<S: AsRef<str>>(
        &mut self,
        key: &str,
        value: &Value,
        rules: &[S],
        optional: bool,
    ) -> InspectorResult<bool> {
        self.ensure_not_child(key)?;

        let required = !optional || rules.iter().any(|rule| rule.as_ref() == names::NOT_BLANK);

        let mut plan: SmallVec<[&str; 8]> = SmallVec::new();
        if required {
            plan.push(names::NOT_BLANK);
        }
        for rule in rules {
            let name = rule.as_ref();
            if !plan.contains(&name) {
                plan.push(name);
            }
        }

        // Unknown names are setup mistakes whatever the value is.
        for name in &plan {
            let resolvable = self.rules.contains_key(*name) || self.factory.supports(name);
            if !self.errors.contains_key(*name) || !resolvable {
                return Err(InspectorError::unsupported_rule(*name));
            }
        }

        if !required && is_blank(value) {
            return Ok(true);
        }

        let mut violated: SmallVec<[&str; 4]> = SmallVec::new();
        for name in plan {
            let passed = match self.rules.get(name) {
                Some(custom) => custom.test(value),
                None => self
                    .factory
                    .create(name)
                    .ok_or_else(|| InspectorError::unsupported_rule(name))?
                    .test(value),
            };

            if !passed {
                trace!(key, rule = name, value_type = json_type_name(value), "rule violated");
                violated.push(name);
                if name == names::NOT_BLANK {
                    break;
                }
            }
        }

        for name in &violated {
            if let Some(message) = self.errors.get(*name) {
                self.messages
                    .entry(key.to_owned())
                    .or_default()
                    .push(message.clone());
            }
        }

        Ok(violated.is_empty())
    }

    // ========================================================================
    // MESSAGES
    // ========================================================================

    /// Appends `message` to the log for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`InspectorError::KeyShadowsChild`] if `key` is the name of a
    /// registered child; its messages live under that name in the tree.
    pub fn log(
        &mut self,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> InspectorResult<&mut Self> {
        let key = key.into();
        self.ensure_not_child(&key)?;
        self.messages.entry(key).or_default().push(message.into());
        Ok(self)
    }

    fn ensure_not_child(&self, key: &str) -> InspectorResult<()> {
        if self.children.contains_key(key) {
            return Err(InspectorError::key_shadows_child(key));
        }
        Ok(())
    }

    /// Number of messages logged on this node and on every child.
    pub fn count_messages(&self) -> usize {
        let own: usize = self.messages.values().map(Vec::len).sum();
        let children: usize = self
            .children
            .values()
            .map(|child| child.inspector().count_messages())
            .sum();
        own + children
    }

    /// The message tree of this node.
    ///
    /// Field keys map to their message lists; children with at least one
    /// message map to their own trees. Children without messages are omitted.
    /// A child added under a key that already holds messages replaces that
    /// key's list until the next run clears it.
    pub fn messages(&self) -> Messages {
        let mut tree: IndexMap<String, Messages> = self
            .messages
            .iter()
            .map(|(key, list)| (key.clone(), Messages::List(list.clone())))
            .collect();

        for (reference, child) in &self.children {
            let messages = child.inspector().messages();
            if !messages.is_empty() && tree.insert(reference.clone(), messages).is_some() {
                warn!(
                    child = %reference,
                    "child messages replace a field list of the same name"
                );
            }
        }

        Messages::Tree(tree)
    }

    /// The messages at a field key or dotted path.
    ///
    /// A key logged on this node wins over a child of the same name;
    /// otherwise leading segments name children and the last one a field key
    /// of the innermost child. Unresolved paths yield an empty tree.
    pub fn messages_at(&self, path: &str) -> Messages {
        self.messages().at(path)
    }

    /// Resets messages, custom rules and the error catalog to the configured
    /// defaults. Children are left untouched.
    pub fn clear(&mut self) -> &mut Self {
        self.messages.clear();
        self.rules.clear();
        self.errors.clone_from(&self.config.default_errors);
        self
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Inspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspector")
            .field("factory", &self.factory)
            .field("errors", &self.errors.len())
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .field("messages", &self.messages)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Inspect for Inspector {
    fn inspector(&self) -> &Inspector {
        self
    }

    fn inspector_mut(&mut self) -> &mut Inspector {
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::InspectExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_required_check_on_blank_logs_once() {
        let mut inspector = Inspector::new();
        let passed = inspector.check("name", &json!(""), &["alpha", "lowercase"]).unwrap();

        assert!(!passed);
        assert_eq!(
            inspector.messages_at("name"),
            Messages::List(vec!["This field cannot be left blank".into()])
        );
    }

    #[test]
    fn test_optional_check_on_blank_passes_silently() {
        let mut inspector = Inspector::new();
        assert!(inspector.check_optional("phone", &json!(null), &["phone"]).unwrap());
        assert!(inspector.check_optional("phone", &json!("  "), &["phone"]).unwrap());
        assert_eq!(inspector.count_messages(), 0);
    }

    #[test]
    fn test_explicit_not_blank_makes_optional_required() {
        let mut inspector = Inspector::new();
        let passed = inspector
            .check_optional("name", &json!(""), &["alpha", "notBlank"])
            .unwrap();
        assert!(!passed);
        assert_eq!(inspector.count_messages(), 1);
    }

    #[test]
    fn test_every_violated_format_rule_is_logged_in_order() {
        let mut inspector = Inspector::new();
        let passed = inspector
            .check_optional("name", &json!("Alpha 1"), &["alpha", "lowercase"])
            .unwrap();

        assert!(!passed);
        assert_eq!(
            inspector.messages_at("name"),
            Messages::List(vec![
                "This field should contain only letters".into(),
                "This field should not contain capital letters".into(),
            ])
        );
    }

    #[test]
    fn test_duplicate_rules_are_evaluated_once() {
        let mut inspector = Inspector::new();
        inspector.check("name", &json!("1"), &["alpha", "alpha", "notBlank"]).unwrap();
        assert_eq!(inspector.count_messages(), 1);
    }

    #[test]
    fn test_unknown_rule_is_configuration_error() {
        let mut inspector = Inspector::new();
        let err = inspector.check_optional("x", &json!(null), &["shouting"]).unwrap_err();
        assert!(matches!(err, InspectorError::UnsupportedRule { ref rule } if rule == "shouting"));
        assert_eq!(inspector.count_messages(), 0);
    }

    #[test]
    fn test_custom_rule_takes_precedence() {
        let mut inspector = Inspector::new();
        inspector.define("email", "Company addresses only").custom(|v| {
            v.as_str().is_some_and(|s| s.ends_with("@example.com"))
        });

        assert!(inspector.check("email", &json!("me@example.com"), &["email"]).unwrap());
        assert!(!inspector.check("email", &json!("me@other.org"), &["email"]).unwrap());
        assert_eq!(
            inspector.messages_at("email"),
            Messages::List(vec!["Company addresses only".into()])
        );
    }

    #[test]
    fn test_define_replaces_previous_definition() {
        let mut inspector = Inspector::new();
        inspector.define("even", "first").custom(|_| false);
        inspector.define("even", "Must be even").custom(|v| v.as_i64().is_some_and(|n| n % 2 == 0));

        assert!(inspector.check("n", &json!(2), &["even"]).unwrap());
        assert!(!inspector.check("n", &json!(3), &["even"]).unwrap());
        assert_eq!(inspector.error_for("even"), Some("Must be even"));
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut inspector = Inspector::new();
        inspector.define("even", "Must be even");
        inspector.log("x", "message").unwrap();
        inspector.clear();

        assert_eq!(inspector.count_messages(), 0);
        assert!(!inspector.is_defined("even"));
        assert_eq!(inspector.errors(), &InspectorConfig::default().default_errors);
    }

    #[test]
    fn test_fetch_unknown_child_is_error() {
        let mut inspector = Inspector::new();
        let err = inspector.fetch("address").map(|_| ()).unwrap_err();
        assert!(matches!(err, InspectorError::InvalidReference { .. }));
    }

    #[test]
    fn test_messages_include_only_children_with_messages() {
        let quiet = Inspector::new();
        let mut noisy = Inspector::new();
        noisy.log("zip", "bad zip").unwrap();

        let mut root = Inspector::new();
        root.log("name", "bad name").unwrap();
        root.add("quiet", quiet).add("noisy", noisy);

        let expected: Messages = serde_json::from_value(json!({
            "name": ["bad name"],
            "noisy": { "zip": ["bad zip"] }
        }))
        .unwrap();
        assert_eq!(root.messages(), expected);
        assert_eq!(root.count_messages(), 2);
        assert_eq!(root.messages_at("noisy.zip").count(), 1);
        assert!(root.messages_at("quiet").is_empty());
    }

    #[test]
    fn test_key_naming_a_child_is_rejected() {
        let mut child = Inspector::new();
        child.log("zip", "bad zip").unwrap();

        let mut root = Inspector::new();
        root.add("address", child);

        let err = root.log("address", "address is wrong").unwrap_err();
        assert!(matches!(err, InspectorError::KeyShadowsChild { ref key } if key == "address"));

        let err = root.check("address", &json!(""), &["alpha"]).unwrap_err();
        assert!(matches!(err, InspectorError::KeyShadowsChild { .. }));

        assert_eq!(root.count_messages(), 1);
        assert_eq!(root.messages().count(), root.count_messages());
        assert_eq!(root.messages_at("address.zip").count(), 1);
    }

    #[test]
    fn test_run_clears_previous_messages() {
        let mut inspector = Inspector::new();
        inspector.log("x", "stale").unwrap();
        inspector.run(&json!({})).unwrap();
        assert_eq!(inspector.count_messages(), 0);
    }
}
