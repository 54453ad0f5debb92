//! Property-based tests for nebula-inspector.

use nebula_inspector::foundation::is_blank;
use nebula_inspector::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        ".{0,12}".prop_map(Value::String),
    ]
}

fn rule_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        names::ALPHA,
        names::ALNUM,
        names::NUMERIC,
        names::EMAIL,
        names::PHONE,
        names::LOWERCASE,
        names::URL,
    ])
}

// ============================================================================
// BLANK DUALITY: notBlank passes iff the value is not blank
// ============================================================================

proptest! {
    #[test]
    fn not_blank_is_negated_blank(value in scalar()) {
        let rule = BuiltinRules.create(names::NOT_BLANK).unwrap();
        prop_assert_eq!(rule.test(&value), !is_blank(&value));
    }

    #[test]
    fn optional_blank_never_logs(rules in prop::collection::vec(rule_name(), 0..4)) {
        let mut inspector = Inspector::new();
        for blank in [json!(null), json!(""), json!("  "), json!(false)] {
            prop_assert!(inspector.check_optional("field", &blank, &rules).unwrap());
        }
        prop_assert_eq!(inspector.count_messages(), 0);
    }

    #[test]
    fn required_blank_logs_exactly_once(rules in prop::collection::vec(rule_name(), 0..4)) {
        let mut inspector = Inspector::new();
        prop_assert!(!inspector.check("field", &json!(""), &rules).unwrap());
        prop_assert_eq!(inspector.count_messages(), 1);
    }
}

// ============================================================================
// MESSAGE ACCOUNTING: count == 0 iff messages are empty
// ============================================================================

proptest! {
    #[test]
    fn count_agrees_with_messages(
        fields in prop::collection::vec((rule_name(), scalar()), 0..6),
        child_fields in prop::collection::vec((rule_name(), scalar()), 0..6),
    ) {
        let mut child = FormInspector::new();
        for (index, (rule, _)) in child_fields.iter().enumerate() {
            child.set_checks(Settings::new().rules(format!("c{index}"), [*rule]));
        }

        let mut form = FormInspector::new();
        form.add("child", child);
        for (index, (rule, _)) in fields.iter().enumerate() {
            form.set_checks(Settings::new().rules(format!("f{index}"), [*rule]));
        }

        let mut data = serde_json::Map::new();
        for (index, (_, value)) in fields.iter().enumerate() {
            data.insert(format!("f{index}"), value.clone());
        }
        let mut child_data = serde_json::Map::new();
        for (index, (_, value)) in child_fields.iter().enumerate() {
            child_data.insert(format!("c{index}"), value.clone());
        }
        data.insert("child".to_owned(), Value::Object(child_data));

        form.run(&Value::Object(data)).unwrap();

        let count = form.count_messages();
        let messages = form.messages();
        prop_assert_eq!(count == 0, messages.is_empty());
        prop_assert_eq!(count, messages.count());
        prop_assert!(count <= fields.len() + child_fields.len());
    }

    #[test]
    fn clear_resets_count(keys in prop::collection::vec("[a-z]{1,8}", 0..8)) {
        let mut inspector = Inspector::new();
        for key in &keys {
            inspector.log(key.as_str(), "message").unwrap();
        }
        prop_assert_eq!(inspector.count_messages(), keys.len());

        inspector.clear();
        let defaults = InspectorConfig::default();
        prop_assert_eq!(inspector.count_messages(), 0);
        prop_assert_eq!(inspector.errors(), &defaults.default_errors);
    }

    #[test]
    fn run_is_repeatable(value in scalar(), rule in rule_name()) {
        let mut form = FormInspector::new();
        form.set_checks(Settings::new().rules("field", [rule]));
        let data = json!({ "field": value });

        form.run(&data).unwrap();
        let first = form.messages();
        form.run(&data).unwrap();
        prop_assert_eq!(form.messages(), first);
    }
}
