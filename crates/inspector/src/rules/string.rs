//! String rules
//!
//! Character-class rules over the textual form of a value.

use crate::foundation::{as_number, is_blank};

crate::rule! {
    /// Passes for text made of letters and whitespace only.
    pub Alpha for text;
    test(input) { input.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) }
    fn alpha();
}

crate::rule! {
    /// Passes for text made of letters, digits and whitespace only.
    pub Alnum for text;
    test(input) { input.chars().all(|c| c.is_alphanumeric() || c.is_whitespace()) }
    fn alnum();
}

crate::rule! {
    /// Passes for text with no uppercase letters.
    pub Lowercase for text;
    test(input) { input.chars().all(|c| !c.is_alphabetic() || c.is_lowercase()) }
    fn lowercase();
}

crate::rule! {
    /// Passes for numbers and for text that parses as a finite decimal.
    pub Numeric;
    test(value) { as_number(value).is_some() }
    fn numeric();
}

crate::rule! {
    /// Passes for any value that is not blank.
    ///
    /// This is the required rule: non-optional checks always evaluate it first.
    pub NotBlank;
    test(value) { !is_blank(value) }
    fn not_blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(json!("AlphaValue"), true)]
    #[case(json!("Alpha Value"), true)]
    #[case(json!("Alpha Value 1"), false)]
    #[case(json!("Ünïcödé"), true)]
    #[case(json!(12), false)]
    #[case(json!(null), false)]
    fn test_alpha(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(alpha().test(&value), expected);
    }

    #[rstest]
    #[case(json!("abc 123"), true)]
    #[case(json!(123), true)]
    #[case(json!("abc_123"), false)]
    #[case(json!("abc-123"), false)]
    fn test_alnum(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(alnum().test(&value), expected);
    }

    #[rstest]
    #[case(json!("lowercase"), true)]
    #[case(json!("lower case 42"), true)]
    #[case(json!("LowerCase"), false)]
    fn test_lowercase(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(lowercase().test(&value), expected);
    }

    #[rstest]
    #[case(json!(3), true)]
    #[case(json!(-1.5), true)]
    #[case(json!("123.45"), true)]
    #[case(json!("1e3"), true)]
    #[case(json!("12a"), false)]
    #[case(json!("inf"), false)]
    #[case(json!(true), false)]
    fn test_numeric(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(numeric().test(&value), expected);
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank().test(&json!("Non-blank value")));
        assert!(not_blank().test(&json!(7)));
        assert!(!not_blank().test(&json!(0)));
        assert!(!not_blank().test(&json!("0")));
        assert!(!not_blank().test(&json!("")));
        assert!(!not_blank().test(&json!(null)));
    }
}
