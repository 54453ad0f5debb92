//! Content-format rules: e-mail, URL and phone numbers.

use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap()
});

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Passes for text that looks like an e-mail address.
    pub Email for text;
    test(input) { EMAIL_REGEX.is_match(input) }
    fn email();
}

// ============================================================================
// URL
// ============================================================================

crate::rule! {
    /// Passes for `http://` and `https://` URLs.
    pub Url for text;
    test(input) { URL_REGEX.is_match(input) }
    fn url();
}

// ============================================================================
// PHONE
// ============================================================================

/// Passes for phone numbers in common written formats.
///
/// Allows digits, spaces, dashes, dots, balanced parentheses and a single
/// leading `+`, and requires between `min_digits` and `max_digits` digits.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_inspector::rules::phone;
/// use nebula_inspector::foundation::Rule;
/// use serde_json::json;
///
/// assert!(phone().test(&json!("212-555-3822")));
/// assert!(phone().test(&json!("+1 (415) 555-1234")));
/// assert!(!phone().test(&json!("3822")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phone {
    min_digits: u8,
    max_digits: u8,
}

impl Phone {
    /// Creates a phone rule accepting 7 to 15 digits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_digits: 7,
            max_digits: 15,
        }
    }

    /// Sets the minimum number of digits required.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min_digits(mut self, min: u8) -> Self {
        self.min_digits = min;
        self
    }

    /// Sets the maximum number of digits allowed.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_digits(mut self, max: u8) -> Self {
        self.max_digits = max;
        self
    }

    fn accepts(&self, input: &str) -> bool {
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.');
        if !input.chars().all(allowed) {
            return false;
        }

        // Plus sign can only appear at the start
        if input.rfind('+').is_some_and(|pos| pos != 0) {
            return false;
        }

        let mut depth = 0usize;
        for c in input.chars() {
            match c {
                '(' => depth += 1,
                ')' => match depth.checked_sub(1) {
                    Some(next) => depth = next,
                    None => return false,
                },
                _ => {}
            }
        }
        if depth != 0 {
            return false;
        }

        let digits = input.chars().filter(char::is_ascii_digit).count();
        digits >= usize::from(self.min_digits) && digits <= usize::from(self.max_digits)
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::foundation::Rule for Phone {
    fn test(&self, value: &serde_json::Value) -> bool {
        crate::foundation::as_text(value).is_some_and(|text| self.accepts(&text))
    }
}

/// Creates a phone rule with the default digit bounds.
#[must_use]
pub const fn phone() -> Phone {
    Phone::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use serde_json::json;

    #[test]
    fn test_email() {
        let rule = email();
        assert!(rule.test(&json!("user@example.com")));
        assert!(!rule.test(&json!("user_example.com")));
        assert!(!rule.test(&json!("@example.com")));
        assert!(!rule.test(&json!("user@")));
        assert!(!rule.test(&json!(null)));
    }

    #[test]
    fn test_url() {
        let rule = url();
        assert!(rule.test(&json!("http://example.com")));
        assert!(rule.test(&json!("https://example.com/path")));
        assert!(!rule.test(&json!("example.com")));
        assert!(!rule.test(&json!("ftp://example.com")));
    }

    #[test]
    fn test_phone() {
        let rule = phone();
        assert!(rule.test(&json!("212-555-3822")));
        assert!(rule.test(&json!("(212) 555.3822")));
        assert!(rule.test(&json!("+44 20 7123 4567")));
        assert!(rule.test(&json!(2_125_553_822_u64)));
        assert!(!rule.test(&json!("3822")));
        assert!(!rule.test(&json!("212-555-38x2")));
        assert!(!rule.test(&json!("212+555-3822")));
        assert!(!rule.test(&json!("(212 555-3822")));
        assert!(!rule.test(&json!(")212( 555-3822")));
    }

    #[test]
    fn test_phone_digit_bounds() {
        let rule = Phone::new().min_digits(4).max_digits(6);
        assert!(rule.test(&json!("3822")));
        assert!(!rule.test(&json!("212-555-3822")));
    }
}
