//! Built-in rule library
//!
//! The inspector treats rules as opaque predicates produced by a
//! [`RuleFactory`]. This module ships the default factory, [`BuiltinRules`],
//! together with the fluent [`RuleBuilder`] returned by
//! [`Inspector::define`](crate::inspector::Inspector::define).
//!
//! # Vocabulary
//!
//! | name          | passes when                                              |
//! |---------------|----------------------------------------------------------|
//! | `alpha`       | letters and whitespace only                              |
//! | `alnum`       | letters, digits and whitespace only                      |
//! | `boolVal`     | a boolean or a common boolean spelling                   |
//! | `numeric`     | a number or numeric text                                 |
//! | `date`        | a calendar date or RFC 3339 timestamp                    |
//! | `email`       | an e-mail address                                        |
//! | `phone`       | a phone number with 7 to 15 digits                       |
//! | `lowercase`   | no uppercase letters                                     |
//! | `notBlank`    | not blank (see [`is_blank`](crate::foundation::is_blank)) |
//! | `countryCode` | an ISO 3166-1 alpha-2 country code                       |
//! | `creditCard`  | a card number passing the Luhn checksum                  |
//! | `url`         | an `http://` or `https://` URL                           |

pub mod boolean;
pub mod builder;
pub mod content;
pub mod finance;
pub mod string;
pub mod temporal;

use std::fmt;

use crate::foundation::Rule;

pub use boolean::{BoolVal, bool_val};
pub use builder::{Between, Equals, Length, Matches, Not, OneOf, RuleBuilder};
pub use content::{Email, Phone, Url, email, phone, url};
pub use finance::{CountryCode, CreditCard, country_code, credit_card};
pub use string::{Alnum, Alpha, Lowercase, NotBlank, Numeric, alnum, alpha, lowercase, not_blank, numeric};
pub use temporal::{Date, date};

// ============================================================================
// RULE NAMES
// ============================================================================

/// Names of the built-in rules.
pub mod names {
    pub const ALPHA: &str = "alpha";
    pub const ALNUM: &str = "alnum";
    pub const BOOL_VAL: &str = "boolVal";
    pub const NUMERIC: &str = "numeric";
    pub const DATE: &str = "date";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const LOWERCASE: &str = "lowercase";
    /// The required rule. Non-optional checks always start with it.
    pub const NOT_BLANK: &str = "notBlank";
    pub const COUNTRY_CODE: &str = "countryCode";
    pub const CREDIT_CARD: &str = "creditCard";
    pub const URL: &str = "url";
}

/// Default messages for the built-in rules, in catalog order.
pub const DEFAULT_ERRORS: [(&str, &str); 12] = [
    (names::ALPHA, "This field should contain only letters"),
    (
        names::ALNUM,
        "This field should only contain letters, numbers, and spaces",
    ),
    (
        names::BOOL_VAL,
        "This field should only contain true/false values",
    ),
    (names::NUMERIC, "This field should only contain numeric values"),
    (names::DATE, "This field should contain a valid date"),
    (names::EMAIL, "This field should contain a valid e-mail address"),
    (
        names::PHONE,
        "This field should contain a valid phone number e.g. 212-555-1234",
    ),
    (names::LOWERCASE, "This field should not contain capital letters"),
    (names::NOT_BLANK, "This field cannot be left blank"),
    (names::COUNTRY_CODE, "This field must be a valid ISO country code"),
    (names::CREDIT_CARD, "This field must be a valid credit card number"),
    (
        names::URL,
        "This field should contain a valid URL, including http:// or https://",
    ),
];

// ============================================================================
// RULE FACTORY
// ============================================================================

/// Produces rules by name.
///
/// This is the only surface the inspector needs from a rule library. Swap it
/// with [`Inspector::set_factory`](crate::inspector::Inspector::set_factory)
/// to plug in a different vocabulary.
pub trait RuleFactory: fmt::Debug + Send + Sync {
    /// Creates a fresh rule for `name`, or `None` if the name is unknown.
    fn create(&self, name: &str) -> Option<Box<dyn Rule>>;

    /// Returns `true` if [`create`](Self::create) knows `name`.
    fn supports(&self, name: &str) -> bool {
        self.create(name).is_some()
    }
}

/// The default rule library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinRules;

impl RuleFactory for BuiltinRules {
    fn create(&self, name: &str) -> Option<Box<dyn Rule>> {
        let rule: Box<dyn Rule> = match name {
            names::ALPHA => Box::new(alpha()),
            names::ALNUM => Box::new(alnum()),
            names::BOOL_VAL => Box::new(bool_val()),
            names::NUMERIC => Box::new(numeric()),
            names::DATE => Box::new(date()),
            names::EMAIL => Box::new(email()),
            names::PHONE => Box::new(phone()),
            names::LOWERCASE => Box::new(lowercase()),
            names::NOT_BLANK => Box::new(not_blank()),
            names::COUNTRY_CODE => Box::new(country_code()),
            names::CREDIT_CARD => Box::new(credit_card()),
            names::URL => Box::new(url()),
            _ => return None,
        };
        Some(rule)
    }

    fn supports(&self, name: &str) -> bool {
        DEFAULT_ERRORS.iter().any(|(known, _)| *known == name)
    }
}

// ============================================================================
// TESTS
// ============================================================================
