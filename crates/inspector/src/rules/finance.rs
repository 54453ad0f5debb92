//! Finance and locale rules: credit card numbers and country codes.

use crate::foundation::Rule;

// ============================================================================
// CREDIT CARD
// ============================================================================

crate::rule! {
    /// Passes for card numbers of 13 to 19 digits that satisfy the Luhn
    /// checksum. Spaces and dashes between digit groups are ignored.
    pub CreditCard for text;
    test(input) { is_card_number(input) }
    fn credit_card();
}

fn is_card_number(input: &str) -> bool {
    let mut digits = Vec::with_capacity(19);
    for c in input.chars() {
        match c {
            ' ' | '-' => {}
            _ => match c.to_digit(10) {
                Some(digit) => digits.push(digit),
                None => return false,
            },
        }
    }

    if !(13..=19).contains(&digits.len()) {
        return false;
    }

    luhn_sum(&digits) % 10 == 0
}

fn luhn_sum(digits: &[u32]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(position, &digit)| {
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum()
}

// ============================================================================
// COUNTRY CODE
// ============================================================================

/// ISO 3166-1 alpha-2 codes, sorted for binary search.
static COUNTRY_CODES: [&str; 249] = [
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX",
    "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ",
    "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK",
    "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM",
    "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR",
    "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
    "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN",
    "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
    "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV",
    "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ",
    "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
    "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM",
    "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
    "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
    "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
    "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/// Passes for ISO 3166-1 alpha-2 country codes.
///
/// Codes must be uppercase unless the rule is built with
/// [`ignore_case`](Self::ignore_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CountryCode {
    ignore_case: bool,
}

impl CountryCode {
    /// Creates a case-sensitive country code rule.
    #[must_use]
    pub const fn new() -> Self {
        Self { ignore_case: false }
    }

    /// Accepts lowercase and mixed-case codes too.
    #[must_use = "builder methods must be chained or built"]
    pub const fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

impl Rule for CountryCode {
    fn test(&self, value: &serde_json::Value) -> bool {
        let Some(code) = value.as_str() else {
            return false;
        };
        let code = if self.ignore_case {
            code.to_ascii_uppercase()
        } else {
            code.to_owned()
        };
        COUNTRY_CODES.binary_search(&code.as_str()).is_ok()
    }
}

/// Creates a case-sensitive country code rule.
#[must_use]
pub const fn country_code() -> CountryCode {
    CountryCode::new()
}

// ============================================================================
// TESTS
// ============================================================================
