//! Boolean rules

const TRUE_WORDS: [&str; 4] = ["true", "1", "yes", "on"];
const FALSE_WORDS: [&str; 4] = ["false", "0", "no", "off"];

crate::rule! {
    /// Passes for booleans, the numbers `0` and `1`, and the words
    /// `true`/`false`, `yes`/`no`, `on`/`off` in any case.
    pub BoolVal;
    test(value) {
        match value {
            serde_json::Value::Bool(_) => true,
            serde_json::Value::Number(number) => matches!(number.as_u64(), Some(0 | 1)),
            serde_json::Value::String(text) => {
                let word = text.trim();
                TRUE_WORDS
                    .iter()
                    .chain(FALSE_WORDS.iter())
                    .any(|known| known.eq_ignore_ascii_case(word))
            }
            _ => false,
        }
    }
    fn bool_val();
}
