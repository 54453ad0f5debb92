//! Declarative settings
//!
//! A [`Settings`] map configures a [`FormInspector`](super::FormInspector):
//! `checks` maps field keys to rule lists, `requirements` marks fields as
//! required, and both nest under child names to reach into children.
//!
//! ```rust,ignore
//! use nebula_inspector::inspector::Settings;
//! use serde_json::json;
//!
//! let checks = Settings::from_value(json!({
//!     "email": ["email"],
//!     "address": { "zip": ["numeric"] }
//! }))?;
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InspectorError, InspectorResult};

/// One entry of a [`Settings`] map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Setting {
    /// `true` or `false`.
    Flag(bool),
    /// A list of rule names.
    Rules(Vec<String>),
    /// Settings addressed to a child.
    Nested(Settings),
}

impl Setting {
    /// Merges `incoming` into `self`.
    ///
    /// Two nested maps merge key by key; any other pairing is replaced.
    pub fn merge(&mut self, incoming: Self) {
        match (self, incoming) {
            (Self::Nested(current), Self::Nested(incoming)) => current.merge(incoming),
            (current, incoming) => *current = incoming,
        }
    }

    /// Returns `true` if the entry marks a field as required.
    ///
    /// `true`, a non-empty rule list and a non-empty nested map count as
    /// enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Rules(rules) => !rules.is_empty(),
            Self::Nested(nested) => !nested.is_empty(),
        }
    }

    /// A short name of the entry's shape, for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Flag(_) => "flag",
            Self::Rules(_) => "rule list",
            Self::Nested(_) => "nested settings",
        }
    }
}

impl From<bool> for Setting {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<Settings> for Setting {
    fn from(settings: Settings) -> Self {
        Self::Nested(settings)
    }
}

/// An ordered map of field or child name to [`Setting`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(IndexMap<String, Setting>);

impl Settings {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads settings from a JSON value.
    pub fn from_value(value: Value) -> InspectorResult<Self> {
        serde_json::from_value(value).map_err(InspectorError::InvalidSettings)
    }

    /// Deep-merges `incoming` into `self`; see [`Setting::merge`].
    pub fn merge(&mut self, incoming: Self) {
        for (key, setting) in incoming.0 {
            match self.0.get_mut(&key) {
                Some(current) => current.merge(setting),
                None => {
                    self.0.insert(key, setting);
                }
            }
        }
    }

    /// Returns the entry for `key`.
    pub fn get(&self, key: &str) -> Option<&Setting> {
        self.0.get(key)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Setting)> {
        self.0.iter().map(|(key, setting)| (key.as_str(), setting))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sets `key` to a rule list.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules<I, S>(mut self, key: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules = rules.into_iter().map(Into::into).collect();
        self.0.insert(key.into(), Setting::Rules(rules));
        self
    }

    /// Sets `key` to a flag.
    #[must_use = "builder methods must be chained or built"]
    pub fn flag(mut self, key: impl Into<String>, flag: bool) -> Self {
        self.0.insert(key.into(), Setting::Flag(flag));
        self
    }

    /// Marks `key` as required.
    #[must_use = "builder methods must be chained or built"]
    pub fn require(self, key: impl Into<String>) -> Self {
        self.flag(key, true)
    }

    /// Sets `key` to settings addressed to a child.
    #[must_use = "builder methods must be chained or built"]
    pub fn nested(mut self, key: impl Into<String>, settings: Self) -> Self {
        self.0.insert(key.into(), Setting::Nested(settings));
        self
    }
}

impl TryFrom<Value> for Settings {
    type Error = InspectorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl FromIterator<(String, Setting)> for Settings {
    fn from_iter<T: IntoIterator<Item = (String, Setting)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Settings {
    type Item = (&'a String, &'a Setting);
    type IntoIter = indexmap::map::Iter<'a, String, Setting>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
