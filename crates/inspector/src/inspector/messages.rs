//! Message trees
//!
//! Messages are reported in the shape of the inspector tree: each node maps
//! its own field keys to lists of messages and its children's names to their
//! own trees.
//!
//! ```text
//! {
//!     "email": ["This field should contain a valid e-mail address"],
//!     "address": {
//!         "zip": ["This field cannot be left blank"]
//!     }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Messages for a field key, or the message tree of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Messages {
    /// Messages recorded under one field key, in recording order.
    List(Vec<String>),
    /// A node: field keys and child names, in insertion order.
    Tree(IndexMap<String, Messages>),
}

impl Default for Messages {
    fn default() -> Self {
        Self::Tree(IndexMap::new())
    }
}

impl Messages {
    /// Returns `true` if no message is held anywhere in this value.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Total number of messages, across all nested trees.
    pub fn count(&self) -> usize {
        match self {
            Self::List(list) => list.len(),
            Self::Tree(tree) => tree.values().map(Self::count).sum(),
        }
    }

    /// Returns the direct entry under `key` of a tree.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Tree(tree) => tree.get(key),
            Self::List(_) => None,
        }
    }

    /// Returns the messages if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(list) => Some(list),
            Self::Tree(_) => None,
        }
    }

    /// Returns the tree entries if this is a tree.
    pub fn as_tree(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::List(_) => None,
        }
    }

    /// Looks up a field key or dotted path.
    ///
    /// An exact key wins over a dotted walk, so a field literally named
    /// `"a.b"` shadows the path into child `a`. Unresolved paths yield an
    /// empty tree.
    pub fn at(&self, path: &str) -> Self {
        self.lookup(path).cloned().unwrap_or_default()
    }

    fn lookup(&self, path: &str) -> Option<&Self> {
        if let Some(found) = self.get(path) {
            return Some(found);
        }
        let (head, rest) = path.split_once('.')?;
        self.get(head)?.lookup(rest)
    }
}

impl From<Vec<String>> for Messages {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

impl From<IndexMap<String, Messages>> for Messages {
    fn from(tree: IndexMap<String, Messages>) -> Self {
        Self::Tree(tree)
    }
}
