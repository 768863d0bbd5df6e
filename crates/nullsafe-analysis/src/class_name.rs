//! Fully-qualified class names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fully-qualified class name such as `com.example.Foo` or `com.example.Foo$1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(fqn: impl Into<String>) -> Self {
        Self(fqn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the last `.`, or `None` for the default package.
    pub fn package(&self) -> Option<&str> {
        self.0.rfind('.').map(|i| &self.0[..i])
    }

    /// The name without its package, nested segments included (`Outer$Inner`).
    pub fn simple_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(i) => &self.0[i + 1..],
            None => &self.0,
        }
    }

    /// Anonymous units end in `$<digits>`; they are folded into their owner.
    pub fn is_anonymous(&self) -> bool {
        match self.0.rsplit_once('$') {
            Some((_, suffix)) => !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()),
            None => false,
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
