//! Enforcement modes and their strictness order.
//!
//! `Strict` is stricter than every `Local`, and every `Local` is stricter than
//! `Default`. Within `Local`, trusting fewer classes is stricter: any
//! `Trust::Only` set is stricter than `Trust::All`, and `Only(a)` is stricter
//! than `Only(b)` exactly when `a` is a proper subset of `b`. Two `Only` sets
//! that do not contain one another are incomparable.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which other classes a `Local` class trusts to be correctly annotated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trust {
    /// Every other class is trusted.
    All,
    /// Only the listed fully-qualified class names are trusted.
    Only(BTreeSet<String>),
}

impl Trust {
    /// Trust nobody.
    pub fn none() -> Self {
        Self::Only(BTreeSet::new())
    }

    /// Whether calls into `class` are trusted.
    pub fn trusts(&self, class: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(class),
        }
    }

    fn partial_cmp_strictness(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::All, Self::All) => Some(Ordering::Equal),
            (Self::Only(_), Self::All) => Some(Ordering::Greater),
            (Self::All, Self::Only(_)) => Some(Ordering::Less),
            (Self::Only(a), Self::Only(b)) => {
                if a == b {
                    Some(Ordering::Equal)
                } else if a.is_subset(b) {
                    Some(Ordering::Greater)
                } else if b.is_subset(a) {
                    Some(Ordering::Less)
                } else {
                    None
                }
            }
        }
    }
}

/// Class-level nullability enforcement mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "trust", rename_all = "snake_case")]
pub enum EnforcementMode {
    Default,
    Local(Trust),
    Strict,
}

/// Probe order for promotion search, strictest first.
///
/// The walk is deliberately this fixed list rather than a generic lattice
/// traversal: the first zero-violation hit must be the strictest one.
pub const PROMOTION_CHAIN: [EnforcementMode; 4] = [
    EnforcementMode::Strict,
    EnforcementMode::Local(Trust::Only(BTreeSet::new())),
    EnforcementMode::Local(Trust::All),
    EnforcementMode::Default,
];

impl EnforcementMode {
    /// `Local` trusting every other class.
    pub fn local_all() -> Self {
        Self::Local(Trust::All)
    }

    /// `Local` trusting no other class.
    pub fn local_trust_none() -> Self {
        Self::Local(Trust::none())
    }

    /// `Local` trusting only the given classes.
    pub fn local_trust_only<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Local(Trust::Only(classes.into_iter().map(Into::into).collect()))
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Strict partial order: true iff `self` enforces strictly more than `other`.
    pub fn is_stricter_than(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Greater)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Local(_) => 1,
            Self::Strict => 2,
        }
    }
}

impl PartialOrd for EnforcementMode {
    /// Orders by strictness. `None` for incomparable trust sets.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Local(a), Self::Local(b)) => a.partial_cmp_strictness(b),
            _ => Some(self.rank().cmp(&other.rank())),
        }
    }
}

impl fmt::Display for EnforcementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Local(Trust::All) => write!(f, "Local"),
            Self::Local(Trust::Only(set)) => {
                let names: Vec<&str> = set.iter().map(String::as_str).collect();
                write!(f, "LocalTrustOnly[{}]", names.join(","))
            }
            Self::Strict => write!(f, "Strict"),
        }
    }
}
