//! # Ordering Policy
//!
//! Runtime selection between the address and content strategies.
//!
//! The policy never changes what any alias means: a `HandleSet` is always
//! address-ordered and a `ContentHandleSet` is always content-ordered.
//! Code that wants the ordering to follow configuration builds a
//! [`PolicyHandleSet`] and names the policy at the point of construction.

use crate::atom::Atom;
use crate::containers::{ContentHandleSet, HandleSeq, HandleSet};
use crate::handle::Handle;
use crate::strategy::ByContent;
use crate::types::{AtomCore, AtomSpaceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// POLICY
// =============================================================================

/// Which strategy a policy-driven index uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingPolicy {
    /// Address order: fastest, iteration order varies between runs.
    #[default]
    Address,
    /// Content order: identical iteration order for identical knowledge.
    Content,
}

impl OrderingPolicy {
    /// Lowercase policy name, as written in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for OrderingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderingPolicy {
    type Err = AtomSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "address" => Ok(Self::Address),
            "content" => Ok(Self::Content),
            other => Err(AtomSpaceError::InvalidPolicy(format!(
                "unknown ordering `{other}` (expected `address` or `content`)"
            ))),
        }
    }
}

// =============================================================================
// POLICY-DRIVEN SET
// =============================================================================

/// A handle set whose strategy was chosen from an [`OrderingPolicy`].
pub enum PolicyHandleSet<A = Atom> {
    /// Backed by an address-ordered set.
    Address(HandleSet<A>),
    /// Backed by a content-ordered set.
    Content(ContentHandleSet<A>),
}

impl<A: AtomCore> PolicyHandleSet<A> {
    /// Create an empty set ordered by `policy`.
    #[must_use]
    pub fn new(policy: OrderingPolicy) -> Self {
        tracing::debug!(%policy, "creating policy-driven handle set");
        match policy {
            OrderingPolicy::Address => Self::Address(HandleSet::new()),
            OrderingPolicy::Content => Self::Content(ContentHandleSet::new()),
        }
    }

    /// The policy this set was built with.
    #[must_use]
    pub fn policy(&self) -> OrderingPolicy {
        match self {
            Self::Address(_) => OrderingPolicy::Address,
            Self::Content(_) => OrderingPolicy::Content,
        }
    }

    /// Insert a handle. Returns false if an equal handle (under this
    /// set's strategy) was already present.
    pub fn insert(&mut self, handle: Handle<A>) -> bool {
        match self {
            Self::Address(set) => set.insert(handle),
            Self::Content(set) => set.insert(ByContent::new(handle)),
        }
    }

    /// Membership under this set's strategy.
    #[must_use]
    pub fn contains(&self, handle: &Handle<A>) -> bool {
        match self {
            Self::Address(set) => set.contains(handle),
            Self::Content(set) => set.contains(&ByContent::new(handle.clone())),
        }
    }

    /// Remove a handle (or its content-equal stand-in).
    pub fn remove(&mut self, handle: &Handle<A>) -> bool {
        match self {
            Self::Address(set) => set.remove(handle),
            Self::Content(set) => set.remove(&ByContent::new(handle.clone())),
        }
    }

    /// Number of stored handles.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Address(set) => set.len(),
            Self::Content(set) => set.len(),
        }
    }

    /// True if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handles in this set's iteration order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Handle<A>> + '_> {
        match self {
            Self::Address(set) => Box::new(set.iter()),
            Self::Content(set) => Box::new(set.iter().map(ByContent::handle)),
        }
    }

    /// Copy the handles out in iteration order.
    #[must_use]
    pub fn to_seq(&self) -> HandleSeq<A> {
        self.iter().cloned().collect()
    }
}

impl<A: AtomCore> fmt::Debug for PolicyHandleSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyHandleSet")
            .field("policy", &self.policy())
            .field("len", &self.len())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
