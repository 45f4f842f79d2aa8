//! # Container Aliases
//!
//! Named container shapes over handles, each with its strategy fixed in
//! the type:
//!
//! | Alias | Shape | Strategy |
//! |-------|-------|----------|
//! | `HandleSeq` | `Vec` | insertion order |
//! | `HandleSet` | `BTreeSet` | address |
//! | `ContentHandleSet` | `BTreeSet` | content |
//! | `UnorderedHandleSet` | `HashSet` | content |
//! | `HandleMap` | `BTreeMap` | address |
//! | `HandleMultimap` | `BTreeMap` of sets | address |
//! | `HandleCounter` / `HandleUCounter` | [`Counter`] | content |
//!
//! Composite shapes (`HandleSeqSeq`, `HandleSeqSet`, `HandleMapSeq`,
//! `HandleMapSet`, `HandlePairSeq`) are built from the ones above.

use crate::atom::Atom;
use crate::handle::Handle;
use crate::strategy::ByContent;
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::ops::AddAssign;

// =============================================================================
// ALIASES
// =============================================================================

/// A pair of handles.
pub type HandlePair<A = Atom> = (Handle<A>, Handle<A>);

/// A list of handles.
pub type HandleSeq<A = Atom> = Vec<Handle<A>>;

/// A list of lists of handles.
pub type HandleSeqSeq<A = Atom> = Vec<HandleSeq<A>>;

/// A set of lists of handles.
pub type HandleSeqSet<A = Atom> = BTreeSet<HandleSeq<A>>;

/// Default handle set: address-ordered, run-local iteration order.
pub type HandleSet<A = Atom> = BTreeSet<Handle<A>>;

/// Content-ordered set: identical iteration order for identical knowledge.
pub type ContentHandleSet<A = Atom> = BTreeSet<ByContent<A>>;

/// Hash set with content equality.
pub type UnorderedHandleSet<A = Atom> = HashSet<ByContent<A>>;

/// Hash set of pairs with componentwise content equality.
pub type UnorderedHandlePairSet<A = Atom> = HashSet<(ByContent<A>, ByContent<A>)>;

/// An ordered map from handle to handle.
pub type HandleMap<A = Atom> = BTreeMap<Handle<A>, Handle<A>>;

/// An ordered map from handle to handle set.
pub type HandleMultimap<A = Atom> = BTreeMap<Handle<A>, HandleSet<A>>;

/// A sequence of handle maps.
pub type HandleMapSeq<A = Atom> = Vec<HandleMap<A>>;

/// A set of handle maps.
pub type HandleMapSet<A = Atom> = BTreeSet<HandleMap<A>>;

/// A sequence of handle pairs.
pub type HandlePairSeq<A = Atom> = Vec<HandlePair<A>>;

/// Weighted handle counts.
pub type HandleCounter<A = Atom> = Counter<ByContent<A>, f64>;

/// Integral handle counts.
pub type HandleUCounter<A = Atom> = Counter<ByContent<A>, u32>;

// =============================================================================
// TALLY
// =============================================================================

/// A count type that accumulates without overflowing.
///
/// Integral counts saturate at their maximum; float counts saturate at
/// infinity on their own.
pub trait Tally: Copy + Default {
    /// The count of a single occurrence.
    const ONE: Self;

    /// `self + amount`, clamped instead of overflowing.
    #[must_use]
    fn accumulate(self, amount: Self) -> Self;
}

macro_rules! saturating_tally {
    ($($ty:ty),*) => {
        $(
            impl Tally for $ty {
                const ONE: Self = 1;

                fn accumulate(self, amount: Self) -> Self {
                    self.saturating_add(amount)
                }
            }
        )*
    };
}

saturating_tally!(u8, u16, u32, u64, usize);

impl Tally for f64 {
    const ONE: Self = 1.0;

    fn accumulate(self, amount: Self) -> Self {
        self + amount
    }
}

// =============================================================================
// COUNTER
// =============================================================================

/// Ordered map from key to an accumulated count.
///
/// Missing keys read as zero. Iteration follows the key order, so a
/// content-keyed counter iterates identically across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter<K, C> {
    counts: BTreeMap<K, C>,
}

impl<K: Ord, C> Default for Counter<K, C> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<K, C> Counter<K, C> {
    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, K, C> {
        self.counts.keys()
    }

    /// (key, count) entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, C> {
        self.counts.iter()
    }
}

impl<K: Ord, C> Counter<K, C> {
    /// True if `key` has been counted.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    /// Forget `key`, returning its count.
    pub fn remove(&mut self, key: &K) -> Option<C> {
        self.counts.remove(key)
    }
}

impl<K: Ord, C: Tally> Counter<K, C> {
    /// Create an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `amount` onto `key` and return the new count.
    ///
    /// Saturates rather than overflowing.
    pub fn add(&mut self, key: K, amount: C) -> C {
        let slot = self.counts.entry(key).or_default();
        *slot = slot.accumulate(amount);
        *slot
    }

    /// Count for `key`, zero if absent.
    #[must_use]
    pub fn get(&self, key: &K) -> C {
        self.counts.get(key).copied().unwrap_or_default()
    }

    /// Sum of all counts, saturating.
    #[must_use]
    pub fn total_count(&self) -> C {
        self.counts
            .values()
            .fold(C::default(), |total, &count| total.accumulate(count))
    }

    /// Accumulate every count of `other` into this counter.
    pub fn merge(&mut self, other: &Self)
    where
        K: Clone,
    {
        for (key, &count) in &other.counts {
            self.add(key.clone(), count);
        }
    }
}

/// Counts each occurrence once.
impl<K: Ord, C: Tally> FromIterator<K> for Counter<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key, C::ONE);
        }
        counter
    }
}

impl<K: Ord + Clone, C: Tally> AddAssign<&Counter<K, C>> for Counter<K, C> {
    fn add_assign(&mut self, other: &Self) {
        self.merge(other);
    }
}

impl<'a, K, C> IntoIterator for &'a Counter<K, C> {
    type Item = (&'a K, &'a C);
    type IntoIter = btree_map::Iter<'a, K, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
