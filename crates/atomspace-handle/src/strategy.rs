//! # Comparator Strategies
//!
//! Two mutually exclusive ways to order, compare and hash handles:
//!
//! | Strategy | Order | Equality | Hash | Reproducible |
//! |----------|-------|----------|------|--------------|
//! | [`AddressOrder`] | address | pointer | address | single run only |
//! | [`ContentOrder`] | [`Handle::compare`] | [`content_eq`](crate::content_eq) | [`hash_value`] | yes |
//!
//! A container picks its strategy through its key type ([`ByAddress`] or
//! [`ByContent`]). The two key types do not convert into each other, so a
//! content-keyed collection can never be merged into an address-keyed one
//! without unwrapping every handle on purpose.

use crate::atom::Atom;
use crate::equality::{ContentEq, hash_value};
use crate::handle::Handle;
use crate::types::AtomCore;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

// =============================================================================
// STRATEGY TRAIT
// =============================================================================

/// A consistent (order, equality, hash) triple over handles.
///
/// Implementations must keep `eq` equivalent to `cmp == Equal`, and equal
/// handles must hash identically.
pub trait OrderingStrategy {
    /// Short name used in debug output.
    const NAME: &'static str;

    /// Total order.
    fn cmp<A: AtomCore>(lhs: &Handle<A>, rhs: &Handle<A>) -> Ordering;

    /// Equivalence matching `cmp`.
    fn eq<A: AtomCore>(lhs: &Handle<A>, rhs: &Handle<A>) -> bool;

    /// Hash matching `eq`.
    fn hash<A: AtomCore, H: Hasher>(handle: &Handle<A>, state: &mut H);
}

/// Address-based strategy: fast, run-local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressOrder;

impl OrderingStrategy for AddressOrder {
    const NAME: &'static str = "ByAddress";

    fn cmp<A: AtomCore>(lhs: &Handle<A>, rhs: &Handle<A>) -> Ordering {
        lhs.cmp(rhs)
    }

    fn eq<A: AtomCore>(lhs: &Handle<A>, rhs: &Handle<A>) -> bool {
        lhs.ptr_eq(rhs)
    }

    fn hash<A: AtomCore, H: Hasher>(handle: &Handle<A>, state: &mut H) {
        state.write_usize(handle.address());
    }
}

/// Content-based strategy: reproducible across runs and processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentOrder;

impl OrderingStrategy for ContentOrder {
    const NAME: &'static str = "ByContent";

    fn cmp<A: AtomCore>(lhs: &Handle<A>, rhs: &Handle<A>) -> Ordering {
        Handle::compare(lhs, rhs)
    }

    fn eq<A: AtomCore>(lhs: &Handle<A>, rhs: &Handle<A>) -> bool {
        lhs.content_eq(rhs)
    }

    fn hash<A: AtomCore, H: Hasher>(handle: &Handle<A>, state: &mut H) {
        state.write_u64(hash_value(handle));
    }
}

// =============================================================================
// KEYED HANDLE
// =============================================================================

/// A handle whose `Eq`, `Ord` and `Hash` come from strategy `S`.
pub struct Keyed<S, A = Atom> {
    handle: Handle<A>,
    strategy: PhantomData<fn() -> S>,
}

/// Handle keyed by address.
pub type ByAddress<A = Atom> = Keyed<AddressOrder, A>;

/// Handle keyed by content.
pub type ByContent<A = Atom> = Keyed<ContentOrder, A>;

impl<S, A> Keyed<S, A> {
    /// Key a handle under strategy `S`.
    #[must_use]
    pub fn new(handle: Handle<A>) -> Self {
        Self {
            handle,
            strategy: PhantomData,
        }
    }

    /// The wrapped handle.
    #[must_use]
    pub fn handle(&self) -> &Handle<A> {
        &self.handle
    }

    /// Unwrap the handle, dropping the strategy.
    #[must_use]
    pub fn into_handle(self) -> Handle<A> {
        self.handle
    }
}

impl<S, A> Clone for Keyed<S, A> {
    fn clone(&self) -> Self {
        Self::new(self.handle.clone())
    }
}

impl<S, A> Deref for Keyed<S, A> {
    type Target = Handle<A>;

    fn deref(&self) -> &Handle<A> {
        &self.handle
    }
}

impl<S, A> From<Handle<A>> for Keyed<S, A> {
    fn from(handle: Handle<A>) -> Self {
        Self::new(handle)
    }
}

impl<S: OrderingStrategy, A: AtomCore> PartialEq for Keyed<S, A> {
    fn eq(&self, other: &Self) -> bool {
        S::eq(&self.handle, &other.handle)
    }
}

impl<S: OrderingStrategy, A: AtomCore> Eq for Keyed<S, A> {}

impl<S: OrderingStrategy, A: AtomCore> PartialOrd for Keyed<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: OrderingStrategy, A: AtomCore> Ord for Keyed<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        S::cmp(&self.handle, &other.handle)
    }
}

impl<S: OrderingStrategy, A: AtomCore> Hash for Keyed<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        S::hash(&self.handle, state);
    }
}

impl<S: OrderingStrategy, A: AtomCore> fmt::Debug for Keyed<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", S::NAME, self.handle)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::AtomType;
    use crate::handle::UNDEFINED;
    use std::collections::HashSet;
    use std::hash::{BuildHasher, RandomState};

    fn concept(name: &str) -> Handle {
        Handle::new(Atom::node(AtomType::ConceptNode, name))
    }

    fn hash_of<T: Hash>(state: &RandomState, value: &T) -> u64 {
        state.hash_one(value)
    }

    #[test]
    fn content_keys_merge_equal_knowledge() {
        let a: ByContent = ByContent::new(concept("cat"));
        let b: ByContent = ByContent::new(concept("cat"));
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);

        let state = RandomState::new();
        assert_eq!(hash_of(&state, &a), hash_of(&state, &b));
    }

    #[test]
    fn address_keys_keep_objects_apart() {
        let a: ByAddress = ByAddress::new(concept("cat"));
        let b: ByAddress = ByAddress::new(concept("cat"));
        assert_ne!(a, b);
        assert_ne!(a.cmp(&b), Ordering::Equal);

        let same: ByAddress = a.clone();
        let state = RandomState::new();
        assert_eq!(hash_of(&state, &a), hash_of(&state, &same));
    }

    #[test]
    fn hash_sets_follow_strategy() {
        let a = concept("cat");
        let b = concept("cat");

        let by_content: HashSet<ByContent> =
            [a.clone(), b.clone()].into_iter().map(ByContent::new).collect();
        let by_address: HashSet<ByAddress> = [a, b].into_iter().map(ByAddress::new).collect();

        assert_eq!(by_content.len(), 1);
        assert_eq!(by_address.len(), 2);
    }

    #[test]
    fn undefined_keys() {
        let u: ByContent = ByContent::new(UNDEFINED);
        let cat: ByContent = ByContent::new(concept("cat"));
        assert_eq!(u, ByContent::new(UNDEFINED));
        assert!(u < cat);
    }

    #[test]
    fn deref_and_unwrap() {
        let cat = concept("cat");
        let key: ByContent = ByContent::from(cat.clone());
        assert!(key.is_defined());
        assert_eq!(key.handle(), &cat);
        assert_eq!(key.into_handle(), cat);
    }

    #[test]
    fn debug_names_strategy() {
        let key: ByContent = ByContent::new(UNDEFINED);
        assert_eq!(format!("{:?}", key), "ByContent(Handle::UNDEFINED)");
    }
}
