//! # Content Equality & Hashing
//!
//! "Same knowledge" as opposed to "same object".
//!
//! Content equality checks, in order: pointer identity, definedness, the
//! cached digests, and only on a digest match a full structural comparison
//! to rule out collisions. [`hash_value`] is the matching hash:
//! `content_eq(a, b)` implies `hash_value(a) == hash_value(b)`.

use crate::containers::{HandlePair, HandleSet};
use crate::handle::Handle;
use crate::strategy::ByContent;
use crate::types::{AtomCore, ContentHash};
use std::collections::BTreeSet;

// =============================================================================
// CONTENT EQUALITY
// =============================================================================

/// Content-based equality over handles and collections of handles.
pub trait ContentEq {
    /// True when both sides hold the same knowledge.
    fn content_eq(&self, other: &Self) -> bool;
}

/// Content equality for any supported shape.
#[must_use]
pub fn content_eq<T: ContentEq + ?Sized>(lhs: &T, rhs: &T) -> bool {
    lhs.content_eq(rhs)
}

/// Content digest of a handle; [`INVALID_HASH`](crate::INVALID_HASH) when undefined.
#[must_use]
pub fn hash_value<A: AtomCore>(handle: &Handle<A>) -> ContentHash {
    handle.value()
}

impl<A: AtomCore> ContentEq for Handle<A> {
    fn content_eq(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }
        let (Some(lhs), Some(rhs)) = (self.atom(), other.atom()) else {
            return false;
        };
        let hash = lhs.content_hash();
        if hash != rhs.content_hash() {
            return false;
        }
        let same = lhs.structurally_eq(rhs);
        if !same {
            tracing::debug!(hash, "content hash collision between distinct atoms");
        }
        same
    }
}

/// Positional: same length, pairwise content-equal.
impl<A: AtomCore> ContentEq for [Handle<A>] {
    fn content_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(lhs, rhs)| lhs.content_eq(rhs))
    }
}

impl<A: AtomCore> ContentEq for Vec<Handle<A>> {
    fn content_eq(&self, other: &Self) -> bool {
        self.as_slice().content_eq(other.as_slice())
    }
}

/// Same cardinality, and every member of either set is content-equal to
/// some member of the other.
impl<A: AtomCore> ContentEq for HandleSet<A> {
    fn content_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        content_classes(self) == content_classes(other)
    }
}

/// Componentwise.
impl<A: AtomCore> ContentEq for HandlePair<A> {
    fn content_eq(&self, other: &Self) -> bool {
        self.0.content_eq(&other.0) && self.1.content_eq(&other.1)
    }
}

/// Collapse an address-ordered set into its content classes.
fn content_classes<A: AtomCore>(set: &HandleSet<A>) -> BTreeSet<ByContent<A>> {
    set.iter().cloned().map(ByContent::new).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::{Atom, AtomType};
    use crate::handle::UNDEFINED;
    use crate::types::INVALID_HASH;

    fn concept(name: &str) -> Handle {
        Handle::new(Atom::node(AtomType::ConceptNode, name))
    }

    #[test]
    fn reflexive() {
        let cat = concept("cat");
        assert!(content_eq(&cat, &cat));
        assert!(content_eq(&UNDEFINED, &UNDEFINED));
    }

    #[test]
    fn distinct_objects_same_knowledge() {
        let a = concept("cat");
        let b = concept("cat");
        assert_ne!(a, b);
        assert!(content_eq(&a, &b));
        assert_eq!(hash_value(&a), hash_value(&b));
    }

    #[test]
    fn undefined_against_defined() {
        let cat = concept("cat");
        assert!(!content_eq(&cat, &UNDEFINED));
        assert!(!content_eq(&UNDEFINED, &cat));
        assert_eq!(hash_value(&UNDEFINED), INVALID_HASH);
    }

    #[test]
    fn sequences_are_positional() {
        let lhs = vec![concept("a"), concept("b")];
        let same = vec![concept("a"), concept("b")];
        let swapped = vec![concept("b"), concept("a")];
        let shorter = vec![concept("a")];

        assert!(content_eq(&lhs, &same));
        assert!(!content_eq(&lhs, &swapped));
        assert!(!content_eq(&lhs, &shorter));
        assert!(content_eq(&lhs[..1], &shorter[..]));
    }

    #[test]
    fn sets_ignore_allocation_order() {
        let lhs: HandleSet = [concept("a"), concept("b"), concept("c")].into_iter().collect();
        let rhs: HandleSet = [concept("c"), concept("a"), concept("b")].into_iter().collect();
        assert!(content_eq(&lhs, &rhs));
    }

    #[test]
    fn sets_need_matching_cardinality() {
        let lhs: HandleSet = [concept("a"), concept("b")].into_iter().collect();
        let rhs: HandleSet = [concept("a")].into_iter().collect();
        assert!(!content_eq(&lhs, &rhs));
    }

    #[test]
    fn sets_check_both_directions() {
        // {a, a'} covers {a, b} from the left but not from the right.
        let lhs: HandleSet = [concept("a"), concept("a")].into_iter().collect();
        let rhs: HandleSet = [concept("a"), concept("b")].into_iter().collect();
        assert_eq!(lhs.len(), 2);
        assert!(!content_eq(&lhs, &rhs));
        assert!(!content_eq(&rhs, &lhs));
    }

    #[test]
    fn pairs_are_componentwise() {
        let lhs: HandlePair = (concept("a"), concept("b"));
        let rhs: HandlePair = (concept("a"), concept("b"));
        let flipped: HandlePair = (concept("b"), concept("a"));
        assert!(content_eq(&lhs, &rhs));
        assert!(!content_eq(&lhs, &flipped));
    }
}
