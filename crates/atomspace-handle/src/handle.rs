//! # Handle
//!
//! The identity unit of the hypergraph store.
//!
//! A `Handle` is a shared reference to at most one atom. Cloning a handle
//! bumps an atomic reference count; the atom is dropped together with its
//! last handle. A handle never repoints to a different atom.
//!
//! ## Two Notions Of Sameness
//!
//! | Question | Answered by | Cost | Reproducible |
//! |----------|-------------|------|--------------|
//! | Same object? | `==`, `<` (address) | O(1) | No |
//! | Same knowledge? | [`content_eq`](crate::content_eq), [`Handle::compare`] | digest + rare deep compare | Yes |
//!
//! Pointer equality implies content equality; the converse does not hold.

use crate::atom::Atom;
use crate::types::{AtomCore, ContentHash, INVALID_HASH};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// HANDLE
// =============================================================================

/// Shared reference to an atom, or the undefined sentinel.
///
/// `Eq` and `Ord` are address-based. `Handle` does not implement `Hash`;
/// hashed containers pick a strategy explicitly through
/// [`ByContent`](crate::ByContent) or [`ByAddress`](crate::ByAddress).
pub struct Handle<A = Atom> {
    atom: Option<Arc<A>>,
}

/// The undefined handle for the default atom type.
pub const UNDEFINED: Handle = Handle::UNDEFINED;

impl<A> Handle<A> {
    /// The undefined handle: no backing atom.
    pub const UNDEFINED: Self = Self { atom: None };

    /// Take ownership of an atom and return the first handle to it.
    #[must_use]
    pub fn new(atom: A) -> Self {
        Self::from_arc(Arc::new(atom))
    }

    /// Wrap an already shared atom.
    #[must_use]
    pub fn from_arc(atom: Arc<A>) -> Self {
        Self { atom: Some(atom) }
    }

    /// The undefined handle.
    #[must_use]
    pub const fn undefined() -> Self {
        Self::UNDEFINED
    }

    /// True iff a backing atom exists.
    ///
    /// This is the only safe precondition before structural access.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        self.atom.is_some()
    }

    /// True iff this is the undefined handle.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        self.atom.is_none()
    }

    /// Structural access to the backing atom.
    ///
    /// Returns `None` for the undefined handle.
    #[must_use]
    pub fn atom(&self) -> Option<&A> {
        self.atom.as_deref()
    }

    /// Raw pointer to the backing atom; null for the undefined handle.
    #[must_use]
    pub fn as_ptr(&self) -> *const A {
        self.atom.as_ref().map_or(std::ptr::null(), Arc::as_ptr)
    }

    /// Pointer identity.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.as_ptr(), other.as_ptr())
    }

    /// Number of live handles sharing this atom (0 when undefined).
    #[must_use]
    pub fn strong_count(&self) -> usize {
        self.atom.as_ref().map_or(0, Arc::strong_count)
    }

    /// Memory address of the backing atom; 0 when undefined.
    pub(crate) fn address(&self) -> usize {
        self.as_ptr().addr()
    }
}

impl<A: AtomCore> Handle<A> {
    /// Content digest of the backing atom, or [`INVALID_HASH`].
    #[must_use]
    pub fn value(&self) -> ContentHash {
        self.atom.as_ref().map_or(INVALID_HASH, |atom| atom.content_hash())
    }

    /// Three-way content comparison, independent of memory layout.
    ///
    /// The undefined handle sorts first. Defined handles are ordered by
    /// content digest; equal digests fall through to the atoms' structural
    /// order so that colliding but distinct atoms never compare `Equal`.
    #[must_use]
    pub fn compare(lhs: &Self, rhs: &Self) -> Ordering {
        match (lhs.atom(), rhs.atom()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(l), Some(r)) => {
                if std::ptr::eq(l, r) {
                    return Ordering::Equal;
                }
                l.content_hash()
                    .cmp(&r.content_hash())
                    .then_with(|| l.structural_cmp(r))
            }
        }
    }
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

// Manual impls: deriving would demand `A: Clone` / `A: Default`.

impl<A> Clone for Handle<A> {
    fn clone(&self) -> Self {
        Self {
            atom: self.atom.clone(),
        }
    }
}

impl<A> Default for Handle<A> {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl<A> From<Arc<A>> for Handle<A> {
    fn from(atom: Arc<A>) -> Self {
        Self::from_arc(atom)
    }
}

impl<A> PartialEq for Handle<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<A> Eq for Handle<A> {}

impl<A> PartialEq<*const A> for Handle<A> {
    fn eq(&self, other: &*const A) -> bool {
        std::ptr::eq(self.as_ptr(), *other)
    }
}

impl<A> PartialOrd for Handle<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Address order: fast and deterministic within one run only.
impl<A> Ord for Handle<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.address().cmp(&other.address())
    }
}

impl<A: AtomCore> fmt::Debug for Handle<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            return f.write_str("Handle::UNDEFINED");
        }
        f.debug_struct("Handle")
            .field("value", &self.value())
            .field("address", &format_args!("{:#x}", self.address()))
            .finish()
    }
}

// =============================================================================
// COMPARATOR FUNCTIONS
// =============================================================================

/// Address-based strict weak order (the default `<`).
#[must_use]
pub fn address_less<A>(lhs: &Handle<A>, rhs: &Handle<A>) -> bool {
    lhs < rhs
}

/// Content-based strict weak order derived from [`Handle::compare`].
#[must_use]
pub fn content_less<A: AtomCore>(lhs: &Handle<A>, rhs: &Handle<A>) -> bool {
    Handle::compare(lhs, rhs) == Ordering::Less
}

// =============================================================================
// TESTS
// =============================================================================
