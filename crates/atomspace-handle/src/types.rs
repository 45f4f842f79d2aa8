//! # Core Type Definitions
//!
//! This module contains the foundation every other module builds on:
//! - The content digest type (`ContentHash`) and its reserved sentinel
//! - The `AtomCore` capability a handle points at
//! - Error types (`AtomSpaceError`)
//!
//! ## Identity Guarantees
//!
//! Nothing in this module owns an atom. The handle layer only ever reads
//! the cached digest and asks the atom to compare itself structurally.

use std::cmp::Ordering;
use thiserror::Error;

// =============================================================================
// CONTENT HASH
// =============================================================================

/// Structural digest of an atom.
///
/// Equal digests are necessary but not sufficient for content equality.
pub type ContentHash = u64;

/// Digest reported by the undefined handle.
///
/// Live atoms never report this value.
pub const INVALID_HASH: ContentHash = ContentHash::MAX;

// =============================================================================
// ATOM CORE CAPABILITY
// =============================================================================

/// The capability a [`Handle`](crate::Handle) points at.
///
/// An `AtomCore` owns its type, its outgoing set and a cached content
/// digest. The handle layer never computes digests itself; it only calls
/// into this trait.
///
/// # Contract
///
/// - `content_hash` never returns [`INVALID_HASH`].
/// - `structurally_eq(a, b)` holds exactly when `structural_cmp(a, b)` is
///   `Ordering::Equal`.
/// - Structurally equal atoms report equal digests.
pub trait AtomCore {
    /// Cached structural digest of this atom.
    fn content_hash(&self) -> ContentHash;

    /// Deep structural order, consulted only when two digests collide.
    fn structural_cmp(&self, other: &Self) -> Ordering;

    /// Deep structural equality.
    fn structurally_eq(&self, other: &Self) -> bool {
        self.structural_cmp(other) == Ordering::Equal
    }

    /// Human-readable form, every line prefixed with `indent`.
    fn render(&self, indent: &str) -> String;
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the ambient layers (configuration, logging).
///
/// Identity, equality, ordering and hashing are infallible and never
/// produce this type.
#[derive(Debug, Error)]
pub enum AtomSpaceError {
    /// The configuration document could not be parsed or serialized.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An ordering policy or log format name was not recognised.
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(String),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),

    /// A node type was used to build a link, or the reverse.
    #[error("Kind mismatch: {0}")]
    KindMismatch(String),
}

// =============================================================================
// TESTS
// =============================================================================
