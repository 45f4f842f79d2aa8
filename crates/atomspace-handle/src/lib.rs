//! # atomspace-handle
//!
//! Identity, equality, hashing and ordering for the atoms of a shared,
//! mutable hypergraph knowledge store.
//!
//! Atoms are referenced everywhere through [`Handle`]s. This crate decides
//! what it means for two handles to be the *same atom* (pointer identity)
//! and what it means for them to hold the *same knowledge* (content
//! identity), and provides the comparator and hash contracts that keep
//! ordered and hashed indices of atoms consistent.
//!
//! ## Two Orderings, Never Mixed
//!
//! - **Address order** (`Handle`'s own `Ord`, [`AddressOrder`]): fast,
//!   deterministic within a run, not reproducible across runs.
//! - **Content order** ([`Handle::compare`], [`ContentOrder`]): digest
//!   first, structural tie-break on collision; identical knowledge always
//!   iterates identically.
//!
//! Containers fix their strategy in their type (see [`containers`]). There
//! is no implicit conversion between the two.
//!
//! ## Architectural Constraints
//!
//! - Identity operations are infallible; the undefined handle is a valid state
//! - No internal locking; shared ownership is an atomic reference count
//! - No async, no I/O outside configuration loading

// =============================================================================
// MODULES
// =============================================================================

pub mod atom;
pub mod config;
pub mod containers;
pub mod equality;
pub mod format;
pub mod handle;
pub mod logging;
pub mod policy;
pub mod strategy;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use atom::{Atom, AtomType, TypeSet};
pub use handle::{Handle, UNDEFINED, address_less, content_less};
pub use types::{AtomCore, AtomSpaceError, ContentHash, INVALID_HASH};

// =============================================================================
// RE-EXPORTS: Equality, Strategies, Containers
// =============================================================================

pub use containers::{
    ContentHandleSet, Counter, HandleCounter, HandleMap, HandleMapSeq, HandleMapSet,
    HandleMultimap, HandlePair, HandlePairSeq, HandleSeq, HandleSeqSeq, HandleSeqSet, HandleSet,
    HandleUCounter, Tally, UnorderedHandlePairSet, UnorderedHandleSet,
};
pub use equality::{ContentEq, content_eq, hash_value};
pub use strategy::{AddressOrder, ByAddress, ByContent, ContentOrder, Keyed, OrderingStrategy};

// =============================================================================
// RE-EXPORTS: Policy, Formatting, Ambient
// =============================================================================

pub use config::{AtomSpaceConfig, LogFormat};
pub use format::{INDENT, Render};
pub use policy::{OrderingPolicy, PolicyHandleSet};
