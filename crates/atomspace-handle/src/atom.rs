//! # Reference Atom
//!
//! A concrete [`AtomCore`] for the hypergraph: a typed node carrying a name,
//! or a typed link carrying an ordered outgoing set of handles.
//!
//! The content digest is computed once at construction with BLAKE3 and
//! truncated to 64 bits. Node digests cover (type, name); link digests
//! cover (type, arity, outgoing digests), so two independently built
//! graphs holding the same knowledge produce the same digests.

use crate::containers::HandleSeq;
use crate::equality::ContentEq;
use crate::format::{INDENT, Render};
use crate::handle::Handle;
use crate::types::{AtomCore, AtomSpaceError, ContentHash, INVALID_HASH};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Domain separators so a node and a link can never share a preimage.
const NODE_TAG: u8 = 0x4e;
const LINK_TAG: u8 = 0x4c;

// =============================================================================
// ATOM TYPE
// =============================================================================

/// Type tag of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AtomType {
    ConceptNode,
    PredicateNode,
    VariableNode,
    NumberNode,
    ListLink,
    InheritanceLink,
    EvaluationLink,
    MemberLink,
}

/// An ordered set of atom types.
pub type TypeSet = BTreeSet<AtomType>;

impl AtomType {
    /// Canonical type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConceptNode => "ConceptNode",
            Self::PredicateNode => "PredicateNode",
            Self::VariableNode => "VariableNode",
            Self::NumberNode => "NumberNode",
            Self::ListLink => "ListLink",
            Self::InheritanceLink => "InheritanceLink",
            Self::EvaluationLink => "EvaluationLink",
            Self::MemberLink => "MemberLink",
        }
    }

    /// True for types whose atoms carry a name.
    #[must_use]
    pub const fn is_node(self) -> bool {
        matches!(
            self,
            Self::ConceptNode | Self::PredicateNode | Self::VariableNode | Self::NumberNode
        )
    }

    /// True for types whose atoms carry an outgoing set.
    #[must_use]
    pub const fn is_link(self) -> bool {
        !self.is_node()
    }

    const fn tag(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ATOM
// =============================================================================

#[derive(Debug)]
enum Body {
    Name(String),
    Outgoing(HandleSeq),
}

/// A node or link of the hypergraph.
///
/// Immutable once built; share it through [`Handle::new`].
#[derive(Debug)]
pub struct Atom {
    atom_type: AtomType,
    body: Body,
    hash: ContentHash,
}

impl Atom {
    /// Build a node.
    ///
    /// `atom_type` must be a node type; use [`Atom::try_node`] when it
    /// comes from outside.
    #[must_use]
    pub fn node(atom_type: AtomType, name: impl Into<String>) -> Self {
        debug_assert!(atom_type.is_node(), "{atom_type} is not a node type");
        let name = name.into();
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[NODE_TAG, atom_type.tag()]);
        hasher.update(name.as_bytes());
        Self {
            atom_type,
            hash: finish(&hasher),
            body: Body::Name(name),
        }
    }

    /// Build a link over an ordered outgoing set.
    ///
    /// `atom_type` must be a link type; use [`Atom::try_link`] when it
    /// comes from outside.
    #[must_use]
    pub fn link(atom_type: AtomType, outgoing: HandleSeq) -> Self {
        debug_assert!(atom_type.is_link(), "{atom_type} is not a link type");
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[LINK_TAG, atom_type.tag()]);
        hasher.update(&(outgoing.len() as u64).to_le_bytes());
        for handle in &outgoing {
            hasher.update(&handle.value().to_le_bytes());
        }
        Self {
            atom_type,
            hash: finish(&hasher),
            body: Body::Outgoing(outgoing),
        }
    }

    /// Build a node, rejecting link types.
    pub fn try_node(
        atom_type: AtomType,
        name: impl Into<String>,
    ) -> Result<Self, AtomSpaceError> {
        if !atom_type.is_node() {
            return Err(AtomSpaceError::KindMismatch(format!(
                "{atom_type} cannot name a node"
            )));
        }
        Ok(Self::node(atom_type, name))
    }

    /// Build a link, rejecting node types.
    pub fn try_link(atom_type: AtomType, outgoing: HandleSeq) -> Result<Self, AtomSpaceError> {
        if !atom_type.is_link() {
            return Err(AtomSpaceError::KindMismatch(format!(
                "{atom_type} cannot hold an outgoing set"
            )));
        }
        Ok(Self::link(atom_type, outgoing))
    }

    /// Type tag.
    #[must_use]
    pub fn atom_type(&self) -> AtomType {
        self.atom_type
    }

    /// Node name; `None` for links.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.body {
            Body::Name(name) => Some(name),
            Body::Outgoing(_) => None,
        }
    }

    /// Outgoing set; empty for nodes.
    #[must_use]
    pub fn outgoing(&self) -> &[Handle] {
        match &self.body {
            Body::Name(_) => &[],
            Body::Outgoing(outgoing) => outgoing,
        }
    }

    /// Number of outgoing handles.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.outgoing().len()
    }
}

/// Truncate a BLAKE3 digest to 64 bits, keeping clear of the sentinel.
fn finish(hasher: &blake3::Hasher) -> ContentHash {
    let digest = hasher.finalize();
    let hash = digest
        .as_bytes()
        .first_chunk::<8>()
        .map_or(0, |word| u64::from_le_bytes(*word));
    if hash == INVALID_HASH {
        INVALID_HASH - 1
    } else {
        hash
    }
}

impl AtomCore for Atom {
    fn content_hash(&self) -> ContentHash {
        self.hash
    }

    fn structural_cmp(&self, other: &Self) -> Ordering {
        self.atom_type
            .cmp(&other.atom_type)
            .then_with(|| match (&self.body, &other.body) {
                (Body::Name(l), Body::Name(r)) => l.cmp(r),
                (Body::Outgoing(l), Body::Outgoing(r)) => l.len().cmp(&r.len()).then_with(|| {
                    l.iter()
                        .zip(r)
                        .map(|(lh, rh)| Handle::compare(lh, rh))
                        .find(|ord| ord.is_ne())
                        .unwrap_or(Ordering::Equal)
                }),
                (Body::Name(_), Body::Outgoing(_)) => Ordering::Less,
                (Body::Outgoing(_), Body::Name(_)) => Ordering::Greater,
            })
    }

    fn structurally_eq(&self, other: &Self) -> bool {
        if self.atom_type != other.atom_type {
            return false;
        }
        match (&self.body, &other.body) {
            (Body::Name(l), Body::Name(r)) => l == r,
            (Body::Outgoing(l), Body::Outgoing(r)) => l.content_eq(r),
            _ => false,
        }
    }

    fn render(&self, indent: &str) -> String {
        match &self.body {
            Body::Name(name) => format!("{indent}({} {:?})\n", self.atom_type, name),
            Body::Outgoing(outgoing) => {
                let deeper = format!("{indent}{INDENT}");
                let mut out = format!("{indent}({}\n", self.atom_type);
                for handle in outgoing {
                    out.push_str(&handle.render(&deeper));
                }
                out.push_str(&format!("{indent})\n"));
                out
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
