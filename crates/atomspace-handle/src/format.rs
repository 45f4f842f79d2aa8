//! # Formatting
//!
//! Human-readable renderers for handles and every container alias, for
//! debugging and log output only. Each renderer has an indented form
//! (`render`) and a flat form (`render_flat`).
//!
//! Containers print `size = N` followed by labelled entries, with nested
//! items indented one [`INDENT`] further:
//!
//! ```text
//! size = 2
//! atom[0]:
//!   (ConceptNode "cat")
//! atom[1]:
//!   (ConceptNode "dog")
//! ```
//!
//! Hash sets are rendered in content order so the output is reproducible.

use crate::atom::{AtomType, TypeSet};
use crate::containers::{
    Counter, HandleMap, HandleMultimap, HandlePair, HandleSeq, HandleSeqSet, HandleSet,
};
use crate::handle::Handle;
use crate::strategy::ByContent;
use crate::types::AtomCore;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

/// One level of indentation.
pub const INDENT: &str = "  ";

/// Indented, human-readable rendering.
pub trait Render {
    /// Render with every line prefixed by `indent`.
    fn render(&self, indent: &str) -> String;

    /// Render without indentation.
    fn render_flat(&self) -> String {
        self.render("")
    }
}

/// `size = N` header, then `label[i]:` over each item.
fn render_items<'a, T, I>(indent: &str, label: &str, len: usize, items: I) -> String
where
    T: Render + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let deeper = format!("{indent}{INDENT}");
    let mut out = format!("{indent}size = {len}\n");
    for (i, item) in items.into_iter().enumerate() {
        out.push_str(&format!("{indent}{label}[{i}]:\n"));
        out.push_str(&item.render(&deeper));
    }
    out
}

// =============================================================================
// HANDLE & TYPES
// =============================================================================

impl<A: AtomCore> Render for Handle<A> {
    fn render(&self, indent: &str) -> String {
        match self.atom() {
            Some(atom) => atom.render(indent),
            None => format!("{indent}Undefined Atom\n"),
        }
    }
}

impl<A: AtomCore> fmt::Display for Handle<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render_flat().trim_end())
    }
}

impl<A: AtomCore> Render for ByContent<A> {
    fn render(&self, indent: &str) -> String {
        self.handle().render(indent)
    }
}

impl Render for AtomType {
    fn render(&self, indent: &str) -> String {
        format!("{indent}{self}\n")
    }
}

impl Render for TypeSet {
    fn render(&self, indent: &str) -> String {
        render_items(indent, "type", self.len(), self)
    }
}

// =============================================================================
// SEQUENCES & SETS
// =============================================================================

impl<A: AtomCore> Render for HandlePair<A> {
    fn render(&self, indent: &str) -> String {
        let deeper = format!("{indent}{INDENT}");
        format!(
            "{indent}first:\n{}{indent}second:\n{}",
            self.0.render(&deeper),
            self.1.render(&deeper)
        )
    }
}

impl<A: AtomCore> Render for HandleSeq<A> {
    fn render(&self, indent: &str) -> String {
        render_items(indent, "atom", self.len(), self)
    }
}

impl<A: AtomCore> Render for Vec<HandleSeq<A>> {
    fn render(&self, indent: &str) -> String {
        render_items(indent, "atoms", self.len(), self)
    }
}

impl<A: AtomCore> Render for HandleSeqSet<A> {
    fn render(&self, indent: &str) -> String {
        render_items(indent, "atoms", self.len(), self)
    }
}

impl<A: AtomCore> Render for HandleSet<A> {
    fn render(&self, indent: &str) -> String {
        render_items(indent, "atom", self.len(), self)
    }
}

impl<A: AtomCore> Render for BTreeSet<ByContent<A>> {
    fn render(&self, indent: &str) -> String {
        render_items(indent, "atom", self.len(), self)
    }
}

impl<A: AtomCore> Render for HashSet<ByContent<A>> {
    fn render(&self, indent: &str) -> String {
        let mut ordered: Vec<&ByContent<A>> = self.iter().collect();
        ordered.sort();
        render_items(indent, "atom", ordered.len(), ordered)
    }
}

impl<A: AtomCore> Render for Vec<HandlePair<A>> {
    fn render(&self, indent: &str) -> String {
        render_items(indent, "pair", self.len(), self)
    }
}

// =============================================================================
// MAPS & COUNTERS
// =============================================================================

/// `size = N`, then `key[i]:` / `value[i]:` over each entry.
fn render_entries<'a, K, V, I>(indent: &str, len: usize, entries: I) -> String
where
    K: Render + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let deeper = format!("{indent}{INDENT}");
    let mut out = format!("{indent}size = {len}\n");
    for (i, (key, value)) in entries.into_iter().enumerate() {
        out.push_str(&format!("{indent}key[{i}]:\n"));
        out.push_str(&key.render(&deeper));
        out.push_str(&format!("{indent}value[{i}]:\n"));
        out.push_str(&value.render(&deeper));
    }
    out
}

impl<A: AtomCore> Render for HandleMap<A> {
    fn render(&self, indent: &str) -> String {
        render_entries(indent, self.len(), self)
    }
}

impl<A: AtomCore> Render for HandleMultimap<A> {
    fn render(&self, indent: &str) -> String {
        render_entries(indent, self.len(), self)
    }
}

impl<A: AtomCore> Render for Vec<BTreeMap<Handle<A>, Handle<A>>> {
    fn render(&self, indent: &str) -> String {
        render_items(indent, "map", self.len(), self)
    }
}

impl<A: AtomCore> Render for BTreeSet<BTreeMap<Handle<A>, Handle<A>>> {
    fn render(&self, indent: &str) -> String {
        render_items(indent, "map", self.len(), self)
    }
}

impl<A: AtomCore, C: fmt::Display> Render for Counter<ByContent<A>, C> {
    fn render(&self, indent: &str) -> String {
        let deeper = format!("{indent}{INDENT}");
        let mut out = format!("{indent}size = {}\n", self.len());
        for (i, (key, count)) in self.into_iter().enumerate() {
            out.push_str(&format!("{indent}atom[{i}]:\n"));
            out.push_str(&key.render(&deeper));
            out.push_str(&format!("{indent}count[{i}]: {count}\n"));
        }
        out
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::containers::{
        HandleCounter, HandleMapSeq, HandlePairSeq, HandleSeqSeq, UnorderedHandleSet,
    };
    use crate::handle::UNDEFINED;

    fn concept(name: &str) -> Handle {
        Handle::new(Atom::node(AtomType::ConceptNode, name))
    }

    #[test]
    fn undefined_handle() {
        assert_eq!(UNDEFINED.render_flat(), "Undefined Atom\n");
        assert_eq!(UNDEFINED.to_string(), "Undefined Atom");
    }

    #[test]
    fn handle_display_is_flat() {
        assert_eq!(concept("cat").to_string(), "(ConceptNode \"cat\")");
    }

    #[test]
    fn seq_layout() {
        let seq: HandleSeq = vec![concept("cat"), UNDEFINED];
        assert_eq!(
            seq.render("> "),
            "> size = 2\n\
             > atom[0]:\n\
             >   (ConceptNode \"cat\")\n\
             > atom[1]:\n\
             >   Undefined Atom\n"
        );
    }

    #[test]
    fn seq_seq_nests() {
        let seqs: HandleSeqSeq = vec![vec![concept("a")]];
        assert_eq!(
            seqs.render_flat(),
            "size = 1\natoms[0]:\n  size = 1\n  atom[0]:\n    (ConceptNode \"a\")\n"
        );
    }

    #[test]
    fn pair_layout() {
        let pair: HandlePair = (concept("a"), concept("b"));
        assert_eq!(
            pair.render_flat(),
            "first:\n  (ConceptNode \"a\")\nsecond:\n  (ConceptNode \"b\")\n"
        );

        let pairs: HandlePairSeq = vec![pair];
        assert!(pairs.render_flat().starts_with("size = 1\npair[0]:\n  first:\n"));
    }

    #[test]
    fn map_layout() {
        let mut map: HandleMap = HandleMap::new();
        map.insert(concept("k"), concept("v"));
        assert_eq!(
            map.render_flat(),
            "size = 1\nkey[0]:\n  (ConceptNode \"k\")\nvalue[0]:\n  (ConceptNode \"v\")\n"
        );

        let maps: HandleMapSeq = vec![map];
        assert!(maps.render_flat().starts_with("size = 1\nmap[0]:\n  size = 1\n"));
    }

    #[test]
    fn multimap_renders_nested_sets() {
        let mut multimap: HandleMultimap = HandleMultimap::new();
        multimap.entry(concept("k")).or_default().insert(concept("v"));
        let out = multimap.render_flat();
        assert!(out.contains("value[0]:\n  size = 1\n  atom[0]:\n    (ConceptNode \"v\")\n"));
    }

    #[test]
    fn hash_set_renders_reproducibly() {
        let names = ["delta", "alpha", "charlie", "bravo"];
        let first: UnorderedHandleSet = names.iter().map(|n| ByContent::new(concept(n))).collect();
        let second: UnorderedHandleSet = names
            .iter()
            .rev()
            .map(|n| ByContent::new(concept(n)))
            .collect();
        assert_eq!(first.render_flat(), second.render_flat());
    }

    #[test]
    fn counter_layout() {
        let mut counter: HandleCounter = HandleCounter::new();
        counter.add(ByContent::new(concept("cat")), 2.5);
        assert_eq!(
            counter.render_flat(),
            "size = 1\natom[0]:\n  (ConceptNode \"cat\")\ncount[0]: 2.5\n"
        );
    }

    #[test]
    fn type_set_layout() {
        let types: TypeSet = [AtomType::ListLink, AtomType::ConceptNode].into_iter().collect();
        assert_eq!(
            types.render_flat(),
            "size = 2\ntype[0]:\n  ConceptNode\ntype[1]:\n  ListLink\n"
        );
    }
}
