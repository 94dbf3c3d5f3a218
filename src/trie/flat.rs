use super::error::TrieError;
use super::node::{Node, NodeKind};
use super::params::Params;
use super::segment;
use super::Trie;

use smallvec::SmallVec;
use tracing::trace;

type Bindings<'t, 'p> = SmallVec<[(&'t str, &'p str); 8]>;

impl<T> Trie<T> {
    pub(super) fn match_flat(
        &self,
        addr: &str,
        params: Option<&mut Params>,
    ) -> Result<Option<&T>, TrieError> {
        let segments = segment::parse_address(addr)?;
        let parts: SmallVec<[&str; 8]> = segments.iter().map(|s| s.text).collect();

        let mut bindings: Bindings<'_, '_> = SmallVec::new();
        let node = match self.root.descend(&parts, &mut bindings) {
            Some(node) => node,
            None => {
                trace!(addr, "no route matched");
                return Err(TrieError::NotMatch);
            }
        };

        if let Some(params) = params {
            for &(name, value) in bindings.iter() {
                params.insert(name, value);
            }
        }
        Ok(node.payload())
    }
}

impl<T> Node<T> {
    /// Tries every child in insertion order, first success wins.
    fn descend<'t, 'p>(
        &'t self,
        parts: &[&'p str],
        bindings: &mut Bindings<'t, 'p>,
    ) -> Option<&'t Node<T>> {
        let (&head, tail) = match parts.split_first() {
            Some(split) => split,
            None => return Some(self.terminal()),
        };
        self.children
            .iter()
            .find_map(|child| child.accept(head, tail, bindings))
    }

    fn accept<'t, 'p>(
        &'t self,
        head: &'p str,
        tail: &[&'p str],
        bindings: &mut Bindings<'t, 'p>,
    ) -> Option<&'t Node<T>> {
        match self.kind {
            NodeKind::Wildcard => return Some(self),
            NodeKind::Literal if *self.segment != *head => return None,
            _ => {}
        }

        let mark = bindings.len();
        if self.kind == NodeKind::Param {
            bindings.push((&*self.segment, head));
        }
        let found = self.descend(tail, bindings);
        if found.is_none() {
            // drop bindings made on the failed branch
            bindings.truncate(mark);
        }
        found
    }
}
