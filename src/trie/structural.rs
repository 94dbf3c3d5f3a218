use super::error::TrieError;
use super::node::{Node, NodeKind};
use super::params::Params;
use super::segment::{self, Segment, Segments};
use super::Trie;

use tracing::trace;

/// A matched node, copied out of the trie without its siblings.
///
/// Each level keeps at most one child, so a match result is a linear chain
/// from the root down to the node that answered the address.
#[derive(Debug)]
pub struct Matched<'t, T> {
    kind: NodeKind,
    segment: &'t str,
    pattern: &'t str,
    payload: Option<&'t T>,
    child: Option<Box<Matched<'t, T>>>,
}

impl<'t, T> Matched<'t, T> {
    fn shallow(node: &'t Node<T>) -> Self {
        Self {
            kind: node.kind,
            segment: &node.segment,
            pattern: &node.pattern,
            payload: node.payload.as_ref(),
            child: None,
        }
    }

    fn with_child(mut self, child: Matched<'t, T>) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn segment(&self) -> &'t str {
        self.segment
    }

    #[inline]
    pub fn pattern(&self) -> &'t str {
        self.pattern
    }

    #[inline]
    pub fn payload(&self) -> Option<&'t T> {
        self.payload
    }

    #[inline]
    pub fn child(&self) -> Option<&Matched<'t, T>> {
        self.child.as_deref()
    }

    /// The innermost node of the chain.
    pub fn last(&self) -> &Matched<'t, T> {
        let mut cur = self;
        while let Some(child) = cur.child() {
            cur = child;
        }
        cur
    }

    /// Payload of the innermost node.
    pub fn value(&self) -> Option<&'t T> {
        self.last().payload
    }

    /// Walks the chain alongside the parsed address, binding every `Param`
    /// label to the aligned address segment. Stops at a wildcard.
    fn bind(&self, query: &[Segment<'_>], params: &mut Params) {
        // the chain starts at the root, which has no address segment
        let mut cur = self.child();
        for seg in query {
            let node = match cur {
                Some(node) => node,
                None => return,
            };
            match node.kind {
                NodeKind::Wildcard => return,
                NodeKind::Param => params.insert(node.segment, seg.text),
                NodeKind::Literal => {}
            }
            cur = node.child();
        }
    }
}

/// Result of a structural match: the matched chain and the parsed address
/// it was matched against.
#[derive(Debug)]
pub struct TreeMatch<'t, 'p, T> {
    matched: Matched<'t, T>,
    query: Segments<'p>,
}

impl<'t, 'p, T> TreeMatch<'t, 'p, T> {
    #[inline]
    pub fn matched(&self) -> &Matched<'t, T> {
        &self.matched
    }

    #[inline]
    pub fn value(&self) -> Option<&'t T> {
        self.matched.value()
    }

    pub fn extract_params(&self, params: &mut Params) {
        self.matched.bind(&self.query, params)
    }

    pub fn params(&self) -> Params {
        let mut params = Params::new();
        self.extract_params(&mut params);
        params
    }
}

impl<T> Trie<T> {
    pub(super) fn match_structural<'t, 'p>(
        &'t self,
        addr: &'p str,
    ) -> Result<TreeMatch<'t, 'p, T>, TrieError> {
        // the parsed address is a trie with a single branch, kept as a flat slice
        let query = segment::parse_address(addr)?;
        match self.root.match_tree(&query) {
            Ok(matched) => Ok(TreeMatch { matched, query }),
            Err(e) => {
                trace!(addr, "no route matched");
                Err(e)
            }
        }
    }
}

impl<T> Node<T> {
    /// Matches the address segments that follow this already accepted node.
    fn match_tree<'t>(&'t self, rest: &[Segment<'_>]) -> Result<Matched<'t, T>, TrieError> {
        if self.kind == NodeKind::Wildcard {
            return Ok(Matched::shallow(self));
        }

        let (head, tail) = match rest.split_first() {
            Some(split) => split,
            None => {
                let terminal = self.terminal();
                let matched = Matched::shallow(self);
                return if std::ptr::eq(terminal, self) {
                    Ok(matched)
                } else {
                    Ok(matched.with_child(Matched::shallow(terminal)))
                };
            }
        };

        self.children
            .iter()
            .find_map(|child| child.accept_tree(head, tail))
            .map(|m| Matched::shallow(self).with_child(m))
            .ok_or(TrieError::NotMatch)
    }

    fn accept_tree<'t>(
        &'t self,
        head: &Segment<'_>,
        tail: &[Segment<'_>],
    ) -> Option<Matched<'t, T>> {
        if self.kind == NodeKind::Literal && *self.segment != *head.text {
            return None;
        }
        self.match_tree(tail).ok()
    }
}
