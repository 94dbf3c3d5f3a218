use super::error::TrieError;
use super::node::{Node, NodeKind};
use super::segment::{self, Segment};
use super::Trie;

use tracing::{debug, trace};

impl<T> Trie<T> {
    pub(super) fn insert_payload(&mut self, pattern: &str, data: T) -> Result<(), TrieError> {
        // validate the whole pattern first so a rejected insert leaves no nodes behind
        let segments = segment::parse_address(pattern)?;

        let mut node = &mut self.root;
        for seg in segments.iter() {
            node = node.child_for(seg);
        }
        node.payload = Some(data);

        debug!(pattern, "route registered");
        Ok(())
    }
}

impl<T> Node<T> {
    /// Reuses the sibling that `seg` collapses onto, or appends a new one.
    fn child_for(&mut self, seg: &Segment<'_>) -> &mut Node<T> {
        let found = self.children.iter().position(|c| match seg.kind {
            NodeKind::Literal => c.kind == NodeKind::Literal && *c.segment == *seg.text,
            // one param slot per level, the first label wins
            NodeKind::Param | NodeKind::Wildcard => c.kind == seg.kind,
        });

        let idx = match found {
            Some(i) => i,
            None => {
                trace!(segment = seg.text, pattern = seg.rest, "new trie node");
                self.children.push(Node::from_segment(seg));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }
}
