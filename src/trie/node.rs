use super::segment::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Literal,
    Param,
    Wildcard,
}

/// One segment of a registered pattern.
#[derive(Debug)]
pub struct Node<T> {
    pub(super) kind: NodeKind,
    pub(super) segment: Box<str>,
    pub(super) pattern: Box<str>,
    pub(super) children: Vec<Node<T>>,
    pub(super) payload: Option<T>,
}

impl<T> Node<T> {
    pub(super) fn root() -> Self {
        Self {
            kind: NodeKind::Literal,
            segment: "/".into(),
            pattern: "/".into(),
            children: Vec::new(),
            payload: None,
        }
    }

    pub(super) fn from_segment(seg: &Segment<'_>) -> Self {
        Self {
            kind: seg.kind,
            segment: seg.text.into(),
            pattern: seg.rest.into(),
            children: Vec::new(),
            payload: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Literal text, or the parameter label (colon included) for `Param` nodes.
    #[inline]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// The sub-pattern this node was created from.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    #[inline]
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub(super) fn wildcard_child(&self) -> Option<&Node<T>> {
        self.children
            .iter()
            .find(|c| c.kind == NodeKind::Wildcard)
    }

    /// The node answering for an address that ends here.
    ///
    /// A node without a payload defers to its wildcard child, which absorbs
    /// the empty suffix.
    pub(super) fn terminal(&self) -> &Node<T> {
        if self.payload.is_some() {
            return self;
        }
        self.wildcard_child().unwrap_or(self)
    }

    pub(super) fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
