use super::error::TrieError;
use super::node::Node;
use super::params::Params;
use super::structural::TreeMatch;
use super::Trie;

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Trie<T> {
    pub fn new() -> Self {
        Self { root: Node::root() }
    }

    /// Registers `data` under `pattern`.
    ///
    /// # Panics
    /// Panics if the pattern is rejected, see [`Trie::try_insert`].
    pub fn insert(&mut self, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.insert_payload(pattern, data) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    /// Registers `data` under `pattern`, replacing the payload of an
    /// identical pattern registered earlier.
    ///
    /// Fails with [`TrieError::InvalidAddress`] if the pattern does not start
    /// with `/`, and with [`TrieError::ParseAddress`] if a `*` segment is not
    /// the last one. A rejected pattern leaves the trie untouched.
    pub fn try_insert(&mut self, pattern: &str, data: T) -> Result<&mut Self, TrieError> {
        self.insert_payload(pattern, data)?;
        Ok(self)
    }

    /// Walks the trie segment by segment.
    ///
    /// Parameter bindings of the winning route are written to `params` when
    /// given; nothing is written on a miss. `Ok(None)` means the address
    /// matched a node that carries no payload.
    pub fn match_path(
        &self,
        addr: &str,
        params: Option<&mut Params>,
    ) -> Result<Option<&T>, TrieError> {
        self.match_flat(addr, params)
    }

    /// Matches the parsed address against the trie as a tree, returning the
    /// chain of matched nodes.
    pub fn match_tree<'t, 'p>(
        &'t self,
        addr: &'p str,
    ) -> Result<TreeMatch<'t, 'p, T>, TrieError> {
        self.match_structural(addr)
    }

    /// Structural match followed by parameter extraction.
    pub fn find(&self, addr: &str) -> Result<(Option<&T>, Params), TrieError> {
        let m = self.match_structural(addr)?;
        Ok((m.value(), m.params()))
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}
