#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The address is empty or does not start with `/`.
    #[error("address is invalid")]
    InvalidAddress,
    /// A `*` segment is followed by further segments.
    #[error("cannot parse address: wildcard must be the last segment")]
    ParseAddress,
    /// No registered pattern accepts the address.
    #[error("no route matches the address")]
    NotMatch,
}

impl TrieError {
    /// Misses are routine, everything else is a caller bug.
    pub fn is_not_match(&self) -> bool {
        matches!(self, Self::NotMatch)
    }
}
