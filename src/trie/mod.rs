mod error;
mod flat;
mod imp;
mod insert;
mod node;
mod params;
mod segment;
mod structural;

pub use self::error::TrieError;
pub use self::node::{Node, NodeKind};
pub use self::params::Params;
pub use self::structural::{Matched, TreeMatch};

/// A path-routing trie.
///
/// Children keep their insertion order, which decides precedence between
/// ambiguous siblings: with `/a/*` registered before `/a/test`, the address
/// `/a/test` resolves to the wildcard.
#[derive(Debug)]
pub struct Trie<T> {
    root: Node<T>,
}
