//! A path-routing trie.
//!
//! Patterns are made of `/`-separated segments: literal text, named
//! parameters (`:id`) and a trailing wildcard (`*`). Among ambiguous
//! siblings the one registered first wins.
//!
//! ```
//! use trie_router::{Params, Trie};
//!
//! let mut trie: Trie<&str> = Trie::new();
//! trie.insert("/hello/:id/world/:name", "greet")
//!     .insert("/static/*", "files");
//!
//! let mut params = Params::new();
//! let data = trie.match_path("/hello/12/world/user?x=1", Some(&mut params)).unwrap();
//! assert_eq!(data, Some(&"greet"));
//! assert_eq!(params.get(":id"), Some("12"));
//! assert_eq!(params.get(":name"), Some("user"));
//!
//! assert_eq!(trie.match_path("/static/css/site.css", None).unwrap(), Some(&"files"));
//! ```

#![deny(unsafe_code)]

mod convert;
mod trie;

#[cfg(feature = "http-router")]
pub mod http_router;

#[cfg(feature = "rewrite")]
mod rewrite;

pub use crate::convert::RouteConverter;
pub use crate::trie::{Matched, Node, NodeKind, Params, TreeMatch, Trie, TrieError};

#[cfg(feature = "http-router")]
pub use crate::http_router::{HttpRouter, Method};

#[cfg(feature = "rewrite")]
pub use crate::rewrite::{RewriteConfig, RewriteError, RewriteRule, Rewriter};
