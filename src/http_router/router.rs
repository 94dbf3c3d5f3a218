use crate::trie::{Params, Trie, TrieError};

use std::collections::HashMap;

pub use http::Method;

/// One trie per HTTP method.
#[derive(Debug, Default)]
pub struct HttpRouter<T> {
    method_map: HashMap<Method, Trie<T>>,
}

impl<T> HttpRouter<T> {
    pub fn new() -> Self {
        Self {
            method_map: HashMap::new(),
        }
    }

    pub fn match_path(
        &self,
        method: &Method,
        path: &str,
        params: Option<&mut Params>,
    ) -> Result<Option<&T>, TrieError> {
        self.method_map
            .get(method)
            .ok_or(TrieError::NotMatch)?
            .match_path(path, params)
    }

    pub fn find(&self, method: &Method, path: &str) -> Result<(Option<&T>, Params), TrieError> {
        self.method_map
            .get(method)
            .ok_or(TrieError::NotMatch)?
            .find(path)
    }

    pub fn insert(&mut self, method: Method, pattern: &str, data: T) -> &mut Self {
        self.access_trie(method).insert(pattern, data);
        self
    }

    pub fn try_insert(
        &mut self,
        method: Method,
        pattern: &str,
        data: T,
    ) -> Result<&mut Self, TrieError> {
        self.access_trie(method).try_insert(pattern, data)?;
        Ok(self)
    }

    pub fn trie(&self, method: &Method) -> Option<&Trie<T>> {
        self.method_map.get(method)
    }
}

impl<T> HttpRouter<T> {
    fn access_trie(&mut self, method: Method) -> &mut Trie<T> {
        self.method_map.entry(method).or_insert_with(Trie::new)
    }
}
