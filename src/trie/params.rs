use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Positional parameter bindings, keyed by label (`:id` -> `12`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(String, String); 8]>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if k == name { Some(v.as_str()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// Binds `name`, replacing the value of an existing binding in place.
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.buf.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => self.buf.push((name.to_owned(), value.to_owned())),
        }
    }

    pub fn clear(&mut self) {
        self.buf.clear()
    }
}

impl Deref for Params {
    type Target = [(String, String)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
