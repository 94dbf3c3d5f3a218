use crate::trie::Params;

use smallvec::SmallVec;

const STAR: char = '*';
const SLASH: char = '/';

/// Rewrites addresses matched by a source pattern into a destination template.
///
/// ```
/// use trie_router::{Params, RouteConverter};
///
/// let conv = RouteConverter::new("/host/:id", "/api/v1/host/:id");
/// let mut params = Params::new();
/// params.insert(":id", "42");
/// assert_eq!(conv.convert("/host/42", &params), "/api/v1/host/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConverter {
    src: String,
    dest: String,
}

impl RouteConverter {
    pub fn new(src: &str, dest: &str) -> Self {
        Self {
            src: trim_star(src).to_owned(),
            dest: trim_star(dest).to_owned(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn dest(&self) -> &str {
        &self.dest
    }

    /// Substitutes `params` into both templates and replaces the first
    /// occurrence of the source in `addr`; `addr` is returned unchanged when
    /// the source does not occur in it.
    pub fn convert(&self, addr: &str, params: &Params) -> String {
        self.try_convert(addr, params)
            .unwrap_or_else(|| addr.to_owned())
    }

    /// Like [`RouteConverter::convert`], but `None` when nothing was rewritten.
    ///
    /// An address that stops where the wildcard began (`/all/pass` against
    /// `/all/pass/*`) lacks the trailing slash of the source, so the source
    /// and destination are retried without it.
    pub fn try_convert(&self, addr: &str, params: &Params) -> Option<String> {
        let (src, dest) = self.substitute(params);
        if addr.contains(src.as_str()) {
            return Some(addr.replacen(src.as_str(), &dest, 1));
        }

        let src = trim_slash(&src)?;
        if !addr.contains(src) {
            return None;
        }
        let dest = trim_slash(&dest).unwrap_or(&dest);
        Some(addr.replacen(src, dest, 1))
    }

    fn substitute(&self, params: &Params) -> (String, String) {
        // longest label first so `:id` never eats into `:idx`
        let mut labels: SmallVec<[&(String, String); 8]> = params.iter().collect();
        labels.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut src = self.src.clone();
        let mut dest = self.dest.clone();
        for (name, value) in labels {
            src = src.replace(name.as_str(), value);
            dest = dest.replace(name.as_str(), value);
        }
        (src, dest)
    }
}

#[inline(always)]
fn trim_star(s: &str) -> &str {
    s.strip_suffix(STAR).unwrap_or(s)
}

/// Drops a trailing slash unless that would leave nothing.
fn trim_slash(s: &str) -> Option<&str> {
    s.strip_suffix(SLASH).filter(|t| !t.is_empty())
}
