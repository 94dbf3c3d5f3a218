use super::error::TrieError;
use super::node::NodeKind;

use smallvec::SmallVec;

pub(super) type Segments<'a> = SmallVec<[Segment<'a>; 8]>;

const STAR: &str = "*";
const COLON: char = ':';
const SLASH: char = '/';
const QUESTION: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Segment<'a> {
    pub(super) kind: NodeKind,
    pub(super) text: &'a str,
    /// The sub-pattern starting at this segment.
    pub(super) rest: &'a str,
}

impl<'a> Segment<'a> {
    fn classify(text: &'a str, rest: &'a str) -> Self {
        let kind = if text == STAR {
            NodeKind::Wildcard
        } else if text.starts_with(COLON) {
            NodeKind::Param
        } else {
            NodeKind::Literal
        };
        Self { kind, text, rest }
    }
}

/// Splits an address (or pattern) that starts with `/` into classified segments.
pub(super) fn parse_address(addr: &str) -> Result<Segments<'_>, TrieError> {
    if !addr.starts_with(SLASH) {
        return Err(TrieError::InvalidAddress);
    }
    parse(&addr[1..])
}

/// `path` is the text following the leading slash.
pub(super) fn parse(path: &str) -> Result<Segments<'_>, TrieError> {
    let path = match path.find(QUESTION) {
        Some(end) => &path[..end],
        None => path,
    };

    let mut segments: Segments<'_> = SmallVec::new();
    let mut offset = 0;
    for text in path.split(SLASH) {
        let start = offset;
        offset += text.len() + 1;
        if text.is_empty() {
            continue;
        }
        if let Some(last) = segments.last() {
            if last.kind == NodeKind::Wildcard {
                return Err(TrieError::ParseAddress);
            }
        }
        segments.push(Segment::classify(text, &path[start..]));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(path: &str) -> Vec<&str> {
        parse(path).unwrap().iter().map(|s| s.text).collect()
    }

    #[test]
    fn split_and_truncate() {
        assert_eq!(texts("hello/:id/world"), ["hello", ":id", "world"]);
        assert_eq!(texts("hello//world/"), ["hello", "world"]);
        assert_eq!(texts("hello/12?x=1/2"), ["hello", "12"]);
        assert_eq!(texts("a/?x"), ["a"]);
        assert!(texts("").is_empty());
        assert!(texts("?q").is_empty());
    }

    #[test]
    fn classify_and_rest() {
        let segs = parse("u/:id/*").unwrap();
        let kinds: Vec<NodeKind> = segs.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [NodeKind::Literal, NodeKind::Param, NodeKind::Wildcard]
        );
        assert_eq!(segs[1].rest, ":id/*");
        assert_eq!(segs[2].rest, "*");

        let segs = parse("a/*x/b:c").unwrap();
        assert!(segs.iter().all(|s| s.kind == NodeKind::Literal));
    }

    #[test]
    fn wildcard_must_be_last() {
        assert_eq!(parse("a/*/b"), Err(TrieError::ParseAddress));
        assert!(parse("a/*/").is_ok());
        assert!(parse("a/*?q=1/2").is_ok());
        assert_eq!(parse_address("a/b"), Err(TrieError::InvalidAddress));
        assert_eq!(parse_address(""), Err(TrieError::InvalidAddress));
    }
}
