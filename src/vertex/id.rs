use bstr::{BString, ByteSlice};
use lazy_static::lazy_static;
use regex::bytes::Regex;

use std::{fmt::Display, hash::Hash};

/// Trait for the types that can be used as vertex IDs; will probably
/// only be usize and BString. IDs are assigned by whoever builds the
/// graph, this crate only compares, hashes and prints them.
pub trait VertexId: Clone + Eq + Hash + Display {
    fn parse_id(input: &[u8]) -> Option<Self>;
}

impl VertexId for usize {
    fn parse_id(input: &[u8]) -> Option<Self> {
        input.to_str().ok()?.parse::<usize>().ok()
    }
}

impl VertexId for BString {
    /// Accepts the same names as GFA segment names; the whole input
    /// must match.
    fn parse_id(input: &[u8]) -> Option<Self> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"(?-u)^[!-)+-<>-~][!-~]*$").unwrap();
        }
        RE.find(input).map(|s| BString::from(s.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_usize_ids() {
        assert_eq!(usize::parse_id(b"42"), Some(42));
        assert_eq!(usize::parse_id(b"contig1"), None);
        assert_eq!(usize::parse_id(b""), None);
    }

    #[test]
    fn parse_bstring_ids() {
        assert_eq!(
            BString::parse_id(b"contig_12"),
            Some(BString::from("contig_12"))
        );
        assert_eq!(BString::parse_id(b"*star"), None);
        assert_eq!(BString::parse_id(b"has space"), None);
        assert_eq!(BString::parse_id(b""), None);
    }
}
