//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result]
//! alias. Variants cover invalid configuration, object IDs that do not fit the
//! hit-color space, edges that reference missing nodes and edges that cannot be
//! turned into a quad.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("object id {id} does not fit in 24 bits")]
    IdOverflow { id: u64 },

    #[error("edge {index} ({from} -> {to}) references a node outside 0..{node_count}")]
    EdgeOutOfRange {
        index: usize,
        from: usize,
        to: usize,
        node_count: usize,
    },

    #[error("edge {from} -> {to} has coincident endpoints")]
    DegenerateEdge { from: usize, to: usize },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn display_names_offending_edge() {
        let err = Error::EdgeOutOfRange {
            index: 3,
            from: 1,
            to: 9,
            node_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "edge 3 (1 -> 9) references a node outside 0..4"
        );
    }

    #[test]
    fn overflow_reports_id() {
        let err = Error::IdOverflow { id: 1 << 24 };
        assert_eq!(err.to_string(), "object id 16777216 does not fit in 24 bits");
    }
}
