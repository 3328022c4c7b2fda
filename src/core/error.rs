use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationErrorKind {
    ReadOnly,
}

impl fmt::Display for MutationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MutationErrorKind::ReadOnly => "the digraph is read-only",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("adding vertex failed: {kind}")]
pub struct AddVertexError<V> {
    pub vertex: V,
    pub kind: MutationErrorKind,
}

impl<V> AddVertexError<V> {
    pub fn new(vertex: V, kind: MutationErrorKind) -> Self {
        Self { vertex, kind }
    }
}

/// Error of a rejected edge insertion.
///
/// The endpoints and the payload are handed back to the caller.
#[derive(Debug, Error, PartialEq)]
#[error("putting edge failed: {kind}")]
pub struct PutEdgeError<V, E> {
    pub from: V,
    pub to: V,
    pub edge: E,
    pub kind: MutationErrorKind,
}

impl<V, E> PutEdgeError<V, E> {
    pub fn new(from: V, to: V, edge: E, kind: MutationErrorKind) -> Self {
        Self {
            from,
            to,
            edge,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("removing failed: {kind}")]
pub struct RemoveError {
    pub kind: MutationErrorKind,
}

impl RemoveError {
    pub fn new(kind: MutationErrorKind) -> Self {
        Self { kind }
    }
}
