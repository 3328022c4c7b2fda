//! Traits every digraph implements and the errors they report.
//!
//! The contract is split the same way the operations are used:
//!
//! * [`DigraphRef`] for queries and iteration,
//! * [`DigraphMut`] for mutation, including removal through live
//!   [cursors](Cursor),
//! * [`DeriveDigraph`] for building new digraphs out of existing ones,
//! * [`DigraphFactory`] for creating empty digraphs of a particular kind,
//! * [`VertexMap`] for per-vertex state of algorithms.

pub mod error;

mod create;
mod cursor;
mod digraph;
mod visit;

pub use create::*;
pub use cursor::*;
pub use digraph::*;
pub use visit::*;
