//! Structural algorithms over any [`DigraphRef`](crate::core::DigraphRef).
//!
//! The algorithms that build a new digraph take a
//! [`DigraphFactory`](crate::core::DigraphFactory), so the result can be of any
//! [`DigraphMut`](crate::core::DigraphMut) implementation.

pub mod cycle;
mod reverse;
mod subgraph;

pub use cycle::{is_acyclic, Cycle};
pub use reverse::reverse;
pub use subgraph::subgraph;
