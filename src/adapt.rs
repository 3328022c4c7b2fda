//! Digraph adapters.

pub mod read_only;

#[doc(inline)]
pub use read_only::{Freeze, ReadOnly};
