#![doc(hidden)]

pub mod testing;

#[cfg(feature = "proptest")]
pub mod proptest;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;

#[cfg(feature = "arbitrary")]
pub mod modeling;
