//! In-place sorting used to order each bucket before output.

pub mod heap;
