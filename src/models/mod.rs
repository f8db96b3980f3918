//! Models Module
//!
//! Data structures decoded from PokeAPI responses.

pub mod responses;

pub use responses::*;
