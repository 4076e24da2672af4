//! Term data model
//!
//! Terms are leaves (identifiers) or applications of an identifier to an
//! ordered list of child terms. Equality and hashing are structural.

pub mod substitution;
pub mod term;

pub use term::{Leaf, LeafKind, Term};
