//! Term text parsing

pub mod term;

pub use term::parse;

#[cfg(test)]
mod proptest_tests;
