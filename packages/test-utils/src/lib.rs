//! Random key material and addresses for staking message tests.
//!
//! Generators return raw bytes and strings so any crate can use them without a dependency
//! cycle.

mod datagen;

pub use datagen::*;
