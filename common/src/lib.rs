//! FxLookup Common Types
//!
//! This crate contains the monetary value types shared across FxLookup:
//! currency identifiers, amounts and exchange-rate entries.

pub mod monetary;

pub use monetary::*;
