//! FxLookup Console
//!
//! Interactive front end that reads a base currency, a target currency and
//! an amount, prints the conversion and keeps going until input ends.

pub mod args;
pub mod session;

pub use args::Args;
pub use session::{run_session, EntryError, OutputFormat, SessionSummary, SEPARATOR};
