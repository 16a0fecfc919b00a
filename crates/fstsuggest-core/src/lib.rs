// Public fallible APIs in this crate share one concrete error contract (`SuggestError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod automaton;
pub mod completion;
pub mod config;
pub mod error;
pub mod models;

#[cfg(test)]
pub(crate) mod test_support;

pub use automaton::{FstAutomaton, Label, WeightedAutomaton};
pub use completion::{Completer, checked_limit};
pub use config::CompleterConfig;
pub use error::{Result, SuggestError};
pub use models::{Completion, LookupOptions, RankingMode};
