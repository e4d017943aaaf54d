//! Growable contiguous buffer of fixed-size records.
//!
//! [`Buffer`] stores plain `Copy` records back to back in a single allocation that doubles
//! when it runs out of room. Besides positional access it offers sparse-style writes
//! (`safe_set`), bulk writes (`set_some`, `set_multiple`), merging, and order-preserving
//! removal of one position or a whole batch of them.
//!
//! Enable the `logging` feature to have reallocations and batch operations reported through
//! the `log` crate.

#[macro_use]
mod logging;

mod buffer;
mod bulk;
mod config;
mod error;
mod raw;
mod remove;

pub use buffer::Buffer;
pub use config::Limits;
pub use error::CapacityError;

#[cfg(test)]
mod model_tests;
