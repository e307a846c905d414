//! Types shared across the booker web crates

#[macro_use]
extern crate tracing;

mod error;

pub use error::*;
