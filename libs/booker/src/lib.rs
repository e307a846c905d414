//! # Booker
//!
//! Client for the external REST booking service that owns every booking,
//! its availability and the tokens needed to mutate it

#[macro_use]
extern crate tracing;

mod auth;
mod client;
mod error;
mod models;
mod window;

pub use auth::{AuthTokenFetcher, Credentials};
pub use client::BookingClient;
pub use error::BookerError;
pub use models::*;
pub use window::widen_window;
