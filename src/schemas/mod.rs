//! Request and response bodies

pub mod auth;
pub mod booking;
pub mod form;
