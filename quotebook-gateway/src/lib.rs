//! HTTP API gateway for the quotebook service.
//!
//! Serves the quote book (category listing, random quotes, submissions),
//! the geometry calculators and the health/time endpoints over a shared
//! in-memory [`quotebook_core::QuoteStore`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
