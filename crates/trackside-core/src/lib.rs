//! # trackside-core
//!
//! Foundation types for the trackside services.
//!
//! This crate provides the shared vocabulary the store and server crates
//! depend on:
//!
//! - **Records**: [`records::Race`] and [`records::SportEvent`], the
//!   materialized row types returned to callers, each carrying a derived
//!   [`records::Status`]
//! - **Filters**: [`filters::RaceFilter`], [`filters::EventFilter`], and
//!   [`filters::OrderSpec`], the request-side shapes accepted by `list`
//! - **Clock**: the [`clock::Clock`] abstraction used for status derivation,
//!   so "now" is injected rather than read ambiently
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other trackside crates.

#![deny(unsafe_code)]

pub mod clock;
pub mod filters;
pub mod records;

pub use clock::{Clock, FixedClock, SystemClock};
pub use filters::{EventFilter, OrderSpec, RaceFilter};
pub use records::{Race, SportEvent, Status};
