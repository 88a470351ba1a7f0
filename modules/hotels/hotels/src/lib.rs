//! Hotels Module
//!
//! Lists hotels and a hotel's rooms for attendees whose ticket grants hotel
//! access: the ticket must be paid, in-person, and include accommodation.
//!
//! ## Public API
//!
//! Models and the public error type live in `hotels-sdk` and are re-exported here.
//! The host builds a [`HotelsModule`] from a database connection and a
//! [`config::HotelsConfig`], then mounts it with [`HotelsModule::register_rest`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === PUBLIC API (from SDK) ===
pub use hotels_sdk::{Hotel, HotelWithRooms, HotelsError, Room, TicketStatus};

// === MODULE DEFINITION ===
pub mod module;
pub use module::HotelsModule;

pub mod config;
pub mod security;

// === INTERNAL MODULES ===
// Exposed for integration tests; not a stable API.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod auth;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
