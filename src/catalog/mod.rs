//! In-memory catalog subsystem.
//!
//! # Responsibilities
//! - Hold the static identifier → title mapping, seeded once at startup
//! - Serve get-or-none lookups and uniform random selection
//! - Define the request/response models the item endpoints validate and echo

pub mod store;
pub mod types;

pub use store::Catalog;
pub use types::{Image, Item, User};
