//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → server.rs (Axum router + middleware)
//!     → extract.rs (typed extraction + declared-constraint checks)
//!     → handler (pure function of validated input)
//!     → JSON response (error.rs owns the 422 contract)
//! ```

pub mod error;
pub mod extract;
pub mod images;
pub mod items;
pub mod server;
pub mod updates;

pub use error::{FieldError, ValidationRejection};
pub use extract::{ApiJson, ApiPath, ApiQuery, Validate};
pub use server::{AppState, HttpServer};
