//! Catalog Validation API Library
//!
//! A small HTTP API demonstrating request validation with Axum: query
//! parameters, path parameters, typed JSON bodies, nested models, and
//! body-embedding conventions, served over an in-memory catalog.

pub mod catalog;
pub mod config;
pub mod http;

pub use config::ServerConfig;
pub use http::HttpServer;
