//! # Middleware Components
//!
//! This module contains layers that handle cross-cutting concerns such as
//! cross-origin access.

pub mod cors;

pub use cors::cors_layer;
