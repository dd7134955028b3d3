//! # Business Logic Services
//!
//! This module contains the core business logic services for the Beacon service.
//! Services encapsulate domain-specific functionality and provide clean interfaces
//! for use by HTTP handlers.
//!
//! ## Available Services
//!
//! - **Store** (`store`) - Status check persistence with MongoDB and in-memory implementations
//! - **Status** (`status`) - Status check creation, listing, and health reporting
//! - **Probe** (`probe`) - Outbound URL reachability checks

pub mod probe;
pub mod status;
pub mod store;
