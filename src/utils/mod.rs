//! # Utility Modules
//!
//! This module contains configuration loading and constants used
//! throughout the Beacon service.
//!
//! ## Available Utilities
//!
//! - **Config** (`config`) - Environment-driven settings and CORS policy
//! - **Constants** (`constant`) - Application-wide limits and defaults
//! - **Telemetry** (`telemetry`) - Tracing subscriber setup

pub mod config;
pub mod constant;
pub mod telemetry;
