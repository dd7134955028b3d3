//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the Beacon service.
//! Each handler is responsible for processing specific HTTP requests and returning
//! appropriate responses.
//!
//! ## Available Handlers
//!
//! - **Root** (`root`) - Greeting endpoint
//! - **Status** (`status`) - Status check creation, listing, and URL checks
//! - **Health Check** (`health_check`) - Application and store health monitoring

mod health_check;
mod root;
mod status;

pub use health_check::*;
pub use root::*;
pub use status::*;
