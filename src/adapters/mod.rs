//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - HTTP(S) fetching with `reqwest`

pub mod http;

pub use http::{HttpOptions, HttpTransport};
