//! Shared test fixtures and helpers
//!
//! - `fixtures` - Response bodies and match specs from real probe runs
//! - `mocks` - Scripted `Transport` implementation
//! - `server` - Local HTTP server for end-to-end requests

pub mod mocks;
