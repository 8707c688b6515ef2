//! Port traits (interfaces) for external dependencies
//!
//! The classifier never talks to the network itself. It receives either a
//! body or a [`FetchError`] from a [`Transport`] implementation.
//!
//! Implementations live in the `adapters` module.

mod transport;

#[cfg(test)]
pub use transport::MockTransport;
pub use transport::{FetchError, Transport};
