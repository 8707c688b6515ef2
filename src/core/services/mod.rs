//! Business logic services
//!
//! Pure logic that operates on domain models. Only [`run_probe`] touches a
//! port, and it does so through the [`Transport`](crate::core::ports::Transport)
//! trait.
//!
//! - [`url`] - Build the URL for a target
//! - [`corpus`] - Prepare a body for term matching
//! - [`classifier`] - Turn a fetch result into an outcome
//! - [`probe`] - Fetch and classify in one step

pub mod classifier;
pub mod corpus;
pub mod probe;
pub mod url;

pub use classifier::{classify, classify_body};
pub use corpus::Corpus;
pub use probe::run_probe;
pub use url::build_url;
