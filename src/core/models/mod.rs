//! Domain models for the probe
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ProbeTarget`] - Where to send the request
//! - [`MatchSpec`] - Search terms and messages
//! - [`Outcome`] - The classified result
//! - [`Status`] - Monitoring status level and exit code

mod match_spec;
mod outcome;
mod target;

pub use match_spec::MatchSpec;
pub use outcome::{Outcome, Status};
pub use target::ProbeTarget;
