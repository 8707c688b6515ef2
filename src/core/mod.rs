//! Core domain logic for the probe
//!
//! This module contains pure logic with no I/O dependencies.
//! The network is abstracted through the [`ports::Transport`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ProbeTarget`, `MatchSpec`, `Outcome`, `Status`)
//! - `services/` - URL building, body classification, probe orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
