//! Command-line shell around the `platefetch` library.
//!
//! ## Structure
//!
//! - [`config`] - CLI arguments and the validated [`config::Config`].
//! - [`service`] - input validation in front of the library calls.
//! - [`http`] - the reqwest-backed fetch capability.
//! - [`commands`] - runs a validated action and prints the result.
//! - [`telemetry`] - tracing subscriber setup.

pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod telemetry;
