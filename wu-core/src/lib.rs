//! Core library for the `wu` command-line client.
//!
//! This crate defines:
//! - Configuration handling (`$HOME/.condrc`)
//! - The feature/request model, station normalization, and composite URL
//!   construction
//! - The HTTP transport and composite-response decoding
//!
//! It is used by `wu-cli`, but can also be reused by other binaries.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod request;

pub use client::{ApiClient, Transport, retrieve};
pub use config::Config;
pub use error::Error;
pub use model::ObservationSet;
pub use request::{DEFAULT_STATION, Feature, build_url, normalize_station};
