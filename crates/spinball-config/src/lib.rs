//! Configuration for the spinball viewer.
//!
//! Settings persist to disk as RON, tolerate missing or unknown fields, can be
//! overridden from the command line via clap, and support hot-reload checks.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{BallConfig, Config, DebugConfig, HudConfig, ProjectionConfig};
pub use error::ConfigError;
