//! # agent-licensing
//!
//! Validates whether the agents on uploaded policy files hold an active license in
//! each policy's issue state, and flags the ones that need an appointment.
//!
//! ## Usage
//!
//! ```bash
//! agent-licensing validate policies.csv [--reference licenses.json] [--export results.csv]
//! agent-licensing serve [--bind 0.0.0.0:3000]
//! ```
//!
//! ## Modules
//!
//! - `cli` - Argument parsing and subcommand handlers
//! - `config` - Layered configuration (defaults, TOML file, environment)
//! - `error` - Coded error type shared by every module
//! - `input` - Uploaded CSV parsing into typed policy rows
//! - `licensing` - Reference license records, lookup table, sources and expiry report
//! - `server` - HTTP service exposing validation and export
//! - `validation` - Row validation, summaries, result views and CSV export
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod licensing;
pub mod server;
pub mod validation;

pub use error::{LicensingError, Result};
