//! # CLI Layer
//!
//! The `lumore-admin` binary is **one client** of the library. This layer is
//! the only place that:
//! - Parses arguments (clap)
//! - Initializes logging
//! - Writes to stdout/stderr
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-command handlers
//! - `print`: colored terminal output

mod commands;
mod print;
mod setup;

pub use commands::run;
