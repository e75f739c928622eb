//! # Lumore Admin Architecture
//!
//! `lumore_admin` is the **client-side core of the Lumore admin tooling**: the
//! typed filter builder used to segment users, the recipient and sender-email
//! helpers behind campaigns, session persistence, and a request facade over the
//! admin HTTP API. The `lumore-admin` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api/)                                           │
//! │  - Builds requests from filters, recipients, senders        │
//! │  - Validates input, maps HTTP failures to LumoreError       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain Layer (filters/, recipients.rs, senders.rs)         │
//! │  - Pure functions over Rust types                           │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Edges (transport/, session/, config.rs)                    │
//! │  - Transport trait: the HTTP client lives outside the crate │
//! │  - SessionStore trait: file-backed or in-memory             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Filters
//!
//! A filter set maps catalog keys to typed values. Raw text from a form or a
//! command line goes through [`filters::parse_value`] using the kind the
//! [`filters::FIELDS`] catalog declares for the key, so a value in a set is
//! always well-typed. Sets encode to query parameters for listings and to a
//! native JSON object for group requests.
//!
//! ## Testing Strategy
//!
//! 1. **Domain** (`filters/`, `recipients.rs`, `senders.rs`): thorough unit tests.
//! 2. **API** (`api/`): request shape and error mapping, checked against
//!    [`transport::canned::CannedTransport`].
//! 3. **CLI** (`tests/`): the binary run end to end with `assert_cmd` in a
//!    temporary `LUMORE_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`filters`]: Field catalog, value parsing, filter sets, encoders
//! - [`recipients`]: Recipient list parsing
//! - [`senders`]: Campaign sender address validation
//! - [`session`]: Admin session storage
//! - [`transport`]: Request/response types and the `Transport` trait
//! - [`config`]: Configuration and directory discovery
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod recipients;
pub mod senders;
pub mod session;
pub mod transport;
