//! # Taskdesk
//!
//! Taskdesk is a single-user assistant that tracks two kinds of records —
//! tasks (plain, deadline-bound, or time-ranged) and client contacts — in
//! memory during a session, persisting them to line-oriented flat files
//! between sessions.
//!
//! This crate is a library with a thin CLI binary on top, and the layering
//! matters: everything from [`ui::Ui`] inward takes plain Rust arguments and
//! returns plain Rust types. Nothing in the library touches stdin, stdout, or
//! the process exit code — the binary (`main.rs`) owns all of that, so the
//! same core could sit behind a different front end unchanged.
//!
//! ```text
//! input line
//!    │
//!    ▼
//! Command::from_input ──► ui::Ui::respond ──► TaskList / ClientList op
//!                                                  │
//!                                DataStore::save ◄─┘  (every mutation)
//!                                                  │
//!                       confirmation / error text ◄┘
//! ```
//!
//! ## Module overview
//!
//! - [`command`]: first-token classification into the fixed vocabulary
//! - [`datetime`]: permissive input parsing, strict storage encoding
//! - [`model`]: `Task` / `Client` value objects and their line codec
//! - [`tasks`] / [`clients`]: the in-memory stores and command behaviors
//! - [`store`]: the persistence seam (`FileStore` in production,
//!   `InMemoryStore` in tests)
//! - [`ui`]: the dispatcher and error boundary
//! - [`error`]: error types
//!
//! ## Durability model
//!
//! There is no incremental persistence: every mutating operation rewrites the
//! full record file before its confirmation message is returned. Loads treat
//! each line independently — a corrupted line is skipped and counted, never
//! fatal.

pub mod clients;
pub mod command;
pub mod datetime;
pub mod error;
pub mod model;
pub mod store;
pub mod tasks;
pub mod ui;
