//! # Annuaire Architecture
//!
//! Annuaire is a **UI-agnostic directory library**: an in-memory register of
//! member businesses and an event photo album, with search, contact export,
//! and a session-wide administrator gate. The interactive shell in `main.rs`
//! is just one client of it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Reads session input, renders listings, prompts for forms │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Enforces the administrator gate on member mutations      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (store.rs)                                    │
//! │  - In-memory member list and photo album, one per session   │
//! │  - Insertion-ordered members, newest-first photos           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sessions, not storage
//!
//! There is no persistence layer. A process is a session: the store is
//! seeded at startup ([`seed`]), mutated in memory, and dropped on exit.
//! The administrator flag ([`session`]) follows the same lifetime.
//!
//! Everything is synchronous and single-threaded; a command runs to
//! completion before the next line of input is read, so no mutation ever
//! races another.
//!
//! ## Platform seams
//!
//! The capabilities the core cannot provide for itself — image encoding,
//! confirmation, sharing, saving a card — are single-method traits in
//! [`platform`], injected by the client. Core logic that consumes one (the
//! photo upload flow) is tested against fakes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The in-memory record store
//! - [`model`]: Core data types (`Member`, `AlbumPhoto`, `SearchField`)
//! - [`session`]: The administrator access gate
//! - [`platform`]: Injected platform capabilities
//! - [`seed`]: Built-in and file-based initial member lists
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod platform;
pub mod seed;
pub mod session;
pub mod store;
