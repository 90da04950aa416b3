//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `browse.rs` — posts/show/tags/validate over the catalog.
//! - `compare.rs` — compare subcommand tree (subjects/chart/score).
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod browse;
pub mod compare;

pub use browse::handle_browse_commands;
pub use compare::handle_compare_commands;
