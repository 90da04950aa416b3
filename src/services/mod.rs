//! Service layer containing business logic helpers.
//!
//! ## Service map
//! - `filter.rs` — search/tag-filter/listing over catalog posts.
//! - `scoring.rs` — compare session: selection, weights, charts, score cards.
//! - `config.rs` — user config file (default catalog override).
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod filter;
pub mod output;
pub mod scoring;
