//! Beastbound engine.
//!
//! The real-time duel turn-arbitration service and procedural quest/gacha
//! generation engine. Transport-agnostic: embedders wire the [`App`] to
//! their request handlers and hand observer channels to the
//! [`api::ConnectionManager`].

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::{App, ContentConfig};
