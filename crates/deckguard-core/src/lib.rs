//! Core domain models for deckguard
//!
//! This crate contains:
//! - The outline payload returned to the add-in (Outline, Slide)
//! - Topic extraction from raw request bodies

pub mod outline;
pub mod request;

pub use outline::{Outline, Slide};
pub use request::{FALLBACK_TOPIC, OutlineRequest, topic_from_body};
