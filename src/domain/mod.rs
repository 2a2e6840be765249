//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Records decoded from the envelope payload
//! - `client.rs` — Sub-client that builds query parameters for its endpoints

pub mod post;
pub mod user;
