//! Shared helpers used across domains.

pub mod serde_util;
