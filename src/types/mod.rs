//! Common types used across the SimpleSwap client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
