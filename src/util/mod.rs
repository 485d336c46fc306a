//! Formatting helpers shared by the adapter.

pub mod message;
