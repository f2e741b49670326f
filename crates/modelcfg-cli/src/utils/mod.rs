//! Shared helpers for handlers.

pub mod input;
