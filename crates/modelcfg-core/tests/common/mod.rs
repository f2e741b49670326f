//! Shared helpers for modelcfg-core integration tests.

pub mod fixtures;
