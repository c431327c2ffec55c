//! Shared test helpers for `qbgeo-core` integration tests.

pub mod projection;
