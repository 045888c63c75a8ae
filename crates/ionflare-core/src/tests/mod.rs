//! Crate-level test module.
//!
//! Per-module unit tests live next to their code; this directory holds
//! the cross-cutting suites:
//!
//! - `scenarios.rs`: feature-level tests driving a ship through whole
//!   ticks (forces, thrust, rotation, combat, resource lifecycles)
//! - `properties.rs`: property-based tests for velocity limiting and
//!   integration invariants
//! - `helpers.rs`: shared setup utilities

mod helpers;
mod scenarios;
