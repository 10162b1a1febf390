//! # route-bench
//!
//! A benchmarking harness for comparing route-matching latency across
//! independent URL routers under synthetic workloads.
//!
//! ## Features
//!
//! - Synthetic route corpus generation with configurable route and
//!   parameter counts
//! - First-route, last-route, and unknown-route probe paths
//! - Warm-lookup and cold-start scenario timing
//! - Pluggable result printers (table, markdown, JSON)
//!
//! ## Architecture
//!
//! The harness implements no routing algorithm of its own. Routers under
//! test are integrated through the [`adapters::RouterAdapter`] trait and
//! consumed only via their build and lookup capabilities. The [`corpus`]
//! module generates the synthetic route set and probe paths, and the
//! [`bench`] module executes registered scenarios strictly in registration
//! order, timing only each scenario's timed phase.

pub mod adapters;
pub mod bench;
pub mod cli;
pub mod config;
pub mod corpus;
