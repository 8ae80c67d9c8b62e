//! Optional operation counters for [`LfuCache`](crate::policy::lfu::LfuCache).
//!
//! Enabled with the `metrics` feature. Recording, snapshotting and export are
//! separate concerns, each behind its own trait in [`traits`].

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
