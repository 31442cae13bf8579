//! Network metrics collection and exposition.
//!
//! This module holds the Prometheus metric registry, the interface enumerator,
//! the per-interface sampler and the periodic collection loop tying them together.

pub mod collector;
pub mod interfaces;
pub mod registry;
pub mod sampler;

// Re-export commonly used items
pub use collector::{CycleReport, NetworkCollector};
pub use interfaces::{InterfaceSource, SysinfoInterfaces};
pub use registry::NetworkMetrics;
pub use sampler::{InterfaceSample, SimulatedSampler, StatsSampler};
