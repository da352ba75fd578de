//! CLI command implementations.

pub mod metrics;
pub mod sample;

// Re-export submodules for convenience
pub use metrics::MetricsArgs;
pub use sample::SampleArgs;
