// Psychology profiling exports
pub mod compatibility;
pub mod profiler;

pub use compatibility::CompatibilityEngine;
pub use profiler::Profiler;
