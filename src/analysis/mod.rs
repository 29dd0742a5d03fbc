// src/analysis/mod.rs
pub mod distribution;

// Re-export commonly used types
pub use distribution::{
    aggregate,
    compare,
    parse_percentage,
    AnalysisError,
    ComparisonColumn,
    ComparisonTable,
    Distribution,
};
