// Adapters layer: concrete car sources (built-in sample data, CSV files).

pub mod fleet;

pub use fleet::{CsvFleet, SampleFleet};
