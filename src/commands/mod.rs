pub mod scan;

pub use scan::{ScanSummary, run_scan};
