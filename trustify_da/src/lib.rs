pub mod config;
pub mod host;
pub mod policy;
pub mod probes;

pub use trustify_da_types::{AnalysisReport, Severity};
