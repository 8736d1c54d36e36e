pub mod algorithm;
pub mod config;
pub mod grouping;
pub mod windows;

pub use algorithm::correlate;
pub use config::CorrelationConfig;
