pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod pipeline;
pub mod publish;
pub mod report;
pub mod seed;
pub mod types;
pub mod validate;
