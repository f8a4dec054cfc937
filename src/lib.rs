pub mod cli;
pub mod config;
pub mod detect;
pub mod detectors;
pub mod dispatch;
pub mod errors;
pub mod models;
pub mod probe;
pub mod report;
