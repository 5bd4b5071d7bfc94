pub mod config;
pub mod error;
pub mod exporter;
pub mod parser;
pub mod scanner;
pub mod server;
pub mod ts_generator;
