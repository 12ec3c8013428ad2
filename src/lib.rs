pub mod config;
pub mod engine;
pub mod ingest;
pub mod models;
pub mod query;
pub mod storage;
pub mod types;
pub mod validation;
