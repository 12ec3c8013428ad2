mod classifier;
mod errors;
mod ingest_engine;
mod summary;
mod upload_gate;

pub use classifier::{classify, Classification};
pub use errors::UploadError;
pub use ingest_engine::IngestEngine;
pub use summary::{ResetSummary, SetSizes, UploadSummary};
pub use upload_gate::UploadGate;
