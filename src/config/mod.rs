mod engine_config;
mod errors;
mod policy;

pub use engine_config::EngineConfig;
pub use errors::ConfigError;
pub use policy::{CollectionsRule, SignConvention, UploadPolicy};
