use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::errors::ConfigError;
use crate::config::{CollectionsRule, SignConvention, UploadPolicy};

const DEFAULT_CARD_NUMBER_LENGTH: usize = 16;
const DEFAULT_ITEMS_PER_PAGE: usize = 20;
const MAX_ITEMS_PER_PAGE: usize = 100;
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const QUERY_CACHE_CAPACITY: u64 = 256;

/// Tunables for ingestion, classification and querying.
///
/// Every field is optional in a config file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Exact number of digits a card number must have.
    pub card_number_length: usize,
    pub sign_convention: SignConvention,
    pub collections_rule: CollectionsRule,
    /// Page size used when a query omits one or sends garbage.
    pub default_items_per_page: usize,
    /// Page sizes above this are capped.
    pub max_items_per_page: usize,
    /// Uploads larger than this are rejected outright.
    pub max_upload_bytes: usize,
    pub upload_policy: UploadPolicy,
    /// Number of filtered views the query cache keeps.
    pub query_cache_capacity: u64
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            card_number_length: DEFAULT_CARD_NUMBER_LENGTH,
            sign_convention: SignConvention::default(),
            collections_rule: CollectionsRule::default(),
            default_items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_items_per_page: MAX_ITEMS_PER_PAGE,
            max_upload_bytes: MAX_UPLOAD_BYTES,
            upload_policy: UploadPolicy::default(),
            query_cache_capacity: QUERY_CACHE_CAPACITY
        }
    }
}

impl EngineConfig {
    /// Loads the config from a JSON file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source
                })?;

                debug!("Loaded config from [{}]", path.display());
                Self::from_json(&content)?
            }
            None => Self::default()
        };

        config.validate()?;

        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_number_length == 0 {
            return Err(ConfigError::Invalid("card_number_length must be positive".to_string()));
        }

        if self.default_items_per_page == 0 || self.max_items_per_page == 0 {
            return Err(ConfigError::Invalid("page sizes must be positive".to_string()));
        }

        if self.default_items_per_page > self.max_items_per_page {
            return Err(ConfigError::Invalid(format!(
                "default_items_per_page ({}) exceeds max_items_per_page ({})",
                self.default_items_per_page, self.max_items_per_page
            )));
        }

        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid("max_upload_bytes must be positive".to_string()));
        }

        Ok(())
    }

    pub fn with_sign_convention(mut self, sign_convention: SignConvention) -> Self {
        self.sign_convention = sign_convention;
        self
    }

    pub fn with_collections_rule(mut self, collections_rule: CollectionsRule) -> Self {
        self.collections_rule = collections_rule;
        self
    }

    pub fn with_upload_policy(mut self, upload_policy: UploadPolicy) -> Self {
        self.upload_policy = upload_policy;
        self
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}
