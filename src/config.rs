//! Configuration for the user store and the operation handler.
//!
//! [`StoreConfig`] controls identifier allocation and how `Replace` treats
//! resource metadata. [`HandlerConfig`] controls the protocol-facing parts:
//! default page size and the base URL used for `meta.location`.
//! [`ServerConfig`] bundles both and can be loaded from JSON.
//!
//! ```rust
//! use scim_user_store::config::{ReplaceMetadataPolicy, ServerConfig, StoreConfig};
//!
//! let store = StoreConfig::default()
//!     .with_id_width(6)
//!     .with_replace_metadata(ReplaceMetadataPolicy::Clear);
//! assert_eq!(store.id_capacity(), 1_000_000);
//!
//! let config = ServerConfig::from_json(r#"{"store": {"idWidth": 5}}"#).unwrap();
//! assert_eq!(config.store.id_width, 5);
//! ```

use crate::error::{ScimError, ScimResult};
use serde::{Deserialize, Serialize};

/// Largest supported identifier width; `10^18` still fits in a `u64`.
pub const MAX_ID_WIDTH: usize = 18;

/// How new identifiers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random digits from a clock-seeded generator.
    #[default]
    Random,
    /// Monotonic counter: `0000`, `0001`, ...
    Sequential,
}

/// What `Replace` does with a record's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMetadataPolicy {
    /// Keep `created`, set `lastModified` to now and extend the version tag.
    #[default]
    Refresh,
    /// Reset metadata and omit it from the Replace response.
    Clear,
}

/// Store-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Number of zero-padded digits in generated identifiers.
    pub id_width: usize,
    /// Identifier generation strategy.
    pub id_strategy: IdStrategy,
    /// Metadata handling for `Replace`.
    pub replace_metadata: ReplaceMetadataPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_width: 4,
            id_strategy: IdStrategy::Random,
            replace_metadata: ReplaceMetadataPolicy::Refresh,
        }
    }
}

impl StoreConfig {
    /// Set the identifier width.
    pub fn with_id_width(mut self, width: usize) -> Self {
        self.id_width = width;
        self
    }

    /// Set the identifier strategy.
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Set the Replace metadata policy.
    pub fn with_replace_metadata(mut self, policy: ReplaceMetadataPolicy) -> Self {
        self.replace_metadata = policy;
        self
    }

    /// Number of distinct identifiers of the configured width.
    pub fn id_capacity(&self) -> u64 {
        10u64.pow(self.id_width.min(MAX_ID_WIDTH) as u32)
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> ScimResult<()> {
        if self.id_width == 0 || self.id_width > MAX_ID_WIDTH {
            return Err(ScimError::invalid_configuration(format!(
                "idWidth must be between 1 and {}, got {}",
                MAX_ID_WIDTH, self.id_width
            )));
        }
        Ok(())
    }
}

/// Protocol-level settings used by the operation handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HandlerConfig {
    /// Base URL such as `https://idp.example.com/scim/v2`; enables `meta.location`.
    pub base_url: Option<String>,
    /// Page size used when a list request carries no `count`.
    pub default_page_size: usize,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            default_page_size: 100,
        }
    }
}

impl HandlerConfig {
    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Set the default page size.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Location URI of a user, when a base URL is configured.
    pub fn user_location(&self, id: &str) -> Option<String> {
        self.base_url
            .as_deref()
            .map(|base| format!("{}/Users/{}", base.trim_end_matches('/'), id))
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub store: StoreConfig,
    pub handler: HandlerConfig,
}

impl ServerConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(text: &str) -> ScimResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.store.validate()?;
        Ok(config)
    }
}
