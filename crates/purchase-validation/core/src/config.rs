// File: src/config.rs
// Purpose: Validator configuration (field ids, form selector, messages)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Validator configuration
///
/// Every key is optional; the defaults match the stock purchase page.
///
/// ```toml
/// form_selector = "#purchase"
///
/// [fields]
/// unit_price = "price"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// CSS selector of the form to intercept
    #[serde(default = "default_form_selector")]
    pub form_selector: String,

    /// Notification shown when the submission is allowed through
    #[serde(default = "default_success_message")]
    pub success_message: String,

    #[serde(default)]
    pub fields: FieldIds,
}

/// Identifiers of the three inputs read on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIds {
    #[serde(default = "default_product_name_id")]
    pub product_name: String,

    #[serde(default = "default_unit_price_id")]
    pub unit_price: String,

    #[serde(default = "default_number_of_pieces_id")]
    pub number_of_pieces: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            form_selector: default_form_selector(),
            success_message: default_success_message(),
            fields: FieldIds::default(),
        }
    }
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            product_name: default_product_name_id(),
            unit_price: default_unit_price_id(),
            number_of_pieces: default_number_of_pieces_id(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ValidatorConfig =
            toml::from_str(content).context("Invalid validator configuration")?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

fn default_form_selector() -> String {
    "form".to_string()
}

fn default_success_message() -> String {
    "Purchase submitted successfully!".to_string()
}

fn default_product_name_id() -> String {
    "product-name".to_string()
}

fn default_unit_price_id() -> String {
    "unit-price".to_string()
}

fn default_number_of_pieces_id() -> String {
    "number-of-pieces".to_string()
}
