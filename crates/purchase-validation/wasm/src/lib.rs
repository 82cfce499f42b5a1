//! Purchase Validation WASM
//!
//! Browser bindings for the purchase form validator. The page calls
//! `attachPurchaseValidator()` once; every submit of the form is then checked
//! with the purchase rules from `purchase-validation-core`. Later calls are
//! ignored so each submit shows a single notification.

mod dom;

pub use dom::{AlertNotifier, DomFields};

use purchase_validation_core::{self as validation, ValidatorConfig};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Attach validation to the purchase form.
///
/// `config` is optional; any keys given override the defaults.
///
/// # Example (JavaScript)
/// ```javascript
/// attachPurchaseValidator();
/// attachPurchaseValidator({ formSelector: '#purchase', fields: { unitPrice: 'price' } });
/// ```
#[wasm_bindgen(js_name = attachPurchaseValidator)]
pub fn attach_purchase_validator(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    dom::attach(config)
}

/// Validate raw field text without touching the DOM
///
/// # Returns
/// Array of `{ field, message }` objects (empty if valid)
#[wasm_bindgen(js_name = validatePurchase)]
pub fn validate_purchase(
    product_name: &str,
    unit_price: &str,
    number_of_pieces: &str,
) -> Result<JsValue, JsValue> {
    let errors = match validation::validate_raw(product_name, unit_price, number_of_pieces) {
        Ok(_) => Vec::new(),
        Err(report) => report.field_errors(),
    };
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// The message the submit handler would show, or `undefined` if valid
#[wasm_bindgen(js_name = purchaseErrorMessage)]
pub fn purchase_error_message(
    product_name: &str,
    unit_price: &str,
    number_of_pieces: &str,
) -> Option<String> {
    validation::validate_raw(product_name, unit_price, number_of_pieces)
        .err()
        .map(|report| report.message())
}

/// JS-side config uses camelCase keys
fn parse_config(value: JsValue) -> Result<ValidatorConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ValidatorConfig::default());
    }

    let overrides: JsConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
    Ok(overrides.apply(ValidatorConfig::default()))
}

#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsConfig {
    #[serde(default)]
    form_selector: Option<String>,
    #[serde(default)]
    success_message: Option<String>,
    #[serde(default)]
    fields: JsFieldIds,
}

#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsFieldIds {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    unit_price: Option<String>,
    #[serde(default)]
    number_of_pieces: Option<String>,
}

impl JsConfig {
    fn apply(self, mut config: ValidatorConfig) -> ValidatorConfig {
        if let Some(selector) = self.form_selector {
            config.form_selector = selector;
        }
        if let Some(message) = self.success_message {
            config.success_message = message;
        }
        if let Some(id) = self.fields.product_name {
            config.fields.product_name = id;
        }
        if let Some(id) = self.fields.unit_price {
            config.fields.unit_price = id;
        }
        if let Some(id) = self.fields.number_of_pieces {
            config.fields.number_of_pieces = id;
        }
        config
    }
}
