//! Purchase Validation Core
//!
//! Validation for the purchase form: product name, unit price and number of
//! pieces. The rules are plain Rust so the same checks run in the browser
//! (through the wasm bindings) and on the server. The server-side checks for
//! the sale and balance-change form bodies live here too.
//!
//! Page access is abstracted behind two small traits:
//! - [`FieldSource`] reads the current value of a field by id
//! - [`Notifier`] shows a message to the user
//!
//! ```
//! use purchase_validation_core::{FormValidator, RecordingNotifier};
//! use std::collections::HashMap;
//!
//! let mut fields = HashMap::new();
//! fields.insert("product-name".to_string(), "Widget".to_string());
//! fields.insert("unit-price".to_string(), "9.99".to_string());
//! fields.insert("number-of-pieces".to_string(), "3".to_string());
//!
//! let validator = FormValidator::new(RecordingNotifier::new());
//! let outcome = validator.handle_submit(&fields);
//! assert!(!outcome.should_prevent_default());
//! ```

pub mod balance;
pub mod config;
pub mod error;
pub mod fields;
pub mod notify;
pub mod purchase;
pub mod rules;
pub mod sale;
pub mod validator;

pub use balance::{validate_balance_change, validate_balance_change_raw, BalanceChange, BalanceOperation};
pub use config::{FieldIds, ValidatorConfig};
pub use error::{FieldError, ValidationFailure, ValidationReport};
pub use fields::FieldSource;
pub use notify::{Notifier, RecordingNotifier};
pub use purchase::{validate_purchase, validate_raw, PurchaseRequest};
pub use rules::{check_product_name, parse_number_of_pieces, parse_unit_price, round_cents};
pub use sale::{validate_sale, validate_sale_raw, SaleRequest};
pub use validator::{FormValidator, SubmitOutcome};
