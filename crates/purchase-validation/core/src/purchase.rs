// File: src/purchase.rs
// Purpose: Turn raw purchase form values into a validated PurchaseRequest

use crate::config::FieldIds;
use crate::error::{ValidationFailure, ValidationReport};
use crate::fields::FieldSource;
use crate::rules::{check_product_name, parse_number_of_pieces, parse_unit_price, round_cents};
use serde::Serialize;

/// A purchase whose fields all passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseRequest {
    pub product_name: String,
    /// Rounded to cents
    pub unit_price: f64,
    pub number_of_pieces: u64,
}

impl PurchaseRequest {
    /// Price times quantity, rounded to cents
    pub fn total_cost(&self) -> f64 {
        round_cents(self.unit_price * self.number_of_pieces as f64)
    }
}

/// Validate the raw text of the three purchase fields.
///
/// Every check runs, so the report lists all failures in field order
/// (name, price, quantity).
pub fn validate_raw(
    product_name: &str,
    unit_price: &str,
    number_of_pieces: &str,
) -> Result<PurchaseRequest, ValidationReport> {
    let mut report = ValidationReport::new();

    let name = check_product_name(product_name).map_err(|e| report.push(e)).ok();
    let price = parse_unit_price(unit_price)
        .and_then(priced_in_cents)
        .map_err(|e| report.push(e))
        .ok();
    let pieces = parse_number_of_pieces(number_of_pieces)
        .map_err(|e| report.push(e))
        .ok();

    match (name, price, pieces) {
        (Some(product_name), Some(unit_price), Some(number_of_pieces)) => Ok(PurchaseRequest {
            product_name,
            unit_price,
            number_of_pieces,
        }),
        _ => Err(report),
    }
}

/// A price that rounds down to 0.00 cannot be charged
fn priced_in_cents(price: f64) -> Result<f64, ValidationFailure> {
    let cents = round_cents(price);
    if cents > 0.0 {
        Ok(cents)
    } else {
        Err(ValidationFailure::InvalidUnitPrice)
    }
}

/// Read the purchase fields from `source` and validate them
pub fn validate_purchase<S: FieldSource + ?Sized>(
    source: &S,
    ids: &FieldIds,
) -> Result<PurchaseRequest, ValidationReport> {
    let product_name = source.value_or_empty(&ids.product_name);
    let unit_price = source.value_or_empty(&ids.unit_price);
    let number_of_pieces = source.value_or_empty(&ids.number_of_pieces);

    validate_raw(&product_name, &unit_price, &number_of_pieces)
}
