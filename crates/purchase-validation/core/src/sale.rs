// File: src/sale.rs
// Purpose: Server-side checks for the sale form body

use crate::error::ValidationFailure;
use crate::fields::FieldSource;
use crate::rules::parse_number_of_pieces;
use serde::Serialize;

/// Form keys posted by the sale page
pub const SALE_PRODUCT_NAME: &str = "product_name";
pub const SALE_NUMBER_OF_PIECES: &str = "number_of_pieces";

/// A sale request whose fields passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRequest {
    pub product_name: String,
    pub number_of_pieces: u64,
}

/// Validate the raw sale fields. Stops at the first failure, which is the
/// single message the server flashes back.
pub fn validate_sale_raw(
    product_name: &str,
    number_of_pieces: &str,
) -> Result<SaleRequest, ValidationFailure> {
    let name = product_name.trim();
    let pieces = number_of_pieces.trim();

    if pieces.is_empty() {
        return Err(ValidationFailure::MissingSaleQuantity);
    }
    if name.is_empty() {
        return Err(ValidationFailure::IncompleteFields);
    }

    Ok(SaleRequest {
        product_name: name.to_string(),
        number_of_pieces: parse_number_of_pieces(pieces)?,
    })
}

/// Read the sale form body and validate it
pub fn validate_sale<S: FieldSource + ?Sized>(source: &S) -> Result<SaleRequest, ValidationFailure> {
    let product_name = source.value_or_empty(SALE_PRODUCT_NAME);
    let number_of_pieces = source.value_or_empty(SALE_NUMBER_OF_PIECES);

    let result = validate_sale_raw(&product_name, &number_of_pieces);
    if let Err(failure) = &result {
        tracing::debug!("Sale rejected: {}", failure);
    }
    result
}
