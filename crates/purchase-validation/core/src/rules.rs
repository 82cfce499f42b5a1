//! Per-field rules for the purchase form
//!
//! Each rule trims its input and then requires the whole remaining text to
//! parse. Partial prefixes such as `"12abc"` are rejected.

use crate::error::ValidationFailure;

/// Product name must contain something other than whitespace
pub fn check_product_name(raw: &str) -> Result<String, ValidationFailure> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationFailure::MissingProductName);
    }
    Ok(name.to_string())
}

/// Unit price must be a finite decimal strictly greater than zero
pub fn parse_unit_price(raw: &str) -> Result<f64, ValidationFailure> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationFailure::InvalidUnitPrice)?;

    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationFailure::InvalidUnitPrice);
    }
    Ok(price)
}

/// Number of pieces must be a whole number strictly greater than zero
pub fn parse_number_of_pieces(raw: &str) -> Result<u64, ValidationFailure> {
    let pieces: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationFailure::InvalidNumberOfPieces)?;

    if pieces <= 0 {
        return Err(ValidationFailure::InvalidNumberOfPieces);
    }
    Ok(pieces as u64)
}

/// Round to two decimal places, ties to even.
///
/// A tie only counts when the exact product `value * 100` lands on `.5`;
/// otherwise the representation error decides the direction. This gives the
/// same cents as Python's `round(value, 2)`, so `0.125` becomes `0.12` and
/// `2.675` (stored as `2.67499...`) becomes `2.67`.
pub fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    let floor = scaled.floor();

    let cents = if scaled - floor == 0.5 {
        let error = value.mul_add(100.0, -scaled);
        let round_up = if error != 0.0 {
            error > 0.0
        } else {
            floor % 2.0 != 0.0
        };
        if round_up {
            floor + 1.0
        } else {
            floor
        }
    } else {
        scaled.round()
    };

    cents / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name() {
        assert_eq!(check_product_name("  Widget "), Ok("Widget".to_string()));
        assert_eq!(
            check_product_name(""),
            Err(ValidationFailure::MissingProductName)
        );
        assert_eq!(
            check_product_name(" \t\n"),
            Err(ValidationFailure::MissingProductName)
        );
    }

    #[test]
    fn test_unit_price() {
        assert_eq!(parse_unit_price("9.99"), Ok(9.99));
        assert_eq!(parse_unit_price(" 12 "), Ok(12.0));
        assert_eq!(parse_unit_price("0.01"), Ok(0.01));

        assert!(parse_unit_price("0").is_err());
        assert!(parse_unit_price("-1").is_err());
        assert!(parse_unit_price("").is_err());
        assert!(parse_unit_price("abc").is_err());
        assert!(parse_unit_price("12abc").is_err());
        assert!(parse_unit_price("NaN").is_err());
        assert!(parse_unit_price("inf").is_err());
    }

    #[test]
    fn test_number_of_pieces() {
        assert_eq!(parse_number_of_pieces("3"), Ok(3));
        assert_eq!(parse_number_of_pieces(" 42\n"), Ok(42));

        assert!(parse_number_of_pieces("0").is_err());
        assert!(parse_number_of_pieces("-5").is_err());
        assert!(parse_number_of_pieces("3.5").is_err());
        assert!(parse_number_of_pieces("").is_err());
        assert!(parse_number_of_pieces("three").is_err());
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(9.999), 10.0);
        assert_eq!(round_cents(1.234), 1.23);
        assert_eq!(round_cents(2.5), 2.5);
    }

    #[test]
    fn test_round_cents_ties_to_even() {
        assert_eq!(round_cents(0.125), 0.12);
        assert_eq!(round_cents(0.375), 0.38);
        assert_eq!(round_cents(2.675), 2.67);
        assert_eq!(round_cents(0.005), 0.01);
        assert_eq!(round_cents(1.005), 1.0);
        assert_eq!(round_cents(0.004), 0.0);
    }
}
