//! Validation failures and the aggregated report shown to the user

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single field that failed its constraint.
///
/// The `Display` text is the exact line shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Product name is required.")]
    MissingProductName,

    #[error("Unit price must be a positive number.")]
    InvalidUnitPrice,

    #[error("Number of pieces must be a positive integer.")]
    InvalidNumberOfPieces,

    #[error("Quantity is required for sale transactions.")]
    MissingSaleQuantity,

    #[error("Please complete all fields.")]
    IncompleteFields,

    #[error("Operation type must be 'add' or 'subtract'.")]
    InvalidOperationType,

    #[error("Please enter a valid numerical value for the change.")]
    InvalidChangeValue,
}

impl ValidationFailure {
    /// Name of the form field this failure belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationFailure::MissingProductName => "product_name",
            ValidationFailure::InvalidUnitPrice => "unit_price",
            ValidationFailure::InvalidNumberOfPieces | ValidationFailure::MissingSaleQuantity => {
                "number_of_pieces"
            }
            ValidationFailure::IncompleteFields => "_form",
            ValidationFailure::InvalidOperationType => "operation_type",
            ValidationFailure::InvalidChangeValue => "change_value",
        }
    }
}

/// Field/message pair handed to callers that render errors next to inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<ValidationFailure> for FieldError {
    fn from(failure: ValidationFailure) -> Self {
        Self {
            field: failure.field().to_string(),
            message: failure.to_string(),
        }
    }
}

/// All failures from one submit attempt, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn contains(&self, failure: ValidationFailure) -> bool {
        self.failures.contains(&failure)
    }

    /// Message lines joined by newlines, as shown in the notification
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn field_errors(&self) -> Vec<FieldError> {
        self.failures.iter().copied().map(FieldError::from).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            ValidationFailure::MissingProductName.to_string(),
            "Product name is required."
        );
        assert_eq!(
            ValidationFailure::InvalidUnitPrice.to_string(),
            "Unit price must be a positive number."
        );
        assert_eq!(
            ValidationFailure::InvalidNumberOfPieces.to_string(),
            "Number of pieces must be a positive integer."
        );
    }

    #[test]
    fn test_report_joins_lines_without_trailing_newline() {
        let mut report = ValidationReport::new();
        report.push(ValidationFailure::MissingProductName);
        report.push(ValidationFailure::InvalidNumberOfPieces);

        assert_eq!(
            report.message(),
            "Product name is required.\nNumber of pieces must be a positive integer."
        );
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_empty_report() {
        let report = ValidationReport::new();
        assert!(report.is_empty());
        assert_eq!(report.message(), "");
    }

    #[test]
    fn test_field_errors() {
        let mut report = ValidationReport::new();
        report.push(ValidationFailure::InvalidUnitPrice);

        assert_eq!(
            report.field_errors(),
            vec![FieldError {
                field: "unit_price".to_string(),
                message: "Unit price must be a positive number.".to_string(),
            }]
        );
    }
}
