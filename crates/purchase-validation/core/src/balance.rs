// File: src/balance.rs
// Purpose: Server-side checks for the balance-change form body

use crate::error::ValidationFailure;
use crate::fields::FieldSource;
use serde::Serialize;

/// Form keys posted by the balance-change page
pub const BALANCE_OPERATION_TYPE: &str = "operation_type";
pub const BALANCE_CHANGE_VALUE: &str = "change_value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceOperation {
    Add,
    Subtract,
}

impl BalanceOperation {
    pub fn parse(raw: &str) -> Result<Self, ValidationFailure> {
        match raw.trim() {
            "add" => Ok(BalanceOperation::Add),
            "subtract" => Ok(BalanceOperation::Subtract),
            _ => Err(ValidationFailure::InvalidOperationType),
        }
    }
}

/// A balance adjustment whose fields passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceChange {
    pub operation: BalanceOperation,
    pub change_value: f64,
}

impl BalanceChange {
    /// Amount as recorded in the transaction history (negative for subtract)
    pub fn signed_amount(&self) -> f64 {
        match self.operation {
            BalanceOperation::Add => self.change_value,
            BalanceOperation::Subtract => -self.change_value,
        }
    }
}

/// Validate the raw balance-change fields, stopping at the first failure
pub fn validate_balance_change_raw(
    operation_type: &str,
    change_value: &str,
) -> Result<BalanceChange, ValidationFailure> {
    if operation_type.trim().is_empty() || change_value.trim().is_empty() {
        return Err(ValidationFailure::IncompleteFields);
    }

    let value: f64 = change_value
        .trim()
        .parse()
        .map_err(|_| ValidationFailure::InvalidChangeValue)?;
    if !value.is_finite() {
        return Err(ValidationFailure::InvalidChangeValue);
    }

    Ok(BalanceChange {
        operation: BalanceOperation::parse(operation_type)?,
        change_value: value,
    })
}

/// Read the balance-change form body and validate it
pub fn validate_balance_change<S: FieldSource + ?Sized>(
    source: &S,
) -> Result<BalanceChange, ValidationFailure> {
    let operation_type = source.value_or_empty(BALANCE_OPERATION_TYPE);
    let change_value = source.value_or_empty(BALANCE_CHANGE_VALUE);

    let result = validate_balance_change_raw(&operation_type, &change_value);
    if let Err(failure) = &result {
        tracing::debug!("Balance change rejected: {}", failure);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_valid_changes() {
        let add = validate_balance_change_raw("add", "250.5").unwrap();
        assert_eq!(add.operation, BalanceOperation::Add);
        assert_eq!(add.signed_amount(), 250.5);

        let subtract = validate_balance_change_raw("subtract", " 40 ").unwrap();
        assert_eq!(subtract.operation, BalanceOperation::Subtract);
        assert_eq!(subtract.signed_amount(), -40.0);
    }

    #[test]
    fn test_incomplete_fields() {
        assert_eq!(
            validate_balance_change_raw("", "10"),
            Err(ValidationFailure::IncompleteFields)
        );
        assert_eq!(
            validate_balance_change_raw("add", "").unwrap_err().to_string(),
            "Please complete all fields."
        );
    }

    #[test]
    fn test_bad_change_value() {
        for raw in ["ten", "10€", "inf", "NaN"] {
            assert_eq!(
                validate_balance_change_raw("add", raw).unwrap_err().to_string(),
                "Please enter a valid numerical value for the change."
            );
        }
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(
            validate_balance_change_raw("multiply", "10"),
            Err(ValidationFailure::InvalidOperationType)
        );
        assert_eq!(
            validate_balance_change_raw("Add", "10"),
            Err(ValidationFailure::InvalidOperationType)
        );
    }

    #[test]
    fn test_from_form_body() {
        let mut body = BTreeMap::new();
        body.insert("operation_type".to_string(), "subtract".to_string());
        body.insert("change_value".to_string(), "12.75".to_string());

        let change = validate_balance_change(&body).unwrap();
        assert_eq!(change.signed_amount(), -12.75);
    }
}
