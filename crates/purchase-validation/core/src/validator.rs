// File: src/validator.rs
// Purpose: Submit handler that validates the purchase form and notifies the user

use crate::config::ValidatorConfig;
use crate::error::ValidationReport;
use crate::fields::FieldSource;
use crate::notify::Notifier;
use crate::purchase::{validate_purchase, PurchaseRequest};

/// What the caller should do with the submission that was intercepted
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Let the native submission go through
    Proceed(PurchaseRequest),
    /// Cancel the submission; the report was already shown to the user
    Blocked(ValidationReport),
}

impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitOutcome::Blocked(_))
    }

    /// Whether the default submit action must be prevented
    pub fn should_prevent_default(&self) -> bool {
        self.is_blocked()
    }

    pub fn request(&self) -> Option<&PurchaseRequest> {
        match self {
            SubmitOutcome::Proceed(request) => Some(request),
            SubmitOutcome::Blocked(_) => None,
        }
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            SubmitOutcome::Proceed(_) => None,
            SubmitOutcome::Blocked(report) => Some(report),
        }
    }
}

/// Validates the purchase form on every submit attempt.
///
/// Holds no state between attempts; field values are read fresh each time.
pub struct FormValidator<N: Notifier> {
    config: ValidatorConfig,
    notifier: N,
}

impl<N: Notifier> FormValidator<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_config(ValidatorConfig::default(), notifier)
    }

    pub fn with_config(config: ValidatorConfig, notifier: N) -> Self {
        Self { config, notifier }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Handle one submit attempt. Shows exactly one notification.
    pub fn handle_submit<S: FieldSource + ?Sized>(&self, fields: &S) -> SubmitOutcome {
        match validate_purchase(fields, &self.config.fields) {
            Ok(request) => {
                tracing::debug!(
                    "Purchase accepted: {} x{} at {:.2}",
                    request.product_name,
                    request.number_of_pieces,
                    request.unit_price
                );
                self.notifier.notify(&self.config.success_message);
                SubmitOutcome::Proceed(request)
            }
            Err(report) => {
                tracing::debug!("Purchase blocked with {} validation error(s)", report.len());
                self.notifier.notify(&report.message());
                SubmitOutcome::Blocked(report)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFailure;
    use crate::notify::RecordingNotifier;
    use std::collections::HashMap;

    fn form(name: &str, price: &str, pieces: &str) -> HashMap<String, String> {
        let mut fields = HashMap::new();
        fields.insert("product-name".to_string(), name.to_string());
        fields.insert("unit-price".to_string(), price.to_string());
        fields.insert("number-of-pieces".to_string(), pieces.to_string());
        fields
    }

    #[test]
    fn test_valid_submit_proceeds() {
        let validator = FormValidator::new(RecordingNotifier::new());
        let outcome = validator.handle_submit(&form("Widget", "9.99", "3"));

        assert!(!outcome.should_prevent_default());
        assert_eq!(outcome.request().map(|r| r.number_of_pieces), Some(3));
        assert_eq!(
            validator.notifier().messages(),
            vec!["Purchase submitted successfully!".to_string()]
        );
    }

    #[test]
    fn test_invalid_submit_blocked() {
        let validator = FormValidator::new(RecordingNotifier::new());
        let outcome = validator.handle_submit(&form("Widget", "0", "3"));

        assert!(outcome.should_prevent_default());
        assert_eq!(
            outcome.report().map(|r| r.failures().to_vec()),
            Some(vec![ValidationFailure::InvalidUnitPrice])
        );
        assert_eq!(
            validator.notifier().last().as_deref(),
            Some("Unit price must be a positive number.")
        );
    }

    #[test]
    fn test_custom_success_message() {
        let config = ValidatorConfig {
            success_message: "Thanks!".to_string(),
            ..ValidatorConfig::default()
        };
        let notifier = RecordingNotifier::new();
        let validator = FormValidator::with_config(config, &notifier);

        validator.handle_submit(&form("Widget", "1", "1"));
        assert_eq!(notifier.last().as_deref(), Some("Thanks!"));
    }
}
