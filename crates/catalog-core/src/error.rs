//! Catalog error types.

use std::fmt;

use thiserror::Error;

use crate::catalog::ProductField;
use crate::ids::ProductId;

/// Errors that can occur in catalog operations.
///
/// None of these are fatal: every failure leaves the catalog unchanged and
/// the caller can re-prompt the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// One or more product fields were malformed or missing.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// No product with this id exists in the catalog.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The session cannot perform an action from its current screen.
    #[error("cannot {action} from the {from} screen")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    /// A seed fixture could not be decoded.
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl CatalogError {
    /// Build a validation error for a single field.
    pub fn invalid(field: ProductField, message: impl Into<String>) -> Self {
        CatalogError::Validation(ValidationErrors::single(field, message))
    }

    /// The offending fields, if this is a validation error.
    pub fn fields(&self) -> Vec<ProductField> {
        match self {
            CatalogError::Validation(errors) => errors.fields(),
            _ => Vec::new(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Fixture(e.to_string())
    }
}

/// A problem with one product field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ProductField,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field problem found while checking one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn single(field: ProductField, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Record a problem with `field`.
    pub fn push(&mut self, field: ProductField, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The offending fields, in the order they were reported.
    pub fn fields(&self) -> Vec<ProductField> {
        self.0.iter().map(|e| e.field).collect()
    }

    /// Convert into `Ok(())` when nothing was reported.
    pub fn into_result(self) -> Result<(), CatalogError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_field() {
        let mut errors = ValidationErrors::new();
        errors.push(ProductField::Id, "must be an integer");
        errors.push(ProductField::Price, "must not be negative");

        let err = CatalogError::Validation(errors);
        assert_eq!(
            err.to_string(),
            "validation failed: id: must be an integer; price: must not be negative"
        );
        assert_eq!(err.fields(), vec![ProductField::Id, ProductField::Price]);
    }

    #[test]
    fn test_empty_errors_are_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_not_found_display() {
        let err = CatalogError::NotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "Product not found: 42");
        assert!(err.is_not_found());
        assert!(err.fields().is_empty());
    }
}
