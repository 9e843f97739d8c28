//! Form drafts: raw field text awaiting coercion into a [`Product`].

use crate::catalog::{Product, ProductField};
use crate::error::{CatalogError, ValidationErrors};
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// The text of an add or edit form.
///
/// Every field is kept as entered; nothing is coerced until [`parse`]
/// is called, so a rejected form can be shown again unchanged.
///
/// [`parse`]: ProductDraft::parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
}

impl ProductDraft {
    /// A blank form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Id => &self.id,
            ProductField::Name => &self.name,
            ProductField::Category => &self.category,
            ProductField::Price => &self.price,
            ProductField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: ProductField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProductField::Id => self.id = value,
            ProductField::Name => self.name = value,
            ProductField::Category => self.category = value,
            ProductField::Price => self.price = value,
            ProductField::Description => self.description = value,
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, field: ProductField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Coerce the form into a product.
    ///
    /// Reports every malformed field at once rather than stopping at the
    /// first one.
    pub fn parse(&self) -> Result<Product, CatalogError> {
        let mut errors = ValidationErrors::new();

        let id = match self.id.trim() {
            "" => {
                errors.push(ProductField::Id, "is required");
                None
            }
            text => match text.parse::<ProductId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push(ProductField::Id, "must be an integer");
                    None
                }
            },
        };

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(ProductField::Name, "is required");
        }

        let price = match self.price.trim() {
            "" => {
                errors.push(ProductField::Price, "is required");
                None
            }
            text => match text.parse::<Price>() {
                Ok(price) => Some(price),
                Err(e) => {
                    errors.push(ProductField::Price, e.to_string());
                    None
                }
            },
        };

        match (id, price) {
            (Some(id), Some(price)) if errors.is_empty() => Ok(Product {
                id,
                name: name.to_string(),
                category: self.category.trim().to_string(),
                price,
                description: self.description.trim().to_string(),
            }),
            _ => Err(CatalogError::Validation(errors)),
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            id: product.field_text(ProductField::Id),
            name: product.field_text(ProductField::Name),
            category: product.field_text(ProductField::Category),
            price: product.field_text(ProductField::Price),
            description: product.field_text(ProductField::Description),
        }
    }
}
