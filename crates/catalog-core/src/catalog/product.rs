//! Product record and its fields.

use crate::error::{CatalogError, ValidationErrors};
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// User-supplied identifier, unique within a catalog.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Free-form category label.
    #[serde(default)]
    pub category: String,
    /// Product price.
    pub price: Price,
    /// Free text description.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Create a product with an empty category and description.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            price,
            description: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the field rules a record must satisfy to enter the catalog.
    ///
    /// `price` is already valid by construction; only text fields are
    /// checked here.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.push(ProductField::Name, "is required");
        }
        errors.into_result()
    }

    /// Read a field as display text.
    pub fn field_text(&self, field: ProductField) -> String {
        match field {
            ProductField::Id => self.id.to_string(),
            ProductField::Name => self.name.clone(),
            ProductField::Category => self.category.clone(),
            ProductField::Price => self.price.display_amount(),
            ProductField::Description => self.description.clone(),
        }
    }
}

/// The editable fields of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Id,
    Name,
    Category,
    Price,
    Description,
}

impl ProductField {
    /// All fields in form order.
    pub const ALL: [ProductField; 5] = [
        ProductField::Id,
        ProductField::Name,
        ProductField::Category,
        ProductField::Price,
        ProductField::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Id => "id",
            ProductField::Name => "name",
            ProductField::Category => "category",
            ProductField::Price => "price",
            ProductField::Description => "description",
        }
    }

    /// Form label for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ProductField::Id => "Product ID",
            ProductField::Name => "Product Name",
            ProductField::Category => "Product Category",
            ProductField::Price => "Product Price",
            ProductField::Description => "Product Description",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(ProductField::Id),
            "name" => Ok(ProductField::Name),
            "category" => Ok(ProductField::Category),
            "price" => Ok(ProductField::Price),
            "description" | "desc" => Ok(ProductField::Description),
            other => Err(format!("unknown field: {other}")),
        }
    }
}
