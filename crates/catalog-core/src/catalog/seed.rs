//! Initial catalog contents.

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::price::Price;

/// The five products a fresh catalog starts with.
pub fn default_seed() -> Vec<Product> {
    const ROWS: [(i64, &str, i64); 5] = [
        (1, "Category 1", 1099),
        (2, "Category 2", 1999),
        (3, "Category 1", 1499),
        (4, "Category 2", 799),
        (5, "Category 1", 1299),
    ];

    ROWS.iter()
        .map(|&(id, category, cents)| Product {
            id: id.into(),
            name: format!("Product {id}"),
            category: category.to_string(),
            price: Price::from_cents(cents).unwrap_or_default(),
            description: format!("This is the description or Product {id}"),
        })
        .collect()
}

/// Decode a JSON array of products.
pub fn from_json(json: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let seed = default_seed();
        let ids: Vec<i64> = seed.iter().map(|p| p.id.get()).collect();
        let prices: Vec<i64> = seed.iter().map(|p| p.price.cents()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(prices, vec![1099, 1999, 1499, 799, 1299]);
        assert_eq!(seed[3].name, "Product 4");
        assert_eq!(seed[3].category, "Category 2");
    }

    #[test]
    fn test_from_json() {
        let seed = from_json(
            r#"[{"id": 10, "name": "Widget", "category": "Tools", "price": 4.5, "description": ""}]"#,
        )
        .unwrap();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].price.cents(), 450);
    }

    #[test]
    fn test_from_json_rejects_negative_price() {
        let err = from_json(r#"[{"id": 1, "name": "X", "price": -2}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Fixture(_)));
    }

    #[test]
    fn test_from_json_rejects_fraction_of_a_cent() {
        let err = from_json(
            r#"[{"id": 1, "name": "A", "price": 1.004}, {"id": 2, "name": "B", "price": 1.001}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Fixture(_)));
        assert!(from_json(r#"[{"id": 1, "name": "A", "price": 0.004}]"#).is_err());
    }
}
