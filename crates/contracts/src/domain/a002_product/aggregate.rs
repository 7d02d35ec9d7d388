use crate::domain::a001_category::{Category, CategoryId};
use serde::{Deserialize, Serialize};

/// Backend-assigned product identifier.
pub type ProductId = i64;

/// Catalog product as returned by `GET /products/`.
///
/// `category` is embedded by the backend when the relation is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Product {
    /// Name of the embedded category, if the backend sent one.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// The editable part of the product.
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.clone(),
            price: self.price,
            category_id: self.category_id,
        }
    }
}

/// Body of `POST /products/` and `PUT /products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
}

/// Response of `GET /products/count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCount {
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_without_embedded_category() {
        let product: Product =
            serde_json::from_str(r#"{"id":7,"name":"X","price":10.0,"category_id":3}"#).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.category_name(), None);
    }

    #[test]
    fn test_product_with_embedded_category() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"name":"Café","price":12.5,"category_id":2,"category":{"id":2,"name":"Bebidas Quentes"}}"#,
        )
        .unwrap();
        assert_eq!(product.category_name(), Some("Bebidas Quentes"));
        assert_eq!(
            product.payload(),
            ProductPayload {
                name: "Café".to_string(),
                price: 12.5,
                category_id: 2,
            }
        );
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = ProductPayload {
            name: "Y".to_string(),
            price: 12.5,
            category_id: 3,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Y", "price": 12.5, "category_id": 3})
        );
    }
}
