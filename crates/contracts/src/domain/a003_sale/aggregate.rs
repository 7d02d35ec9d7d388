use crate::domain::a002_product::{Product, ProductId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type SaleId = i64;

/// Monthly sales record. Only created by CSV import and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub product_id: ProductId,
    /// `YYYY-MM` or a free-form label
    pub month: String,
    pub quantity: i64,
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl Sale {
    /// Embedded product name, or `#<product_id>` when the relation is absent.
    pub fn product_label(&self) -> String {
        match &self.product {
            Some(p) => p.name.clone(),
            None => format!("#{}", self.product_id),
        }
    }
}

/// Formats a `YYYY-MM` period as `MM/YYYY`; other labels are returned as is.
pub fn month_label(month: &str) -> String {
    match NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d") {
        Ok(date) => date.format("%m/%Y").to_string(),
        Err(_) => month.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2024-01"), "01/2024");
        assert_eq!(month_label("2023-12"), "12/2023");
        assert_eq!(month_label("Janeiro"), "Janeiro");
        assert_eq!(month_label("2024-13"), "2024-13");
    }

    #[test]
    fn test_product_label() {
        let sale: Sale = serde_json::from_str(
            r#"{"id":1,"product_id":9,"month":"2024-01","quantity":3,"total_price":30.0}"#,
        )
        .unwrap();
        assert_eq!(sale.product_label(), "#9");
    }
}
