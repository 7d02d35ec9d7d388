use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Response of `GET /dashboard/metrics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetricsResponse {
    /// Month-ordered sales series
    pub sales_by_month: Vec<MonthlySales>,
    /// Per-month revenue split by category name
    pub category_breakdown: Vec<CategoryBreakdownRow>,
}

/// One point of the monthly sales series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub total_quantity: i64,
    pub total_revenue: f64,
}

/// One month of the category breakdown.
///
/// On the wire the category names are plain keys next to `month`:
/// `{"month": "2024-01", "Bebidas": 10.0, "Limpeza": 4.5}`
///
/// Keys keep their wire order; it decides the series colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdownRow {
    pub month: String,
    #[serde(flatten)]
    pub values: IndexMap<String, f64>,
}

impl CategoryBreakdownRow {
    /// Revenue of a category in this month; missing categories count as zero.
    pub fn value(&self, category: &str) -> f64 {
        self.values.get(category).copied().unwrap_or(0.0)
    }
}

impl DashboardMetricsResponse {
    /// Distinct category names across all breakdown rows, in first-seen order.
    pub fn category_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for row in &self.category_breakdown {
            for key in row.values.keys() {
                if !keys.iter().any(|k| k == key) {
                    keys.push(key.clone());
                }
            }
        }
        keys
    }

    /// Sum of `total_quantity` over all months.
    pub fn total_quantity(&self) -> i64 {
        self.sales_by_month.iter().map(|m| m.total_quantity).sum()
    }

    /// Sum of `total_revenue` over all months.
    pub fn total_revenue(&self) -> f64 {
        self.sales_by_month.iter().map(|m| m.total_revenue).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DashboardMetricsResponse {
        serde_json::from_str(
            r#"{
                "sales_by_month": [
                    {"month": "2024-01", "total_quantity": 12, "total_revenue": 150.5},
                    {"month": "2024-02", "total_quantity": 8, "total_revenue": 99.5}
                ],
                "category_breakdown": [
                    {"month": "2024-01", "Bebidas": 10},
                    {"month": "2024-02", "Limpeza": 5}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_category_keys_scan_all_rows() {
        let metrics = sample();
        assert_eq!(metrics.category_keys(), vec!["Bebidas", "Limpeza"]);
    }

    #[test]
    fn test_category_keys_are_distinct() {
        let metrics: DashboardMetricsResponse = serde_json::from_str(
            r#"{
                "sales_by_month": [],
                "category_breakdown": [
                    {"month": "2024-01", "Limpeza": 1, "Bebidas": 2},
                    {"month": "2024-02", "Bebidas": 3, "Frios": 4}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(metrics.category_keys(), vec!["Limpeza", "Bebidas", "Frios"]);
    }

    #[test]
    fn test_keys_within_a_row_keep_wire_order() {
        let metrics: DashboardMetricsResponse = serde_json::from_str(
            r#"{
                "sales_by_month": [],
                "category_breakdown": [{"month": "2024-01", "Limpeza": 1, "Bebidas": 2}]
            }"#,
        )
        .unwrap();
        assert_eq!(metrics.category_keys(), vec!["Limpeza", "Bebidas"]);
        assert_eq!(metrics.category_breakdown[0].value("Bebidas"), 2.0);
    }

    #[test]
    fn test_missing_category_value_is_zero() {
        let metrics = sample();
        assert_eq!(metrics.category_breakdown[0].value("Bebidas"), 10.0);
        assert_eq!(metrics.category_breakdown[0].value("Limpeza"), 0.0);
    }

    #[test]
    fn test_totals() {
        let metrics = sample();
        assert_eq!(metrics.total_quantity(), 20);
        assert!((metrics.total_revenue() - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_document() {
        let metrics = DashboardMetricsResponse::default();
        assert!(metrics.category_keys().is_empty());
        assert_eq!(metrics.total_quantity(), 0);
        assert_eq!(metrics.total_revenue(), 0.0);
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        let result = serde_json::from_str::<DashboardMetricsResponse>(r#"{"sales_by_month": 3}"#);
        assert!(result.is_err());
    }
}
