//! Page keys and their titles.

pub const DEFAULT_PAGE: &str = "d400_sales_metrics";

/// Every page reachable from the sidebar, in menu order.
pub const PAGE_KEYS: &[&str] = &[
    "d400_sales_metrics",
    "a002_product",
    "a003_sale",
    "u501_import_csv",
];

pub fn is_known_page(key: &str) -> bool {
    PAGE_KEYS.contains(&key)
}

/// Readable title for a page key. Fallback: the key itself.
pub fn page_label_for_key(key: &str) -> &str {
    match key {
        "d400_sales_metrics" => "Dashboard",
        "a002_product" => "Produtos",
        "a003_sale" => "Histórico de Vendas",
        "u501_import_csv" => "Importação de Dados",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_a_label() {
        assert!(is_known_page(DEFAULT_PAGE));
        for key in PAGE_KEYS {
            assert_ne!(page_label_for_key(key), *key);
        }
        assert_eq!(page_label_for_key("zzz"), "zzz");
    }
}
