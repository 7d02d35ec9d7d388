//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a002_product--list"`) and a `data-page-category` with one of the
//! constants below. The entity prefix matches the module directory.

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case page (imports, manual entry).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a002_product--list"));
        assert!(is_valid_page_id("d400_sales_metrics--dashboard"));
        assert!(!is_valid_page_id("a002_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_product--"));
    }
}
