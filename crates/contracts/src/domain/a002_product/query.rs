use crate::domain::a001_category::CategoryId;
use crate::shared::pagination::offset_for_page;
use serde::{Deserialize, Serialize};

/// Search and category filter shared by the count, page and export queries.
///
/// Absent fields are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl ProductFilter {
    /// Builds a filter from raw UI input. Blank search text means "no search".
    pub fn new(search: &str, category_id: Option<CategoryId>) -> Self {
        let search = search.trim();
        Self {
            search: (!search.is_empty()).then(|| search.to_string()),
            category_id,
        }
    }

    /// Page query for a 1-indexed page with the given page size.
    pub fn page(&self, page: usize, page_size: usize) -> ProductPageQuery {
        ProductPageQuery {
            search: self.search.clone(),
            category_id: self.category_id,
            skip: offset_for_page(page, page_size),
            limit: page_size,
        }
    }
}

/// Query of `GET /products/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    pub skip: usize,
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::PAGE_SIZE;

    #[test]
    fn test_blank_search_is_dropped() {
        assert_eq!(ProductFilter::new("   ", None), ProductFilter::default());
        assert_eq!(
            ProductFilter::new(" café ", Some(2)),
            ProductFilter {
                search: Some("café".to_string()),
                category_id: Some(2),
            }
        );
    }

    #[test]
    fn test_page_query_offsets() {
        let filter = ProductFilter::new("tv", Some(4));
        for page in 1..=5 {
            let q = filter.page(page, PAGE_SIZE);
            assert_eq!(q.skip, (page - 1) * 10);
            assert_eq!(q.limit, 10);
            assert_eq!(q.search.as_deref(), Some("tv"));
            assert_eq!(q.category_id, Some(4));
        }
    }

    #[test]
    fn test_absent_filters_are_not_serialized() {
        let json = serde_json::to_value(ProductFilter::default().page(1, PAGE_SIZE)).unwrap();
        assert_eq!(json, serde_json::json!({"skip": 0, "limit": 10}));
    }
}
