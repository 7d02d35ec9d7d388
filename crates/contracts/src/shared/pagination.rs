//! Page arithmetic for server-side paginated lists.
//!
//! Pages are 1-indexed: page 1 starts at offset 0.

/// Fixed page size of the product catalog list.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed to show `total_count` rows, `ceil(total / page_size)`.
///
/// Zero rows yield zero pages; views display `max(total_pages, 1)`.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Row offset (`skip`) of a 1-indexed page.
pub fn offset_for_page(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1) * page_size
}

/// Whether a "previous page" step is possible from `page`.
pub fn can_go_prev(page: usize) -> bool {
    page > 1
}

/// Whether a "next page" step is possible. With zero pages there is no next page.
pub fn can_go_next(page: usize, total_pages: usize) -> bool {
    page < total_pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(95, PAGE_SIZE), 10);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_offset_for_page() {
        for page in 1..=25 {
            assert_eq!(offset_for_page(page, PAGE_SIZE), (page - 1) * 10);
        }
        // page 0 is treated as the first page
        assert_eq!(offset_for_page(0, PAGE_SIZE), 0);
    }

    #[test]
    fn test_page_navigation_bounds() {
        assert!(!can_go_prev(1));
        assert!(can_go_prev(2));
        assert!(!can_go_next(1, 0));
        assert!(!can_go_next(1, 1));
        assert!(can_go_next(1, 2));
        assert!(!can_go_next(10, 10));
    }
}
