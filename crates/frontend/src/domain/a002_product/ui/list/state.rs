use crate::shared::request_generation::RequestGeneration;
use contracts::domain::a001_category::CategoryId;
use contracts::domain::a002_product::{Product, ProductFilter, ProductPageQuery};
use contracts::shared::pagination::{can_go_next, can_go_prev, total_pages, PAGE_SIZE};
use leptos::prelude::*;

/// Catalog list state: filters, current page and the last applied result.
#[derive(Clone, Debug)]
pub struct ProductListState {
    pub search: String,
    pub category_id: Option<CategoryId>,
    /// 1-indexed
    pub page: usize,
    pub total_count: usize,
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub generation: RequestGeneration,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category_id: None,
            page: 1,
            total_count: 0,
            items: Vec::new(),
            loading: false,
            error: None,
            generation: RequestGeneration::default(),
        }
    }
}

impl ProductListState {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter::new(&self.search, self.category_id)
    }

    pub fn page_query(&self) -> ProductPageQuery {
        self.filter().page(self.page, PAGE_SIZE)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, PAGE_SIZE)
    }

    pub fn can_prev(&self) -> bool {
        !self.loading && can_go_prev(self.page)
    }

    pub fn can_next(&self) -> bool {
        !self.loading && can_go_next(self.page, self.total_pages())
    }

    /// New search text. Returns true when a refetch is needed.
    pub fn set_search(&mut self, search: String) -> bool {
        if self.search == search {
            return false;
        }
        self.search = search;
        self.page = 1;
        true
    }

    /// New category filter. Returns true when a refetch is needed.
    pub fn set_category(&mut self, category_id: Option<CategoryId>) -> bool {
        if self.category_id == category_id {
            return false;
        }
        self.category_id = category_id;
        self.page = 1;
        true
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let page = page.max(1);
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Marks a fetch as started and returns its token with the queries to send.
    pub fn begin_fetch(&mut self) -> (u64, ProductFilter, ProductPageQuery) {
        self.loading = true;
        self.error = None;
        (self.generation.next(), self.filter(), self.page_query())
    }

    /// Applies a completed fetch. Results of a stale token are dropped and
    /// `false` is returned.
    pub fn finish_fetch(
        &mut self,
        token: u64,
        result: Result<(usize, Vec<Product>), String>,
    ) -> bool {
        if !self.generation.is_current(token) {
            return false;
        }
        self.loading = false;
        match result {
            Ok((total, items)) => {
                self.total_count = total;
                self.items = items;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
