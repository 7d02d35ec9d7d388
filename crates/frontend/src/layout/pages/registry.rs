//! Page registry: the single mapping from page key to view.

use crate::dashboards::d400_sales_metrics::ui::SalesMetricsDashboard;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_sale::ui::list::SalesList;
use crate::usecases::u501_import_csv::ImportCsvPage;
use leptos::prelude::*;

pub fn render_page_content(key: &str) -> AnyView {
    match key {
        "d400_sales_metrics" => view! { <SalesMetricsDashboard /> }.into_any(),
        "a002_product" => view! { <ProductList /> }.into_any(),
        "a003_sale" => view! { <SalesList /> }.into_any(),
        "u501_import_csv" => view! { <ImportCsvPage /> }.into_any(),
        other => {
            log::warn!("render_page_content: no view for '{}'", other);
            view! { <div class="page">"Página não encontrada."</div> }.into_any()
        }
    }
}
