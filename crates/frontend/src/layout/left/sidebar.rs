//! Sidebar with one entry per page

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{page_label_for_key, PAGE_KEYS};
use crate::shared::icons::icon;
use leptos::prelude::*;

fn icon_for_page(key: &str) -> &'static str {
    match key {
        "d400_sales_metrics" => "dashboard",
        "a002_product" => "products",
        "a003_sale" => "sales",
        "u501_import_csv" => "upload",
        _ => "file-text",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {PAGE_KEYS.iter().map(|&key| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == key
                        style:padding-left="12px"
                        on:click=move |_| ctx.open_page(key)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_for_page(key))}
                            <span>{page_label_for_key(key)}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
