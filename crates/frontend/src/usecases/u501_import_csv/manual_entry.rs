use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a001_category::ui::form::CategoryForm;
use crate::domain::a002_product::ui::form::ProductForm;
use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Manual entry tab: a category form next to a product form.
/// Creating a category reloads the product form's category list.
#[component]
pub fn ManualEntry() -> impl IntoView {
    let (categories, set_categories) = signal(Vec::<Category>::new());

    let load_categories = move || {
        spawn_local(async move {
            match fetch_categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => log::error!("Failed to load categories: {}", e),
            }
        });
    };

    Effect::new(move |_| load_categories());

    let on_created = Callback::new(move |_: ()| load_categories());

    view! {
        <div class="manual-entry">
            <CategoryForm on_created=on_created />
            <ProductForm categories=categories />
        </div>
    }
}
