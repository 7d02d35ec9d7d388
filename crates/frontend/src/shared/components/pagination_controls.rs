use crate::shared::icons::icon;
use contracts::shared::pagination::{can_go_next, can_go_prev};
use leptos::prelude::*;

/// Previous/next pager for server-side paginated lists.
///
/// Pages are 1-indexed. Both buttons are disabled while `loading` so a page
/// change cannot be queued on top of an in-flight fetch.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    loading: Signal<bool>,

    /// Called with the requested page number
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let prev_disabled = move || loading.get() || !can_go_prev(current_page.get());
    let next_disabled =
        move || loading.get() || !can_go_next(current_page.get(), total_pages.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if can_go_prev(page) {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=prev_disabled
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("Página {} de {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if can_go_next(page, total_pages.get_untracked()) {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=next_disabled
                title="Próxima página"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
