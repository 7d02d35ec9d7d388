//! Top bar: sidebar toggle, brand and the title of the current page.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::page_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"SmartMart"</span>
            </div>
            <div class="top-header__page">
                {move || page_label_for_key(&ctx.active.get()).to_string()}
            </div>
        </div>
    }
}
