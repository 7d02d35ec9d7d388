pub mod state;

use self::state::create_state;
use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a002_product::api::{
    export_products_csv, fetch_product_count, fetch_products_page,
};
use crate::domain::a002_product::ui::details::model::parse_category_id;
use crate::domain::a002_product::ui::details::ProductEditDialog;
use crate::shared::api_utils::ApiError;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::PaginationControls;
use crate::shared::export::{download_bytes, CSV_MIME};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_category::{find_category, Category};
use contracts::domain::a002_product::{export_file_name, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const EXPORT_ERROR: &str = "Falha ao exportar produtos.";

#[component]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (exporting, set_exporting) = signal(false);
    let (export_error, set_export_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(None::<Product>);

    // Count first, then the page, both under one request token.
    let load_items = move || {
        let Some((token, filter, query)) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        log::info!("Loading products page {} ({:?})", state.with_untracked(|s| s.page), filter);
        spawn_local(async move {
            let result: Result<(usize, Vec<Product>), ApiError> = async {
                let total = fetch_product_count(&filter).await?;
                let items = fetch_products_page(&query).await?;
                Ok((total, items))
            }
            .await;

            if let Err(e) = &result {
                log::error!("Failed to load products: {}", e);
            }
            let applied = state
                .try_update(|s| s.finish_fetch(token, result.map_err(|e| e.to_string())))
                .unwrap_or(false);
            if !applied {
                log::debug!("Dropped stale products response #{}", token);
            }
        });
    };

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => log::warn!("Failed to load categories: {}", e),
            }
        });
        load_items();
    });

    let category_filter = RwSignal::new(String::new());
    Effect::new(move |_| {
        let selected = parse_category_id(&category_filter.get());
        untrack(move || {
            if state.try_update(|s| s.set_category(selected)).unwrap_or(false) {
                load_items();
            }
        });
    });

    let on_search = move |text: String| {
        if state.try_update(|s| s.set_search(text)).unwrap_or(false) {
            load_items();
        }
    };

    let go_to_page = move |page: usize| {
        if state.try_update(|s| s.go_to_page(page)).unwrap_or(false) {
            load_items();
        }
    };

    let export = move |_| {
        let filter = state.with_untracked(|s| s.filter());
        let category_name = filter.category_id.and_then(|id| {
            categories.with_untracked(|list| find_category(list, id).map(|c| c.name.clone()))
        });
        let file_name = export_file_name(category_name.as_deref());

        set_exporting.set(true);
        set_export_error.set(None);
        spawn_local(async move {
            let outcome = match export_products_csv(&filter).await {
                Ok(bytes) => download_bytes(&bytes, &file_name, CSV_MIME).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = outcome {
                log::error!("Export failed: {}", e);
                set_export_error.set(Some(EXPORT_ERROR.to_string()));
            }
            set_exporting.set(false);
        });
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Produtos"</h1>
                    <Badge>
                        {move || format!("{} itens encontrados", state.with(|s| s.total_count))}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export
                        disabled=Signal::derive(move || exporting.get())
                    >
                        {icon("download")}
                        {move || if exporting.get() { " Exportando..." } else { " Exportar CSV" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Buscar"</Label>
                                <SearchInput
                                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                                    on_change=Callback::new(on_search)
                                    placeholder="Buscar por nome..."
                                />
                            </Flex>
                            <div style="width: 240px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Categoria"</Label>
                                    <Select value=category_filter>
                                        <option value="">"Todas as categorias"</option>
                                        {move || categories.get().into_iter().map(|c| {
                                            view! { <option value=c.id.to_string()>{c.name}</option> }
                                        }).collect_view()}
                                    </Select>
                                </Flex>
                            </div>
                            <Show when=move || loading.get()>
                                <Spinner size=SpinnerSize::Small />
                            </Show>
                        </Flex>
                    </div>
                </div>

                {move || state.with(|s| s.error.clone()).map(|err| view! {
                    <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
                })}
                {move || export_error.get().map(|err| view! {
                    <MessageBar intent=MessageBarIntent::Warning>{err}</MessageBar>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=60.0>"ID"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Nome"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Categoria"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Preço"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|item| (item.id, item.name.clone(), item.price.to_bits(), item.category_id)
                                children=move |item| {
                                    let category_label = item
                                        .category_name()
                                        .unwrap_or("Sem Categoria")
                                        .to_string();
                                    let for_edit = item.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{item.id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{item.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{category_label}</TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=item.price />
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Transparent
                                                    size=ButtonSize::Small
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                >
                                                    {icon("edit")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && state.with(|s| s.items.is_empty() && s.error.is_none())>
                        <p class="table-empty">"Nenhum produto encontrado."</p>
                    </Show>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    loading=loading
                    on_page_change=Callback::new(go_to_page)
                />
            </div>

            <ProductEditDialog
                editing=editing
                categories=categories
                on_saved=Callback::new(move |_| load_items())
            />
        </PageFrame>
    }
}
