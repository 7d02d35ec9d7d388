use crate::domain::a003_sale::api::fetch_sales;
use crate::shared::components::table::number_format::format_number_int;
use crate::shared::components::table::TableCellMoney;
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_sale::{month_label, Sale};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const EXPORT_FILE_NAME: &str = "historico_vendas.csv";

impl CsvExportable for Sale {
    fn headers() -> Vec<&'static str> {
        vec!["Mês", "Produto", "Quantidade", "Valor Total"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            month_label(&self.month),
            self.product_label(),
            self.quantity.to_string(),
            format!("{:.2}", self.total_price).replace('.', ","),
        ]
    }
}

/// Display values of one history row
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRow {
    pub month: String,
    pub product: String,
    pub quantity: String,
    pub total: f64,
}

impl SaleRow {
    pub fn from_sale(sale: &Sale) -> Self {
        Self {
            month: month_label(&sale.month),
            product: sale.product_label(),
            quantity: format_number_int(sale.quantity as f64),
            total: sale.total_price,
        }
    }
}

/// Read-only sales history, loaded once on mount.
#[component]
pub fn SalesList() -> impl IntoView {
    let (sales, set_sales) = signal::<Vec<Sale>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_sales = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match fetch_sales().await {
                Ok(list) => {
                    log::info!("Loaded {} sales", list.len());
                    set_sales.set(list);
                }
                Err(e) => {
                    log::error!("Failed to load sales: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_sales());

    let export = move |_| {
        if let Err(e) = sales.with_untracked(|list| export_csv(list, EXPORT_FILE_NAME)) {
            log::warn!("Sales export failed: {}", e);
            set_error.set(Some(e.to_string()));
        }
    };

    view! {
        <PageFrame page_id="a003_sale--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Histórico de Vendas"</h1>
                    <Badge>{move || sales.with(|s| s.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_sales()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Carregando..." } else { "Atualizar" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export
                        disabled=Signal::derive(move || loading.get() || sales.with(|s| s.is_empty()))
                    >
                        {icon("download")}
                        " CSV"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! {
                    <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
                })}

                <Show when=move || loading.get()>
                    <Spinner />
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=100.0>"Mês"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Produto"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Quantidade"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Valor Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || sales.get()
                                key=|sale| sale.id
                                children=move |sale| {
                                    let row = SaleRow::from_sale(&sale);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row.month}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.product}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div style="text-align: right;">{row.quantity}</div>
                                            </TableCell>
                                            <TableCellMoney value=row.total />
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
