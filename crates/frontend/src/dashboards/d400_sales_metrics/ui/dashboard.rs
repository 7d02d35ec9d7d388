use super::chart::{series_color, BarChart, LineChart, StackedBarChart};
use crate::dashboards::d400_sales_metrics::api;
use crate::shared::components::{StatCard, StatFormat};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_sales_metrics::DashboardMetricsResponse;
use contracts::domain::a003_sale::month_label;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Per-month values of every category key, zero where a month lacks one.
pub fn breakdown_rows(metrics: &DashboardMetricsResponse, keys: &[String]) -> Vec<Vec<f64>> {
    metrics
        .category_breakdown
        .iter()
        .map(|row| keys.iter().map(|k| row.value(k)).collect())
        .collect()
}

#[component]
pub fn SalesMetricsDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<DashboardMetricsResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_dashboard_metrics().await {
                Ok(response) => {
                    log::info!(
                        "Dashboard metrics: {} months, {} breakdown rows",
                        response.sales_by_month.len(),
                        response.category_breakdown.len()
                    );
                    set_data.set(Some(response));
                }
                Err(e) => {
                    log::error!("Failed to load dashboard metrics: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let total_quantity =
        Signal::derive(move || data.with(|d| d.as_ref().map(|m| m.total_quantity() as f64)));
    let total_revenue = Signal::derive(move || data.with(|d| d.as_ref().map(|m| m.total_revenue())));
    let month_count =
        Signal::derive(move || data.with(|d| d.as_ref().map(|m| m.sales_by_month.len() as f64)));

    view! {
        <PageFrame page_id="d400_sales_metrics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard de Vendas"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if let Some(err) = error.get() {
                        return view! {
                            <MessageBar intent=MessageBarIntent::Error>
                                {format!("Não foi possível carregar o dashboard. {}", err)}
                            </MessageBar>
                        }.into_any();
                    }
                    if loading.get() {
                        return view! {
                            <div class="dashboard__loading"><Spinner label="Carregando métricas..." /></div>
                        }.into_any();
                    }
                    let Some(metrics) = data.get() else {
                        return view! { <></> }.into_any();
                    };

                    let months: Vec<String> =
                        metrics.sales_by_month.iter().map(|m| month_label(&m.month)).collect();
                    let quantities: Vec<f64> =
                        metrics.sales_by_month.iter().map(|m| m.total_quantity as f64).collect();
                    let revenues: Vec<f64> =
                        metrics.sales_by_month.iter().map(|m| m.total_revenue).collect();

                    let keys = metrics.category_keys();
                    let breakdown_months: Vec<String> =
                        metrics.category_breakdown.iter().map(|r| month_label(&r.month)).collect();
                    let rows = breakdown_rows(&metrics, &keys);

                    view! {
                        <div class="dashboard__grid">
                            <div class="chart-card">
                                <h3 class="chart-card__title">"Quantidade Vendida por Mês"</h3>
                                <BarChart labels=months.clone() values=quantities color=series_color(0) />
                            </div>
                            <div class="chart-card">
                                <h3 class="chart-card__title">"Receita por Mês"</h3>
                                <LineChart labels=months values=revenues color=series_color(1) />
                            </div>
                            <div class="chart-card chart-card--wide">
                                <h3 class="chart-card__title">"Receita por Categoria"</h3>
                                {if keys.is_empty() {
                                    view! { <p class="chart-card__empty">"Sem dados de categoria."</p> }.into_any()
                                } else {
                                    view! { <StackedBarChart labels=breakdown_months series=keys rows=rows /> }.into_any()
                                }}
                            </div>
                        </div>
                    }.into_any()
                }}

                <Show when=move || error.get().is_none()>
                    <div class="dashboard__cards">
                        <StatCard
                            label="Total de Vendas"
                            icon_name="sales"
                            value=total_quantity
                            format=StatFormat::Integer
                        />
                        <StatCard
                            label="Receita Total"
                            icon_name="revenue"
                            value=total_revenue
                            format=StatFormat::Money
                        />
                        <StatCard
                            label="Meses com Vendas"
                            icon_name="dashboard"
                            value=month_count
                            format=StatFormat::Integer
                        />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_is_its_own_series() {
        let metrics: DashboardMetricsResponse = serde_json::from_str(
            r#"{
                "sales_by_month": [],
                "category_breakdown": [
                    {"month": "2024-01", "Bebidas": 10},
                    {"month": "2024-02", "Limpeza": 5}
                ]
            }"#,
        )
        .unwrap();
        let keys = metrics.category_keys();
        assert_eq!(keys, vec!["Bebidas".to_string(), "Limpeza".to_string()]);
        assert_eq!(
            breakdown_rows(&metrics, &keys),
            vec![vec![10.0, 0.0], vec![0.0, 5.0]]
        );
    }
}
