pub mod d400_sales_metrics;

pub use d400_sales_metrics::ui::SalesMetricsDashboard;
