pub mod dto;

pub use dto::{CategoryBreakdownRow, DashboardMetricsResponse, MonthlySales};
