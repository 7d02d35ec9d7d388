use crate::shared::components::table::number_format::{format_money, format_number_int};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a [`StatCard`] renders its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    Money,
    Integer,
}

fn format_value(val: f64, fmt: StatFormat) -> String {
    match fmt {
        StatFormat::Money => format_money(val),
        StatFormat::Integer => format_number_int(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary value (None = still loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: StatFormat,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(15230.5, StatFormat::Money), "R$ 15.230,50");
        assert_eq!(format_value(1520.0, StatFormat::Integer), "1.520");
    }
}
