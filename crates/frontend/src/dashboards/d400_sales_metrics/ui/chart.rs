//! Inline SVG charts for the sales dashboard.
//!
//! Geometry is computed by plain functions over a fixed viewBox so it can be
//! tested without a browser; the components only turn shapes into elements.

use crate::shared::components::table::number_format::format_compact;
use leptos::prelude::*;

pub const VIEW_WIDTH: f64 = 640.0;
pub const VIEW_HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 36.0;
const TICKS: usize = 4;

/// Series colors, cycled when there are more series than entries
pub const PALETTE: [&str; 6] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899",
];

pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn plot_width() -> f64 {
    VIEW_WIDTH - PAD_LEFT - PAD_RIGHT
}

fn plot_height() -> f64 {
    VIEW_HEIGHT - PAD_TOP - PAD_BOTTOM
}

fn baseline() -> f64 {
    PAD_TOP + plot_height()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackSegment {
    pub series: usize,
    pub rect: Rect,
}

/// Smallest 1/2/5 x 10^k value not below `max`. Empty or non-positive data
/// scales to 1 so heights stay finite.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    for step in [1.0, 2.0, 5.0, 10.0] {
        let candidate = step * magnitude;
        if candidate >= max {
            return candidate;
        }
    }
    10.0 * magnitude
}

fn slot_width(count: usize) -> f64 {
    plot_width() / count.max(1) as f64
}

fn y_for(value: f64, scale: f64) -> f64 {
    baseline() - value.max(0.0) / scale * plot_height()
}

/// Center x of the i-th category slot
pub fn slot_center(index: usize, count: usize) -> f64 {
    PAD_LEFT + slot_width(count) * (index as f64 + 0.5)
}

pub fn bar_rects(values: &[f64]) -> Vec<Rect> {
    let scale = nice_ceiling(values.iter().cloned().fold(0.0, f64::max));
    let slot = slot_width(values.len());
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let y = y_for(v, scale);
            Rect {
                x: PAD_LEFT + slot * i as f64 + slot * 0.2,
                y,
                width: slot * 0.6,
                height: baseline() - y,
            }
        })
        .collect()
}

pub fn line_points(values: &[f64]) -> Vec<(f64, f64)> {
    let scale = nice_ceiling(values.iter().cloned().fold(0.0, f64::max));
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (slot_center(i, values.len()), y_for(v, scale)))
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stacked bars: `rows[i][s]` is the value of series `s` in slot `i`.
/// Zero-height segments are skipped.
pub fn stacked_segments(rows: &[Vec<f64>]) -> Vec<StackSegment> {
    let max_total = rows
        .iter()
        .map(|r| r.iter().map(|v| v.max(0.0)).sum::<f64>())
        .fold(0.0, f64::max);
    let scale = nice_ceiling(max_total);
    let slot = slot_width(rows.len());

    let mut segments = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let mut top = baseline();
        for (series, &value) in row.iter().enumerate() {
            let height = value.max(0.0) / scale * plot_height();
            if height <= 0.0 {
                continue;
            }
            top -= height;
            segments.push(StackSegment {
                series,
                rect: Rect {
                    x: PAD_LEFT + slot * i as f64 + slot * 0.2,
                    y: top,
                    width: slot * 0.6,
                    height,
                },
            });
        }
    }
    segments
}

/// Y axis ticks as `(value, y)` from 0 to the scale maximum
pub fn y_ticks(max: f64) -> Vec<(f64, f64)> {
    let scale = nice_ceiling(max);
    (0..=TICKS)
        .map(|i| {
            let value = scale * i as f64 / TICKS as f64;
            (value, y_for(value, scale))
        })
        .collect()
}

fn fmt(v: f64) -> String {
    format!("{:.1}", v)
}

fn axes(labels: &[String], max: f64) -> impl IntoView {
    let count = labels.len();
    let ticks = y_ticks(max);
    view! {
        <g class="chart__axes">
            {ticks.into_iter().map(|(value, y)| view! {
                <line x1=fmt(PAD_LEFT) x2=fmt(VIEW_WIDTH - PAD_RIGHT) y1=fmt(y) y2=fmt(y) stroke="#E5E7EB" />
                <text x=fmt(PAD_LEFT - 8.0) y=fmt(y + 4.0) text-anchor="end" font-size="11" fill="#6B7280">
                    {format_compact(value)}
                </text>
            }).collect_view()}
            {labels.iter().enumerate().map(|(i, label)| view! {
                <text x=fmt(slot_center(i, count)) y=fmt(VIEW_HEIGHT - 12.0) text-anchor="middle" font-size="11" fill="#6B7280">
                    {label.clone()}
                </text>
            }).collect_view()}
        </g>
    }
}

#[component]
pub fn BarChart(labels: Vec<String>, values: Vec<f64>, color: &'static str) -> impl IntoView {
    let max = values.iter().cloned().fold(0.0, f64::max);
    let rects = bar_rects(&values);
    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT) role="img">
            {axes(&labels, max)}
            {rects.into_iter().map(|r| view! {
                <rect x=fmt(r.x) y=fmt(r.y) width=fmt(r.width) height=fmt(r.height) rx="3" fill=color />
            }).collect_view()}
        </svg>
    }
}

#[component]
pub fn LineChart(labels: Vec<String>, values: Vec<f64>, color: &'static str) -> impl IntoView {
    let max = values.iter().cloned().fold(0.0, f64::max);
    let points = line_points(&values);
    let polyline = points_attr(&points);
    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT) role="img">
            {axes(&labels, max)}
            <polyline points=polyline fill="none" stroke=color stroke-width="2.5" stroke-linejoin="round" />
            {points.into_iter().map(|(x, y)| view! {
                <circle cx=fmt(x) cy=fmt(y) r="4" fill="white" stroke=color stroke-width="2" />
            }).collect_view()}
        </svg>
    }
}

/// One bar per slot, one colored segment per series, with a legend.
#[component]
pub fn StackedBarChart(
    labels: Vec<String>,
    series: Vec<String>,
    rows: Vec<Vec<f64>>,
) -> impl IntoView {
    let max = rows
        .iter()
        .map(|r| r.iter().map(|v| v.max(0.0)).sum::<f64>())
        .fold(0.0, f64::max);
    let segments = stacked_segments(&rows);
    view! {
        <div>
            <svg class="chart" viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT) role="img">
                {axes(&labels, max)}
                {segments.into_iter().map(|s| view! {
                    <rect
                        x=fmt(s.rect.x)
                        y=fmt(s.rect.y)
                        width=fmt(s.rect.width)
                        height=fmt(s.rect.height)
                        fill=series_color(s.series)
                    />
                }).collect_view()}
            </svg>
            <div class="chart__legend">
                {series.into_iter().enumerate().map(|(i, name)| view! {
                    <span class="chart__legend-item">
                        <span class="chart__legend-swatch" style=format!("background: {};", series_color(i))></span>
                        {name}
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(series_color(0), "#3B82F6");
        assert_eq!(series_color(5), "#EC4899");
        assert_eq!(series_color(6), "#3B82F6");
        assert_eq!(series_color(8), "#F59E0B");
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(-3.0), 1.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
        assert_eq!(nice_ceiling(12.0), 20.0);
        assert_eq!(nice_ceiling(450.0), 500.0);
        assert_eq!(nice_ceiling(1000.0), 1000.0);
    }

    #[test]
    fn test_bars_share_baseline() {
        let rects = bar_rects(&[5.0, 10.0, 0.0]);
        assert_eq!(rects.len(), 3);
        for r in &rects {
            assert!((r.y + r.height - baseline()).abs() < 1e-9);
        }
        assert!((rects[1].height - plot_height()).abs() < 1e-9);
        assert!((rects[0].height - plot_height() / 2.0).abs() < 1e-9);
        assert_eq!(rects[2].height, 0.0);
        assert!(rects[0].x < rects[1].x);
    }

    #[test]
    fn test_empty_series() {
        assert!(bar_rects(&[]).is_empty());
        assert!(line_points(&[]).is_empty());
        assert!(stacked_segments(&[]).is_empty());
        assert_eq!(points_attr(&[]), "");
    }

    #[test]
    fn test_line_points_follow_slots() {
        let points = line_points(&[0.0, 20.0]);
        assert!((points[0].1 - baseline()).abs() < 1e-9);
        assert!((points[1].1 - PAD_TOP).abs() < 1e-9);
        assert_eq!(points[0].0, slot_center(0, 2));
        assert_eq!(points_attr(&[(1.0, 2.24)]), "1.0,2.2");
    }

    #[test]
    fn test_stacked_segments() {
        // Bebidas / Limpeza over two months
        let rows = vec![vec![10.0, 0.0], vec![0.0, 5.0]];
        let segments = stacked_segments(&rows);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].series, 0);
        assert_eq!(segments[1].series, 1);

        let rows = vec![vec![4.0, 6.0]];
        let segments = stacked_segments(&rows);
        let top = &segments[1].rect;
        let bottom = &segments[0].rect;
        assert!((bottom.y + bottom.height - baseline()).abs() < 1e-9);
        assert!((top.y + top.height - bottom.y).abs() < 1e-9);
        assert!((top.y - PAD_TOP).abs() < 1e-9);
    }

    #[test]
    fn test_y_ticks() {
        let ticks = y_ticks(90.0);
        assert_eq!(ticks.len(), TICKS + 1);
        assert_eq!(ticks[0].0, 0.0);
        assert_eq!(ticks[TICKS].0, 100.0);
        assert!((ticks[TICKS].1 - PAD_TOP).abs() < 1e-9);
    }
}
