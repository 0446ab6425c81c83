// templates/components/charts.rs
//
// Inline SVG charts for the dashboard.

use crate::domain::charts::{HistogramBin, PieSlice};
use maud::{html, Markup};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

const HIST_WIDTH: f64 = 720.0;
const HIST_HEIGHT: f64 = 320.0;
const HIST_MARGIN: f64 = 40.0;

const PIE_RADIUS: f64 = 140.0;
const PIE_HOLE: f64 = 0.3;

pub fn histogram_chart(title: &str, bins: &[HistogramBin]) -> Markup {
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
    let plot_w = HIST_WIDTH - 2.0 * HIST_MARGIN;
    let plot_h = HIST_HEIGHT - 2.0 * HIST_MARGIN;
    let bar_w = if bins.is_empty() { 0.0 } else { plot_w / bins.len() as f64 };
    let baseline = HIST_HEIGHT - HIST_MARGIN;

    html! {
        figure class="chart" {
            figcaption { h3 { (title) } }
            @if bins.is_empty() {
                p { "No numeric prices to plot." }
            } @else {
                svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox=(format!("0 0 {HIST_WIDTH} {HIST_HEIGHT}"))
                    width=(HIST_WIDTH)
                    height=(HIST_HEIGHT)
                    role="img"
                {
                    line x1=(HIST_MARGIN) y1=(baseline) x2=(HIST_WIDTH - HIST_MARGIN) y2=(baseline) stroke="#495057" {}
                    @for (i, bin) in bins.iter().enumerate() {
                        @let h = bin.count as f64 / max_count.max(1) as f64 * plot_h;
                        rect
                            x=(fmt(HIST_MARGIN + i as f64 * bar_w))
                            y=(fmt(baseline - h))
                            width=(fmt((bar_w - 1.0).max(1.0)))
                            height=(fmt(h))
                            fill=(PALETTE[0])
                        {
                            title { (fmt(bin.start)) " - " (fmt(bin.end)) ": " (bin.count) }
                        }
                    }
                    text x=(HIST_MARGIN) y=(baseline + 16.0) font-size="12" { (fmt(bins[0].start)) }
                    text x=(HIST_WIDTH - HIST_MARGIN) y=(baseline + 16.0) font-size="12" text-anchor="end" {
                        (fmt(bins[bins.len() - 1].end))
                    }
                    text x=(HIST_MARGIN - 6.0) y=(HIST_MARGIN) font-size="12" text-anchor="end" { (max_count) }
                    text x=(HIST_WIDTH / 2.0) y=(HIST_HEIGHT - 4.0) font-size="12" text-anchor="middle" { "Price" }
                }
            }
        }
    }
}

/// Donut chart with a legend; the hole is 30% of the radius.
pub fn pie_chart(title: &str, slices: &[PieSlice]) -> Markup {
    let size = 2.0 * PIE_RADIUS + 20.0;
    let c = size / 2.0;

    let mut angle = -FRAC_PI_2;
    let segments: Vec<String> = slices
        .iter()
        .map(|slice| {
            let start = angle;
            angle += slice.fraction * TAU;
            donut_segment(c, start, angle)
        })
        .collect();

    html! {
        figure class="chart" {
            figcaption { h3 { (title) } }
            @if slices.is_empty() {
                p { "No areas to plot." }
            } @else {
                div style="display: flex; gap: 2rem; align-items: flex-start;" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        viewBox=(format!("0 0 {size} {size}"))
                        width=(size)
                        height=(size)
                        role="img"
                    {
                        @if slices.len() == 1 {
                            circle cx=(c) cy=(c) r=(PIE_RADIUS) fill=(PALETTE[0]) {
                                title { (slices[0].label) }
                            }
                            circle cx=(c) cy=(c) r=(PIE_RADIUS * PIE_HOLE) fill="white" {}
                        } @else {
                            @for (i, (slice, d)) in slices.iter().zip(&segments).enumerate() {
                                path d=(d) fill=(color(i)) stroke="white" {
                                    title { (slice.label) ": " (slice.count) }
                                }
                            }
                        }
                    }
                    ul class="legend" style="list-style: none; padding: 0;" {
                        @for (i, slice) in slices.iter().enumerate() {
                            li {
                                span style=(format!("display: inline-block; width: 12px; height: 12px; margin-right: 6px; background: {};", color(i))) {}
                                (slice.label) " " (format!("{:.1}%", slice.fraction * 100.0))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

/// Ring segment between two angles (radians, clockwise from 12 o'clock).
fn donut_segment(c: f64, start: f64, end: f64) -> String {
    let inner = PIE_RADIUS * PIE_HOLE;
    let large = if end - start > PI { 1 } else { 0 };

    let (ox0, oy0) = polar(c, PIE_RADIUS, start);
    let (ox1, oy1) = polar(c, PIE_RADIUS, end);
    let (ix1, iy1) = polar(c, inner, end);
    let (ix0, iy0) = polar(c, inner, start);

    format!(
        "M {} {} A {r} {r} 0 {large} 1 {} {} L {} {} A {ir} {ir} 0 {large} 0 {} {} Z",
        fmt(ox0),
        fmt(oy0),
        fmt(ox1),
        fmt(oy1),
        fmt(ix1),
        fmt(iy1),
        fmt(ix0),
        fmt(iy0),
        r = PIE_RADIUS,
        ir = inner,
    )
}

fn polar(c: f64, r: f64, angle: f64) -> (f64, f64) {
    (c + r * angle.cos(), c + r * angle.sin())
}

fn fmt(v: f64) -> String {
    format!("{v:.1}")
}
