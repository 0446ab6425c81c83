// src/domain/charts.rs
//
// Numbers behind the dashboard: a price histogram and area frequencies.

use std::collections::HashMap;

pub const PRICE_BINS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
}

/// Parses price cells, dropping anything that is not a finite number.
/// Spaces and commas used as thousands separators are tolerated.
pub fn parse_prices<'a>(cells: impl IntoIterator<Item = &'a str>) -> Vec<f64> {
    cells
        .into_iter()
        .filter_map(|cell| {
            let cleaned: String = cell
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ',')
                .collect();
            cleaned.parse::<f64>().ok()
        })
        .filter(|v| v.is_finite())
        .collect()
}

/// Equal-width bins between the smallest and largest value.
/// All-equal input collapses into a single bin.
pub fn histogram(values: &[f64], max_bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || max_bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / max_bins as f64;
    let mut counts = vec![0usize; max_bins];
    for v in values {
        let idx = (((v - min) / width).floor() as usize).min(max_bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

/// Frequency of each distinct non-empty value, most frequent first.
/// Ties are broken alphabetically so the order is stable.
pub fn frequencies<'a>(cells: impl IntoIterator<Item = &'a str>) -> Vec<PieSlice> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for cell in cells {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        *counts.entry(cell).or_default() += 1;
        total += 1;
    }

    let mut slices: Vec<PieSlice> = counts
        .into_iter()
        .map(|(label, count)| PieSlice {
            label: label.to_string(),
            count,
            fraction: count as f64 / total as f64,
        })
        .collect();

    slices.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    slices
}
