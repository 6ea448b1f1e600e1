use console::{measure_text_width, pad_str, Alignment};

use crate::render::Renderer;
use crate::report::stats::{round1, LanguageShare, CHART_MIN_PERCENTAGE};

const FILLED: &str = "█";
const EMPTY: &str = "░";
const SPARKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub const MAX_COLUMN_WIDTH: usize = 30;

pub fn filled_cells(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let filled = (width as f64 * (value / max)).round() as usize;
    filled.min(width)
}

pub fn bar(renderer: &Renderer, value: f64, max: f64, width: usize) -> String {
    let filled = filled_cells(value, max, width);
    format!(
        "{}{}",
        FILLED.repeat(filled),
        renderer.dim(&EMPTY.repeat(width - filled))
    )
}

pub fn horizontal_bar(renderer: &Renderer, label: &str, value: f64, max: f64, width: usize) -> String {
    let percentage = if max > 0.0 { round1(value / max * 100.0) } else { 0.0 };
    format!(
        "{} {} {:.1}%",
        pad(label, 15),
        bar(renderer, value, max, width),
        percentage
    )
}

pub fn pad(text: &str, width: usize) -> String {
    pad_str(text, width, Alignment::Left, None).into_owned()
}

pub fn language_chart(renderer: &Renderer, shares: &[LanguageShare], width: usize) -> Vec<String> {
    shares
        .iter()
        .filter(|s| s.exact_percentage >= CHART_MIN_PERCENTAGE)
        .map(|share| {
            let cells = ((share.exact_percentage / 100.0) * width as f64).round() as usize;
            let bar = renderer.language(&share.name, &FILLED.repeat(cells.clamp(1, width.max(1))));
            format!("{} {} {:.1}%", pad(&share.name, 12), bar, share.percentage)
        })
        .collect()
}

pub fn sparkline(values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let range = if max > min { max - min } else { 1.0 };
    let top = (SPARKS.len() - 1) as f64;

    values
        .iter()
        .map(|v| {
            let normalized = (v - min) / range;
            SPARKS[(normalized * top).round() as usize]
        })
        .collect()
}

/// Column widths default to the widest cell plus two, capped at 30.
pub fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let longest = rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| measure_text_width(cell))
                .fold(measure_text_width(header), usize::max);
            (longest + 2).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

pub fn table(
    renderer: &Renderer,
    headers: &[&str],
    rows: &[Vec<String>],
    widths: Option<&[usize]>,
) -> Vec<String> {
    let widths = match widths {
        Some(w) => w.to_vec(),
        None => column_widths(headers, rows),
    };
    let width_of = |i: usize| widths.get(i).copied().unwrap_or(0);

    let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    let separator = renderer.dim(&"─".repeat(total));

    let header_row = headers
        .iter()
        .enumerate()
        .map(|(i, h)| renderer.bold(&pad(h, width_of(i))))
        .collect::<Vec<_>>()
        .join(" │ ");

    let mut lines = vec![separator.clone(), header_row, separator.clone()];
    for row in rows {
        let line = (0..headers.len())
            .map(|i| pad(row.get(i).map(String::as_str).unwrap_or(""), width_of(i)))
            .collect::<Vec<_>>()
            .join(" │ ");
        lines.push(line);
    }
    lines.push(separator);
    lines
}
