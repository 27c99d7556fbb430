//! Terminal chart rendering.
//!
//! Charts are always rebuilt from scratch: the registry drops the previous
//! handle for a slot before installing the redraw, so stale output from an
//! earlier state can never leak into the next frame.

use std::collections::HashMap;

use crate::stats::DailyTotal;

const CHART_ROWS: usize = 8;

/// The two chart slots the dashboard owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Weekly,
    Monthly,
}

/// Input contract for a chart draw: a label sequence, a value sequence, a
/// dataset label, and a fill/stroke color pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub label: String,
    pub fill: String,
    pub stroke: String,
}

impl ChartSpec {
    /// Build a spec from a rolling series.
    pub fn from_series(series: &[DailyTotal], label: &str, fill: &str, stroke: &str) -> Self {
        Self {
            labels: series.iter().map(|p| p.date.to_string()).collect(),
            values: series.iter().map(|p| p.hours).collect(),
            label: label.to_string(),
            fill: fill.to_string(),
            stroke: stroke.to_string(),
        }
    }
}

/// A rendered chart instance. Immutable once built; redrawing means
/// building a new one.
#[derive(Debug)]
pub struct Chart {
    spec: ChartSpec,
    rendered: String,
}

impl Chart {
    pub fn new(spec: ChartSpec) -> Self {
        let rendered = render(&spec);
        Self { spec, rendered }
    }

    pub fn output(&self) -> &str {
        &self.rendered
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }
}

/// Holds at most one live chart per slot.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<ChartKind, Chart>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy the previous instance for this slot, then install a fresh
    /// draw of `spec`.
    pub fn redraw(&mut self, kind: ChartKind, spec: ChartSpec) -> &Chart {
        self.charts.remove(&kind);
        self.charts.entry(kind).or_insert_with(|| Chart::new(spec))
    }

    pub fn get(&self, kind: ChartKind) -> Option<&Chart> {
        self.charts.get(&kind)
    }
}

/// Fixed-height column chart: one column per value, bottom-aligned. The
/// topmost cell of each column uses the stroke color, the body the fill
/// color. The baseline carries the first and last label.
fn render(spec: &ChartSpec) -> String {
    let max = spec.values.iter().cloned().fold(0.0_f64, f64::max).max(1.0);
    let fill = ansi_color(&spec.fill);
    let stroke = ansi_color(&spec.stroke);

    let heights: Vec<usize> = spec
        .values
        .iter()
        .map(|&v| {
            if v <= 0.0 {
                0
            } else {
                ((v / max) * CHART_ROWS as f64).ceil() as usize
            }
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!("{} (max {:.1}h)\n", spec.label, max));
    for row in (1..=CHART_ROWS).rev() {
        for &height in &heights {
            if height >= row {
                let color = if height == row { &stroke } else { &fill };
                match color {
                    Some(code) => out.push_str(&format!("{code}█\x1b[0m")),
                    None => out.push('█'),
                }
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str(&"─".repeat(spec.values.len()));
    out.push('\n');
    if let (Some(first), Some(last)) = (spec.labels.first(), spec.labels.last()) {
        out.push_str(&format!("{first} .. {last}\n"));
    }
    out
}

/// `#rrggbb` to an ANSI 24-bit foreground code. Unparsable colors render
/// plain.
fn ansi_color(hex: &str) -> Option<String> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(format!("\x1b[38;2;{r};{g};{b}m"))
}
