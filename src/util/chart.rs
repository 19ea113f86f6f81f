//! Mock bar chart: pure layout math plus a single-instance slot.
//!
//! DESIGN
//! ======
//! Bar geometry is computed off-DOM so it can be tested natively; the
//! browser half only paints rectangles. `ChartSlot` owns the chart
//! lifecycle: the previous instance is always disposed before the next one
//! is created, so repeated renders never stack live charts.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Fixed dataset rendered by the mock query action.
pub const MOCK_LABELS: [&str; 5] = ["A", "B", "C", "D", "E"];
pub const MOCK_VALUES: [f64; 5] = [12.0, 19.0, 3.0, 5.0, 2.0];

/// One bar rectangle in canvas coordinates (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out vertical bars across a `width` x `height` plot area with `gap`
/// pixels between slots. The largest value spans the full height; values
/// at or below zero produce zero-height bars at the baseline.
pub fn bar_layout(values: &[f64], width: f64, height: f64, gap: f64) -> Vec<BarRect> {
    if values.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let slot = width / values.len() as f64;
    let bar_width = (slot - gap).max(1.0);
    let max = values.iter().fold(0.0_f64, |acc, &v| acc.max(v));
    let scale = if max > 0.0 { height / max } else { 0.0 };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let bar_height = v.max(0.0) * scale;
            BarRect {
                x: i as f64 * slot + gap / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// Live-chart bookkeeping. At most one instance exists at a time.
#[derive(Clone, Debug, Default)]
pub struct ChartSlot {
    live: Option<ChartInstance>,
    generation: u64,
}

/// Handle for one rendered chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartInstance {
    pub generation: u64,
}

impl ChartSlot {
    /// Dispose any live instance, then install a fresh one. Returns the new
    /// generation so hosts know to repaint.
    pub fn replace(&mut self) -> u64 {
        self.live = None;
        self.generation += 1;
        self.live = Some(ChartInstance { generation: self.generation });
        self.generation
    }

    pub fn live_count(&self) -> usize {
        usize::from(self.live.is_some())
    }

    /// Monotone render counter; zero until the first `replace`.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Paint the dataset onto the canvas, clearing the previous frame first.
/// A reserved band at the bottom carries the labels.
#[cfg(feature = "csr")]
pub fn draw_bar_chart(canvas: &web_sys::HtmlCanvasElement, labels: &[&str], values: &[f64]) {
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    ctx.clear_rect(0.0, 0.0, width, height);

    let label_band = 18.0;
    let plot_height = (height - label_band).max(0.0);

    ctx.set_fill_style_str("#4e79c7");
    for rect in bar_layout(values, width, plot_height, 8.0) {
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    ctx.set_fill_style_str("#6b7280");
    ctx.set_text_align("center");
    let slot = width / labels.len().max(1) as f64;
    for (i, label) in labels.iter().enumerate() {
        let _ = ctx.fill_text(label, (i as f64 + 0.5) * slot, height - 4.0);
    }
}
