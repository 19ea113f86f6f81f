//! Canvas bridge for the mock bar chart.
//!
//! ARCHITECTURE
//! ============
//! State owns the chart lifecycle through `ChartSlot`; this host only
//! repaints when the slot's generation moves. The slot disposes the
//! previous instance before installing the next, so no click sequence can
//! leave two live charts behind.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
#[cfg(feature = "csr")]
use crate::util::chart::{MOCK_LABELS, MOCK_VALUES, draw_bar_chart};

#[component]
pub fn ChartHost() -> impl IntoView {
    let dash = expect_context::<RwSignal<DashboardState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let generation = dash.get().chart.generation();

        #[cfg(feature = "csr")]
        {
            // Nothing is drawn until the first mock query fires.
            if generation == 0 {
                return;
            }
            if let Some(canvas) = canvas_ref.get() {
                draw_bar_chart(&canvas, &MOCK_LABELS, &MOCK_VALUES);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = generation;
        }
    });

    view! {
        <canvas class="mock-chart" width="480" height="220" node_ref=canvas_ref></canvas>
    }
}
