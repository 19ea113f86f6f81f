//! Cancelable playback of a `(delay, step)` schedule.
//!
//! DESIGN
//! ======
//! The original demo chained raw one-shot timers with no teardown path.
//! Here the whole schedule runs from a single task: one cancel flag stops
//! every step that has not fired yet, so a page torn down mid-sequence
//! leaks nothing.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

#[cfg(feature = "csr")]
use std::sync::Arc;
#[cfg(feature = "csr")]
use std::sync::atomic::{AtomicBool, Ordering};

/// Convert absolute offsets into successive sleep intervals. Offsets are
/// clamped monotone, so an out-of-order entry waits zero rather than
/// underflowing.
pub fn offsets_to_intervals<T: Copy>(schedule: &[(u32, T)]) -> Vec<(u32, T)> {
    let mut elapsed = 0_u32;
    schedule
        .iter()
        .map(|&(offset, step)| {
            let wait = offset.saturating_sub(elapsed);
            elapsed = elapsed.max(offset);
            (wait, step)
        })
        .collect()
}

/// Handle for a running sequence. Cancellation stops pending steps; steps
/// already applied stay applied.
#[cfg(feature = "csr")]
#[derive(Clone, Default)]
pub struct SequenceHandle {
    cancelled: Arc<AtomicBool>,
}

#[cfg(feature = "csr")]
impl SequenceHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Play `schedule`, applying each step at its offset from now.
#[cfg(feature = "csr")]
pub fn play<T, F>(schedule: &[(u32, T)], mut apply: F) -> SequenceHandle
where
    T: Copy + 'static,
    F: FnMut(T) + 'static,
{
    let handle = SequenceHandle::default();
    let cancelled = handle.cancelled.clone();
    let intervals = offsets_to_intervals(schedule);

    leptos::task::spawn_local(async move {
        for (wait, step) in intervals {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(wait))).await;
            if cancelled.load(Ordering::Relaxed) {
                return;
            }
            apply(step);
        }
    });

    handle
}
