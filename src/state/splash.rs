//! Splash sequence: a declarative schedule of idempotent visual steps.
//!
//! DESIGN
//! ======
//! The intro is a fixed list of `(offset_ms, step)` pairs instead of chained
//! one-shot timers, so playback is a data walk that `util::sequence` can
//! cancel on teardown. Steps only ever set flags; replaying one is a no-op.

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

/// One visual activation in the intro sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashStep {
    /// Fly in one logo part (1-based). The parts arrive out of order.
    FlyInPart(u8),
    /// Zoom the assembled logo.
    LogoZoom,
    /// Fade the logo back slightly.
    LogoFade,
    /// Reveal the login panel and enable the background treatment.
    ShowLogin,
}

/// Absolute offsets from sequence start, in milliseconds.
/// Fly-in order is 4 → 1 → 3 → 2, matching the logo assembly choreography.
pub const SCHEDULE: &[(u32, SplashStep)] = &[
    (100, SplashStep::FlyInPart(4)),
    (260, SplashStep::FlyInPart(1)),
    (420, SplashStep::FlyInPart(3)),
    (560, SplashStep::FlyInPart(2)),
    (900, SplashStep::LogoZoom),
    (2400, SplashStep::LogoFade),
    (2600, SplashStep::ShowLogin),
];

/// Activation flags for the splash visuals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplashState {
    /// Fly-in flag per logo part, index 0 = part 1.
    pub parts_in: [bool; 4],
    pub logo_zoom: bool,
    pub logo_fade: bool,
    pub login_visible: bool,
    /// Background photo treatment; on only while the login panel shows.
    pub backdrop: bool,
}

impl SplashState {
    /// Apply one step. Out-of-range part indices are ignored.
    pub fn apply(&mut self, step: SplashStep) {
        match step {
            SplashStep::FlyInPart(n) => {
                if let Some(flag) = usize::from(n)
                    .checked_sub(1)
                    .and_then(|i| self.parts_in.get_mut(i))
                {
                    *flag = true;
                }
            }
            SplashStep::LogoZoom => self.logo_zoom = true,
            SplashStep::LogoFade => self.logo_fade = true,
            SplashStep::ShowLogin => {
                self.login_visible = true;
                self.backdrop = true;
            }
        }
    }

    /// True once every scheduled activation has fired.
    pub fn completed(&self) -> bool {
        self.parts_in.iter().all(|p| *p) && self.logo_zoom && self.logo_fade && self.login_visible
    }
}
