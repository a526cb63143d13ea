/// Viewport width (px) below which the platform's own controls are shown.
use crate::settings::NATIVE_CONTROLS_BREAKPOINT_PX;

/// Native vs custom control selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlModeSelector {
    breakpoint_px: f64,
}

impl ControlModeSelector {
    pub fn new(breakpoint_px: f64) -> Self {
        let breakpoint_px = if breakpoint_px.is_finite() && breakpoint_px > 0.0 {
            breakpoint_px
        } else {
            NATIVE_CONTROLS_BREAKPOINT_PX
        };
        Self { breakpoint_px }
    }

    #[cfg(test)]
    pub fn breakpoint_px(&self) -> f64 {
        self.breakpoint_px
    }

    /// No hysteresis: the threshold is applied as-is on every width report.
    pub fn use_native_controls(&self, viewport_width: f64) -> bool {
        viewport_width < self.breakpoint_px
    }
}

impl Default for ControlModeSelector {
    fn default() -> Self {
        Self::new(NATIVE_CONTROLS_BREAKPOINT_PX)
    }
}
