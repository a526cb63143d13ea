/// What the controls currently believe about the media element.
///
/// The element itself is the source of truth; this is the render cache that
/// handlers refresh on every user action and every progress sample.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackViewState {
    pub is_playing: bool,
    /// Position as a percentage of the duration, `0..=100`.
    pub progress_percent: f64,
    /// Last volume written through the controls, `0..=1`.
    pub volume_level: f64,
    pub is_muted: bool,
    pub is_full_screen: bool,
    pub use_native_controls: bool,
}

impl PlaybackViewState {
    pub fn new(use_native_controls: bool) -> Self {
        Self {
            use_native_controls,
            ..Self::default()
        }
    }
}

impl Default for PlaybackViewState {
    fn default() -> Self {
        Self {
            is_playing: false,
            progress_percent: 0.0,
            volume_level: 1.0,
            is_muted: false,
            is_full_screen: false,
            use_native_controls: false,
        }
    }
}

/// Percentage of `duration` reached at `position`, if both are usable.
pub fn progress_percent(position: f64, duration: f64) -> Option<f64> {
    if !position.is_finite() || !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some((position / duration * 100.0).clamp(0.0, 100.0))
}

/// Position in seconds for `percent` of a known `duration`.
pub fn position_for_percent(percent: f64, duration: f64) -> Option<f64> {
    if !percent.is_finite() || !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some(percent.clamp(0.0, 100.0) / 100.0 * duration)
}
