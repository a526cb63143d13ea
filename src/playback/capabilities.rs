use super::PlayerError;

/// The playable media element the controls drive.
///
/// Methods take `&self` because the browser element is a shared handle with
/// interior state; fakes use `Cell`s for the same reason.
pub trait MediaSurface {
    fn is_paused(&self) -> bool;
    fn play(&self) -> Result<(), PlayerError>;
    fn pause(&self) -> Result<(), PlayerError>;
    /// Current position in seconds.
    fn position(&self) -> f64;
    fn set_position(&self, seconds: f64);
    /// Total length in seconds. NaN or 0 until metadata has loaded.
    fn duration(&self) -> f64;
    /// Volume in `[0, 1]`.
    fn volume(&self) -> f64;
    fn set_volume(&self, level: f64);
    /// The element's own mute flag, set by native controls.
    fn is_muted(&self) -> bool;
    fn set_muted(&self, muted: bool);
}

/// Fullscreen support of the display surface and its document.
///
/// Requests target the media surface, exits target the document.
pub trait FullscreenHost {
    fn request_fullscreen(&self) -> Result<(), PlayerError>;
    fn exit_fullscreen(&self) -> Result<(), PlayerError>;
}
