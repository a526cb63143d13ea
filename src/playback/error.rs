use thiserror::Error;

/// Reasons a playback handler left the view state untouched.
///
/// None of these are fatal. The component logs them and keeps rendering the
/// last known state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    #[error("media element is not mounted yet")]
    MediaUnavailable,

    #[error("media duration is not known yet (got {0})")]
    UnknownDuration(f64),

    #[error("media position is not a finite number (got {0})")]
    InvalidPosition(f64),

    #[error("volume must be a number between 0 and 1 (got {0})")]
    InvalidVolume(f64),

    #[error("fullscreen is not supported by this platform")]
    FullscreenUnsupported,

    #[error("media call `{call}` failed: {message}")]
    Media { call: &'static str, message: String },
}

impl PlayerError {
    pub fn media(call: &'static str, message: impl Into<String>) -> Self {
        Self::Media {
            call,
            message: message.into(),
        }
    }
}

/// Log a degraded handler outcome and swallow it.
pub fn log_degraded<T>(operation: &str, result: Result<T, PlayerError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(operation, error = %err, "playback handler left state unchanged");
            None
        }
    }
}
