//! Player settings. Behavior knobs only: playback position and volume are
//! never stored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "rustyframe.player_settings";
#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_FILE: &str = "player_settings.json";

/// Viewports narrower than this hand playback to the platform's own controls.
pub const NATIVE_CONTROLS_BREAKPOINT_PX: f64 = 767.0;

const MIN_POLL_INTERVAL_MS: u32 = 50;
const MAX_POLL_INTERVAL_MS: u32 = 60_000;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where progress samples come from while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressSource {
    /// Fixed-period interval reading the element's position.
    #[default]
    Polling,
    /// The element's own `timeupdate` notification.
    TimeUpdate,
}

/// Volume restored when unmuting through the mute button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnmuteBehavior {
    /// Always back to full volume, dropping any intermediate level.
    #[default]
    FullVolume,
    /// Back to the last non-zero level set through the volume slider.
    RestoreLast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_breakpoint")]
    pub native_controls_breakpoint_px: f64,
    #[serde(default = "default_poll_interval_ms")]
    pub progress_poll_interval_ms: u32,
    #[serde(default)]
    pub progress_source: ProgressSource,
    #[serde(default)]
    pub unmute_behavior: UnmuteBehavior,
    #[serde(default = "default_volume_step")]
    pub volume_step: f64,
    /// Video URL handed to the element as-is. The default names the host
    /// page's media path; nothing under `assets/` is bundled for it.
    #[serde(default = "default_media_src")]
    pub media_src: String,
    /// Poster URL, resolved the same way as `media_src`.
    #[serde(default = "default_poster_src")]
    pub poster_src: String,
}

fn default_breakpoint() -> f64 {
    NATIVE_CONTROLS_BREAKPOINT_PX
}

fn default_poll_interval_ms() -> u32 {
    1000
}

fn default_volume_step() -> f64 {
    0.05
}

fn default_media_src() -> String {
    "/assets/video-1/toggle-class.mp4".to_string()
}

fn default_poster_src() -> String {
    "/assets/video-1/thumb.png".to_string()
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            native_controls_breakpoint_px: default_breakpoint(),
            progress_poll_interval_ms: default_poll_interval_ms(),
            progress_source: ProgressSource::default(),
            unmute_behavior: UnmuteBehavior::default(),
            volume_step: default_volume_step(),
            media_src: default_media_src(),
            poster_src: default_poster_src(),
        }
    }
}

impl PlayerSettings {
    /// Clamp hand-edited values back into usable ranges.
    pub fn normalized(mut self) -> Self {
        if !self.native_controls_breakpoint_px.is_finite()
            || self.native_controls_breakpoint_px <= 0.0
        {
            self.native_controls_breakpoint_px = default_breakpoint();
        }
        self.progress_poll_interval_ms = self
            .progress_poll_interval_ms
            .clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS);
        if !self.volume_step.is_finite() || self.volume_step <= 0.0 {
            self.volume_step = default_volume_step();
        }
        self.volume_step = self.volume_step.min(1.0);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: PlayerSettings = serde_json::from_str(json)?;
        Ok(settings.normalized())
    }
}

/// Stored settings, or `None` when nothing has been saved yet.
#[cfg(target_arch = "wasm32")]
fn read_stored() -> Result<Option<PlayerSettings>, SettingsError> {
    let stored = LocalStorage::raw()
        .get_item(SETTINGS_KEY)
        .map_err(|err| SettingsError::Storage(format!("{err:?}")))?;
    stored.as_deref().map(PlayerSettings::from_json).transpose()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_stored() -> Result<Option<PlayerSettings>, SettingsError> {
    let dir = dirs::config_dir()
        .ok_or_else(|| SettingsError::Storage("no config directory on this platform".into()))?;
    let path = dir.join("rustyframe").join(SETTINGS_FILE);
    match std::fs::read_to_string(&path) {
        Ok(json) => PlayerSettings::from_json(&json).map(Some),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn load_settings() -> PlayerSettings {
    match read_stored() {
        Ok(Some(settings)) => settings,
        Ok(None) => PlayerSettings::default(),
        Err(err) => {
            tracing::warn!(error = %err, "stored player settings unusable, using defaults");
            PlayerSettings::default()
        }
    }
}
