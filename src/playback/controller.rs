use std::time::Duration;

use super::{
    position_for_percent, progress_percent, ControlModeSelector, FullscreenHost, MediaSurface,
    PlaybackViewState, PlayerError, ProgressPoller, RepeatingTimer,
};
use crate::settings::{PlayerSettings, ProgressSource, UnmuteBehavior};

/// State synchronization core behind one video player instance.
///
/// Every handler either applies its full effect or returns an error with the
/// view state untouched. The media element is passed in per call as an
/// `Option` so handlers firing before mount degrade to a no-op.
pub struct PlayerCore<T: RepeatingTimer> {
    state: PlaybackViewState,
    poller: ProgressPoller<T>,
    mode: ControlModeSelector,
    unmute: UnmuteBehavior,
    last_audible_volume: f64,
    position_secs: f64,
    duration_secs: f64,
}

impl<T: RepeatingTimer> PlayerCore<T> {
    pub fn new(settings: &PlayerSettings, timer: T, viewport_width: f64) -> Self {
        let mode = ControlModeSelector::new(settings.native_controls_breakpoint_px);
        let period = Duration::from_millis(u64::from(settings.progress_poll_interval_ms));
        let armed = settings.progress_source == ProgressSource::Polling;
        Self {
            state: PlaybackViewState::new(mode.use_native_controls(viewport_width)),
            poller: ProgressPoller::new(timer, period, armed),
            mode,
            unmute: settings.unmute_behavior,
            last_audible_volume: 1.0,
            position_secs: 0.0,
            duration_secs: f64::NAN,
        }
    }

    pub fn state(&self) -> &PlaybackViewState {
        &self.state
    }

    #[cfg(test)]
    pub fn poller_state(&self) -> super::PollerState {
        self.poller.state()
    }

    /// Last sampled `(position, duration)` in seconds. Duration is NaN until known.
    pub fn clock(&self) -> (f64, f64) {
        (self.position_secs, self.duration_secs)
    }

    // ---- media state mirror ----

    pub fn toggle_play_pause<M>(&mut self, media: Option<&M>) -> Result<(), PlayerError>
    where
        M: MediaSurface + ?Sized,
    {
        let media = media.ok_or(PlayerError::MediaUnavailable)?;
        if media.is_paused() {
            media.play()?;
            self.state.is_playing = true;
            self.poller.start();
        } else {
            media.pause()?;
            self.state.is_playing = false;
            self.poller.stop();
        }
        Ok(())
    }

    pub fn stop<M>(&mut self, media: Option<&M>) -> Result<(), PlayerError>
    where
        M: MediaSurface + ?Sized,
    {
        let media = media.ok_or(PlayerError::MediaUnavailable)?;
        media.pause()?;
        media.set_position(0.0);
        self.state.is_playing = false;
        self.state.progress_percent = 0.0;
        self.position_secs = 0.0;
        // The pause notification would stop it too, but not before a tick
        // could read the rewound position.
        self.poller.stop();
        Ok(())
    }

    pub fn seek<M>(&mut self, media: Option<&M>, target_percent: f64) -> Result<(), PlayerError>
    where
        M: MediaSurface + ?Sized,
    {
        let media = media.ok_or(PlayerError::MediaUnavailable)?;
        if !target_percent.is_finite() {
            return Err(PlayerError::InvalidPosition(target_percent));
        }
        let duration = media.duration();
        let position = position_for_percent(target_percent, duration)
            .ok_or(PlayerError::UnknownDuration(duration))?;
        media.set_position(position);
        self.state.progress_percent = target_percent.clamp(0.0, 100.0);
        self.position_secs = position;
        self.duration_secs = duration;
        Ok(())
    }

    pub fn toggle_mute<M>(&mut self, media: Option<&M>) -> Result<(), PlayerError>
    where
        M: MediaSurface + ?Sized,
    {
        let media = media.ok_or(PlayerError::MediaUnavailable)?;
        let current = media.volume();
        // Native controls mute through the element flag and leave volume alone.
        if current > 0.0 && !media.is_muted() {
            self.last_audible_volume = current;
            media.set_volume(0.0);
            self.state.volume_level = 0.0;
            self.state.is_muted = true;
        } else {
            let restored = match self.unmute {
                UnmuteBehavior::FullVolume => 1.0,
                UnmuteBehavior::RestoreLast => self.last_audible_volume,
            };
            media.set_muted(false);
            media.set_volume(restored);
            self.state.volume_level = restored;
            self.state.is_muted = false;
        }
        Ok(())
    }

    pub fn set_volume<M>(&mut self, media: Option<&M>, level: f64) -> Result<(), PlayerError>
    where
        M: MediaSurface + ?Sized,
    {
        let media = media.ok_or(PlayerError::MediaUnavailable)?;
        if !level.is_finite() {
            return Err(PlayerError::InvalidVolume(level));
        }
        let level = level.clamp(0.0, 1.0);
        if level > 0.0 {
            media.set_muted(false);
            self.last_audible_volume = level;
        }
        media.set_volume(level);
        self.state.volume_level = level;
        self.state.is_muted = level == 0.0;
        Ok(())
    }

    /// Pull volume and mute from the element after native controls changed them.
    pub fn sync_volume<M>(&mut self, media: Option<&M>) -> Result<(), PlayerError>
    where
        M: MediaSurface + ?Sized,
    {
        let media = media.ok_or(PlayerError::MediaUnavailable)?;
        let level = media.volume();
        if !level.is_finite() {
            return Err(PlayerError::InvalidVolume(level));
        }
        let level = level.clamp(0.0, 1.0);
        self.state.volume_level = level;
        self.state.is_muted = level == 0.0 || media.is_muted();
        if level > 0.0 {
            self.last_audible_volume = level;
        }
        Ok(())
    }

    /// The element started playing, whichever control triggered it.
    pub fn on_media_started(&mut self) {
        self.state.is_playing = true;
        self.poller.start();
    }

    pub fn on_media_paused(&mut self) {
        self.state.is_playing = false;
        self.poller.stop();
    }

    pub fn on_media_finished(&mut self) {
        self.state.is_playing = false;
        self.state.progress_percent = 0.0;
        self.position_secs = 0.0;
        self.poller.stop();
    }

    // ---- progress sampling ----

    /// One progress sample. Returns the new percentage.
    pub fn sample_progress<M>(&mut self, media: Option<&M>) -> Result<f64, PlayerError>
    where
        M: MediaSurface + ?Sized,
    {
        let media = media.ok_or(PlayerError::MediaUnavailable)?;
        let position = media.position();
        let duration = media.duration();
        let percent = progress_percent(position, duration).ok_or_else(|| {
            if duration.is_finite() && duration > 0.0 {
                PlayerError::InvalidPosition(position)
            } else {
                PlayerError::UnknownDuration(duration)
            }
        })?;
        self.state.progress_percent = percent;
        self.position_secs = position;
        self.duration_secs = duration;
        Ok(percent)
    }

    /// Record a duration reported by `loadedmetadata` / `durationchange`.
    pub fn on_duration_known(&mut self, duration: f64) {
        if duration.is_finite() && duration > 0.0 {
            self.duration_secs = duration;
        }
    }

    // ---- control mode ----

    /// Returns true when the control mode flipped.
    pub fn on_viewport_resize(&mut self, width: f64) -> bool {
        if !width.is_finite() {
            return false;
        }
        let native = self.mode.use_native_controls(width);
        let changed = native != self.state.use_native_controls;
        self.state.use_native_controls = native;
        if changed {
            tracing::debug!(width, native, "control mode changed");
        }
        changed
    }

    /// Request or exit fullscreen. Never writes `is_full_screen`; the change
    /// notification does that through [`Self::on_fullscreen_change`].
    pub fn toggle_full_screen<F>(&self, host: Option<&F>) -> Result<(), PlayerError>
    where
        F: FullscreenHost + ?Sized,
    {
        let host = host.ok_or(PlayerError::MediaUnavailable)?;
        if self.state.is_full_screen {
            host.exit_fullscreen()
        } else {
            host.request_fullscreen()
        }
    }

    /// Sole writer of `is_full_screen`. Returns true when the flag changed.
    pub fn on_fullscreen_change(&mut self, document_is_fullscreen: bool) -> bool {
        let changed = self.state.is_full_screen != document_is_fullscreen;
        self.state.is_full_screen = document_is_fullscreen;
        changed
    }

    /// Unmount: cancel the sampling schedule.
    pub fn teardown(&mut self) {
        if self.poller.stop() {
            tracing::debug!("player unmounted while playing; progress poller cancelled");
        }
        self.state.is_playing = false;
    }
}
