use std::time::Duration;

/// Something that can fire a callback on a fixed period.
///
/// The returned schedule keeps firing for as long as it is alive; dropping it
/// cancels the repetition.
pub trait RepeatingTimer {
    type Schedule;

    fn schedule(&self, period: Duration) -> Self::Schedule;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    Idle,
    Running,
}

/// Periodic progress sampling while media plays.
///
/// Holds at most one live schedule. Starting always drops the previous one
/// first, so repeated play notifications never stack intervals.
pub struct ProgressPoller<T: RepeatingTimer> {
    timer: T,
    period: Duration,
    /// When false the poller only tracks Running/Idle and progress comes from
    /// the element's time-update notification instead.
    armed: bool,
    state: PollerState,
    active: Option<T::Schedule>,
}

impl<T: RepeatingTimer> ProgressPoller<T> {
    pub fn new(timer: T, period: Duration, armed: bool) -> Self {
        Self {
            timer,
            period,
            armed,
            state: PollerState::Idle,
            active: None,
        }
    }

    pub fn start(&mut self) {
        // Cancel before rescheduling.
        self.active = None;
        if self.armed {
            self.active = Some(self.timer.schedule(self.period));
        }
        if self.state == PollerState::Idle {
            tracing::trace!(period_ms = self.period.as_millis() as u64, "progress poller started");
        }
        self.state = PollerState::Running;
    }

    /// Returns true if the poller was running.
    pub fn stop(&mut self) -> bool {
        self.active = None;
        let was_running = self.state == PollerState::Running;
        self.state = PollerState::Idle;
        if was_running {
            tracing::trace!("progress poller stopped");
        }
        was_running
    }

    #[cfg(test)]
    pub fn state(&self) -> PollerState {
        self.state
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.state == PollerState::Running
    }

    #[cfg(test)]
    pub fn has_schedule(&self) -> bool {
        self.active.is_some()
    }


}

impl<T: RepeatingTimer> Drop for ProgressPoller<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
