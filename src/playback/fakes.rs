//! In-memory stand-ins for the browser capabilities, used by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::{EventSource, FullscreenHost, MediaSurface, PlayerError, RepeatingTimer};

pub struct FakeMedia {
    pub paused: Cell<bool>,
    pub position: Cell<f64>,
    pub duration: Cell<f64>,
    pub volume: Cell<f64>,
    pub play_calls: Cell<usize>,
    pub pause_calls: Cell<usize>,
    pub reject_play: Cell<bool>,
    pub muted: Cell<bool>,
}

impl FakeMedia {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            paused: Cell::new(true),
            position: Cell::new(0.0),
            duration: Cell::new(duration),
            volume: Cell::new(1.0),
            play_calls: Cell::new(0),
            pause_calls: Cell::new(0),
            reject_play: Cell::new(false),
            muted: Cell::new(false),
        }
    }

    /// Media whose metadata has not loaded yet.
    pub fn unloaded() -> Self {
        Self::with_duration(f64::NAN)
    }
}

impl MediaSurface for FakeMedia {
    fn is_paused(&self) -> bool {
        self.paused.get()
    }

    fn play(&self) -> Result<(), PlayerError> {
        self.play_calls.set(self.play_calls.get() + 1);
        if self.reject_play.get() {
            return Err(PlayerError::media("play", "NotAllowedError"));
        }
        self.paused.set(false);
        Ok(())
    }

    fn pause(&self) -> Result<(), PlayerError> {
        self.pause_calls.set(self.pause_calls.get() + 1);
        self.paused.set(true);
        Ok(())
    }

    fn position(&self) -> f64 {
        self.position.get()
    }

    fn set_position(&self, seconds: f64) {
        self.position.set(seconds);
    }

    fn duration(&self) -> f64 {
        self.duration.get()
    }

    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn set_volume(&self, level: f64) {
        self.volume.set(level);
    }

    fn is_muted(&self) -> bool {
        self.muted.get()
    }

    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }
}

pub struct FakeFullscreen {
    pub supported: bool,
    pub active: Cell<bool>,
    pub requests: Cell<usize>,
    pub exits: Cell<usize>,
}

impl FakeFullscreen {
    pub fn new() -> Self {
        Self {
            supported: true,
            active: Cell::new(false),
            requests: Cell::new(0),
            exits: Cell::new(0),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }
}

impl FullscreenHost for FakeFullscreen {
    fn request_fullscreen(&self) -> Result<(), PlayerError> {
        if !self.supported {
            return Err(PlayerError::FullscreenUnsupported);
        }
        self.requests.set(self.requests.get() + 1);
        self.active.set(true);
        Ok(())
    }

    fn exit_fullscreen(&self) -> Result<(), PlayerError> {
        if !self.supported {
            return Err(PlayerError::FullscreenUnsupported);
        }
        self.exits.set(self.exits.get() + 1);
        self.active.set(false);
        Ok(())
    }
}

#[derive(Default)]
struct TimerLedger {
    live: Cell<usize>,
    peak: Cell<usize>,
    scheduled: Cell<usize>,
    last_period: Cell<Option<Duration>>,
}

/// Counts live schedules so tests can assert at most one interval exists.
#[derive(Clone, Default)]
pub struct FakeTimer {
    ledger: Rc<TimerLedger>,
}

impl FakeTimer {
    pub fn live(&self) -> usize {
        self.ledger.live.get()
    }

    pub fn peak(&self) -> usize {
        self.ledger.peak.get()
    }

    pub fn scheduled(&self) -> usize {
        self.ledger.scheduled.get()
    }

    pub fn last_period(&self) -> Option<Duration> {
        self.ledger.last_period.get()
    }
}

pub struct FakeSchedule {
    ledger: Rc<TimerLedger>,
}

impl Drop for FakeSchedule {
    fn drop(&mut self) {
        self.ledger.live.set(self.ledger.live.get() - 1);
    }
}

impl RepeatingTimer for FakeTimer {
    type Schedule = FakeSchedule;

    fn schedule(&self, period: Duration) -> FakeSchedule {
        let ledger = &self.ledger;
        ledger.scheduled.set(ledger.scheduled.get() + 1);
        ledger.live.set(ledger.live.get() + 1);
        ledger.peak.set(ledger.peak.get().max(ledger.live.get()));
        ledger.last_period.set(Some(period));
        FakeSchedule {
            ledger: Rc::clone(ledger),
        }
    }
}

type Listener = (u64, &'static str, Box<dyn FnMut()>);

#[derive(Default)]
struct ListenerLedger {
    listeners: RefCell<Vec<Listener>>,
    next_id: Cell<u64>,
    added: Cell<usize>,
    removed: Cell<usize>,
}

/// Event target that records subscriptions and fires handlers on demand.
#[derive(Clone, Default)]
pub struct FakeEventTarget {
    ledger: Rc<ListenerLedger>,
}

impl FakeEventTarget {
    pub fn fire(&self, event: &str) {
        for (_, name, handler) in self.ledger.listeners.borrow_mut().iter_mut() {
            if *name == event {
                handler();
            }
        }
    }

    pub fn live(&self, event: &str) -> usize {
        self.ledger
            .listeners
            .borrow()
            .iter()
            .filter(|(_, name, _)| *name == event)
            .count()
    }

    pub fn live_total(&self) -> usize {
        self.ledger.listeners.borrow().len()
    }

    pub fn added(&self) -> usize {
        self.ledger.added.get()
    }

    pub fn removed(&self) -> usize {
        self.ledger.removed.get()
    }
}

pub struct FakeSubscription {
    ledger: Rc<ListenerLedger>,
    id: u64,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        let mut listeners = self.ledger.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _, _)| *id != self.id);
        let removed = before - listeners.len();
        self.ledger.removed.set(self.ledger.removed.get() + removed);
    }
}

impl EventSource for FakeEventTarget {
    type Subscription = FakeSubscription;

    fn subscribe(
        &self,
        event: &'static str,
        handler: Box<dyn FnMut()>,
    ) -> Option<FakeSubscription> {
        let ledger = &self.ledger;
        let id = ledger.next_id.get();
        ledger.next_id.set(id + 1);
        ledger.added.set(ledger.added.get() + 1);
        ledger.listeners.borrow_mut().push((id, event, handler));
        Some(FakeSubscription {
            ledger: Rc::clone(ledger),
            id,
        })
    }
}
