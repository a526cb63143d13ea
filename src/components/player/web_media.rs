//! Browser bindings for the playback core: the `<video>` element, the
//! document's fullscreen API, DOM listeners and the sampling interval.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element, Event, EventTarget, HtmlMediaElement, HtmlVideoElement};

use crate::playback::{
    first_available, EventSource, FullscreenHost, MediaSurface, PlayerError, RepeatingTimer,
    EXIT_FULLSCREEN, FULLSCREEN_ELEMENT, REQUEST_FULLSCREEN,
};

/// Look up the player's video element. `None` until it is mounted.
pub fn video_element(id: &str) -> Option<HtmlVideoElement> {
    let document = window()?.document()?;
    document.get_element_by_id(id)?.dyn_into::<HtmlVideoElement>().ok()
}

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

fn js_error(call: &'static str, err: JsValue) -> PlayerError {
    PlayerError::media(call, format!("{err:?}"))
}

// Inherent media methods live on `HtmlMediaElement`; calling them through the
// base type avoids resolving back to this trait.
impl MediaSurface for HtmlVideoElement {
    fn is_paused(&self) -> bool {
        self.paused()
    }

    fn play(&self) -> Result<(), PlayerError> {
        // The returned promise rejects when autoplay is blocked; the element
        // then never fires `play`, so nothing needs undoing here.
        HtmlMediaElement::play(self)
            .map(|_| ())
            .map_err(|err| js_error("play", err))
    }

    fn pause(&self) -> Result<(), PlayerError> {
        HtmlMediaElement::pause(self).map_err(|err| js_error("pause", err))
    }

    fn position(&self) -> f64 {
        self.current_time()
    }

    fn set_position(&self, seconds: f64) {
        self.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        HtmlMediaElement::duration(self)
    }

    fn volume(&self) -> f64 {
        HtmlMediaElement::volume(self)
    }

    fn set_volume(&self, level: f64) {
        HtmlMediaElement::set_volume(self, level);
    }

    fn is_muted(&self) -> bool {
        self.muted()
    }

    fn set_muted(&self, muted: bool) {
        HtmlMediaElement::set_muted(self, muted);
    }
}

/// Calls the first vendor variant of a method that exists on `target`.
fn call_first_available(target: &JsValue, names: &[&'static str]) -> Result<(), PlayerError> {
    let (name, function) = first_available(names, |name| {
        js_sys::Reflect::get(target, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    })
    .ok_or(PlayerError::FullscreenUnsupported)?;
    function
        .call0(target)
        .map(|_| ())
        .map_err(|err| js_error(name, err))
}

pub fn document_is_fullscreen(document: &Document) -> bool {
    let document: &JsValue = document.as_ref();
    first_available(&FULLSCREEN_ELEMENT, |name| {
        js_sys::Reflect::get(document, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_null() && !value.is_undefined())
    })
    .is_some()
}

/// Fullscreen requests go to the video, exits go to its document.
pub struct DocumentFullscreen {
    surface: Element,
    document: Document,
}

impl DocumentFullscreen {
    pub fn for_video(video: &HtmlVideoElement) -> Option<Self> {
        let document = video.owner_document()?;
        Some(Self {
            surface: video.clone().into(),
            document,
        })
    }
}

impl FullscreenHost for DocumentFullscreen {
    fn request_fullscreen(&self) -> Result<(), PlayerError> {
        call_first_available(self.surface.as_ref(), &REQUEST_FULLSCREEN)
    }

    fn exit_fullscreen(&self) -> Result<(), PlayerError> {
        call_first_available(self.document.as_ref(), &EXIT_FULLSCREEN)
    }
}

/// A DOM listener that is removed again when dropped.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl EventSource for EventTarget {
    type Subscription = EventSubscription;

    fn subscribe(
        &self,
        event: &'static str,
        mut handler: Box<dyn FnMut()>,
    ) -> Option<EventSubscription> {
        EventSubscription::listen(self, event, move |_| handler())
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

type TickSlot = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

/// `setInterval`-backed timer. The tick body is bound once after the player
/// state exists; each schedule is a `gloo` interval cleared on drop.
#[derive(Clone, Default)]
pub struct IntervalTimer {
    on_tick: TickSlot,
}

impl IntervalTimer {
    pub fn set_on_tick(&self, tick: impl FnMut() + 'static) {
        *self.on_tick.borrow_mut() = Some(Box::new(tick));
    }

    /// Drops the bound tick body along with everything it captured.
    pub fn clear_on_tick(&self) {
        self.on_tick.borrow_mut().take();
    }
}

impl RepeatingTimer for IntervalTimer {
    type Schedule = Interval;

    fn schedule(&self, period: Duration) -> Interval {
        let on_tick = Rc::clone(&self.on_tick);
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, move || {
            if let Some(tick) = on_tick.borrow_mut().as_mut() {
                tick();
            }
        })
    }
}
