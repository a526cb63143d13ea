use super::FULLSCREEN_CHANGE_EVENTS;

pub const RESIZE_EVENT: &str = "resize";

/// Something handlers can be attached to by event name: the window or the
/// document in the browser.
pub trait EventSource {
    /// Keeps the listener attached while alive; dropping it detaches.
    type Subscription;

    fn subscribe(
        &self,
        event: &'static str,
        handler: Box<dyn FnMut()>,
    ) -> Option<Self::Subscription>;
}

/// Window and document listeners of one mounted player.
///
/// `attach` registers at most once until `release`; dropping releases too.
pub struct PlayerSubscriptions<S> {
    active: Vec<S>,
    attached: bool,
}

impl<S> Default for PlayerSubscriptions<S> {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            attached: false,
        }
    }
}

impl<S> PlayerSubscriptions<S> {
    /// Subscribe `on_resize` to the viewport and `on_fullscreen_change` to
    /// every vendor variant of the document's change event. Returns the
    /// number of listeners added.
    pub fn attach<W, D, R, F>(
        &mut self,
        viewport: &W,
        document: Option<&D>,
        on_resize: R,
        on_fullscreen_change: F,
    ) -> usize
    where
        W: EventSource<Subscription = S> + ?Sized,
        D: EventSource<Subscription = S> + ?Sized,
        R: FnMut() + 'static,
        F: FnMut() + Clone + 'static,
    {
        if self.attached {
            return 0;
        }
        self.attached = true;

        let before = self.active.len();
        self.active
            .extend(viewport.subscribe(RESIZE_EVENT, Box::new(on_resize)));
        if let Some(document) = document {
            for event in FULLSCREEN_CHANGE_EVENTS {
                self.active
                    .extend(document.subscribe(event, Box::new(on_fullscreen_change.clone())));
            }
        }
        self.active.len() - before
    }

    /// Detach everything. A later `attach` subscribes afresh.
    pub fn release(&mut self) {
        self.active.clear();
        self.attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::fakes::{FakeEventTarget, FakeTimer};
    use crate::playback::PlayerCore;
    use crate::settings::PlayerSettings;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<usize>>, impl FnMut() + Clone + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = Rc::clone(&count);
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn mount_subscribes_resize_and_every_fullscreen_variant_once() {
        let window = FakeEventTarget::default();
        let document = FakeEventTarget::default();
        let (_, on_resize) = counter();
        let (_, on_change) = counter();
        let mut subs = PlayerSubscriptions::default();

        assert_eq!(subs.attach(&window, Some(&document), on_resize, on_change), 5);
        assert_eq!(window.live(RESIZE_EVENT), 1);
        for event in FULLSCREEN_CHANGE_EVENTS {
            assert_eq!(document.live(event), 1, "{event}");
        }

        let (_, on_resize) = counter();
        let (_, on_change) = counter();
        assert_eq!(subs.attach(&window, Some(&document), on_resize, on_change), 0);
        assert_eq!(window.added(), 1);
        assert_eq!(document.added(), 4);
        assert_eq!(window.live_total() + document.live_total(), 5);
    }

    #[test]
    fn dropping_removes_every_listener_exactly_once() {
        let window = FakeEventTarget::default();
        let document = FakeEventTarget::default();
        {
            let (_, on_resize) = counter();
            let (_, on_change) = counter();
            let mut subs = PlayerSubscriptions::default();
            subs.attach(&window, Some(&document), on_resize, on_change);
        }
        assert_eq!(window.live_total(), 0);
        assert_eq!(document.live_total(), 0);
        assert_eq!(window.removed(), 1);
        assert_eq!(document.removed(), 4);
    }

    #[test]
    fn release_then_remount_does_not_stack_listeners() {
        let window = FakeEventTarget::default();
        let document = FakeEventTarget::default();
        let (resizes, on_resize) = counter();
        let (changes, on_change) = counter();
        let mut subs = PlayerSubscriptions::default();

        subs.attach(&window, Some(&document), on_resize.clone(), on_change.clone());
        subs.release();
        assert_eq!(document.live_total(), 0);
        subs.attach(&window, Some(&document), on_resize, on_change);

        window.fire(RESIZE_EVENT);
        document.fire("webkitfullscreenchange");
        assert_eq!(resizes.get(), 1);
        assert_eq!(changes.get(), 1);
        assert_eq!(document.live_total(), 4);
    }

    #[test]
    fn missing_document_still_tracks_resize() {
        let window = FakeEventTarget::default();
        let (_, on_resize) = counter();
        let (_, on_change) = counter();
        let mut subs = PlayerSubscriptions::default();

        assert_eq!(subs.attach(&window, None::<&FakeEventTarget>, on_resize, on_change), 1);
        assert_eq!(window.live(RESIZE_EVENT), 1);
    }

    #[test]
    fn any_vendor_change_event_reconciles_the_player() {
        let window = FakeEventTarget::default();
        let document = FakeEventTarget::default();
        let platform_fullscreen = Rc::new(Cell::new(false));
        let core = Rc::new(RefCell::new(PlayerCore::new(
            &PlayerSettings::default(),
            FakeTimer::default(),
            1280.0,
        )));

        let on_resize = {
            let core = Rc::clone(&core);
            move || {
                core.borrow_mut().on_viewport_resize(500.0);
            }
        };
        let on_change = {
            let core = Rc::clone(&core);
            let platform_fullscreen = Rc::clone(&platform_fullscreen);
            move || {
                core.borrow_mut().on_fullscreen_change(platform_fullscreen.get());
            }
        };
        let mut subs = PlayerSubscriptions::default();
        subs.attach(&window, Some(&document), on_resize, on_change);

        platform_fullscreen.set(true);
        document.fire("mozfullscreenchange");
        assert!(core.borrow().state().is_full_screen);

        platform_fullscreen.set(false);
        document.fire("MSFullscreenChange");
        assert!(!core.borrow().state().is_full_screen);

        window.fire(RESIZE_EVENT);
        assert!(core.borrow().state().use_native_controls);

        drop(subs);
        platform_fullscreen.set(true);
        document.fire("fullscreenchange");
        assert!(!core.borrow().state().is_full_screen);
        assert_eq!(window.live_total() + document.live_total(), 0);
    }
}
