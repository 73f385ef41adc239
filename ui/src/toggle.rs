//! Framework-independent state for a two-source image toggle.
//!
//! The controller never reaches for a global re-render scheduler. Instead it is
//! handed a [`ChangeNotifier`] at construction and calls it once per state
//! change, so the toggle logic can be driven without any UI framework present.

use std::fmt;
use std::sync::Arc;

/// Which of the two image sources is currently displayed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum TogglePhase {
    #[default]
    DefaultActive,
    AlternateActive,
}

/// The stored state of an image toggle. The active source is derived, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ToggleState {
    using_alternate_source: bool,
}

impl ToggleState {
    pub fn using_alternate_source(&self) -> bool {
        self.using_alternate_source
    }

    pub fn phase(&self) -> TogglePhase {
        if self.using_alternate_source {
            TogglePhase::AlternateActive
        } else {
            TogglePhase::DefaultActive
        }
    }

    /// Flips to the other source.
    pub fn toggle(&mut self) {
        self.using_alternate_source = !self.using_alternate_source;
    }

    /// Returns the source selected by the current state.
    pub fn active_source<'a>(&self, sources: &'a ImageSources) -> &'a str {
        if self.using_alternate_source {
            &sources.alternate_source
        } else {
            &sources.default_source
        }
    }
}

/// The pair of URLs a toggle selects between. Neither is validated.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImageSources {
    pub default_source: String,
    pub alternate_source: String,
}

impl ImageSources {
    pub fn new(default_source: impl Into<String>, alternate_source: impl Into<String>) -> Self {
        Self {
            default_source: default_source.into(),
            alternate_source: alternate_source.into(),
        }
    }
}

/// Something that can be told "the state changed, render again".
pub trait ChangeNotifier {
    fn notify(&self);
}

/// A [`ChangeNotifier`] backed by a host framework's update handle,
/// e.g. the closure returned by dioxus' `schedule_update()`.
#[derive(Clone)]
pub struct RenderScheduler(Arc<dyn Fn() + Send + Sync>);

impl RenderScheduler {
    pub fn new(schedule: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self(schedule)
    }
}

impl ChangeNotifier for RenderScheduler {
    fn notify(&self) {
        (self.0)()
    }
}

impl fmt::Debug for RenderScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RenderScheduler").finish_non_exhaustive()
    }
}

/// Owns one toggle instance's state together with the notifier it reports to.
#[derive(Debug)]
pub struct ToggleController<N: ChangeNotifier> {
    state: ToggleState,
    notifier: N,
}

impl<N: ChangeNotifier> ToggleController<N> {
    /// A new controller always starts in [`TogglePhase::DefaultActive`].
    pub fn new(notifier: N) -> Self {
        Self {
            state: ToggleState::default(),
            notifier,
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn phase(&self) -> TogglePhase {
        self.state.phase()
    }

    /// Click handler body: flip the state and request exactly one re-render.
    pub fn on_activate(&mut self) -> TogglePhase {
        self.state.toggle();
        self.notifier.notify();
        self.state.phase()
    }

    pub fn active_source<'a>(&self, sources: &'a ImageSources) -> &'a str {
        self.state.active_source(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const DEFAULT_SRC: &str = "https://placekitten.com/1000/1500";

    #[derive(Default)]
    struct CountingNotifier {
        calls: Cell<usize>,
    }

    impl ChangeNotifier for &CountingNotifier {
        fn notify(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn parity_of_clicks_selects_source() {
        let sources = ImageSources::new(DEFAULT_SRC, "https://example.com/alt.png");
        for clicks in 0..9 {
            let notifier = CountingNotifier::default();
            let mut controller = ToggleController::new(&notifier);
            for _ in 0..clicks {
                controller.on_activate();
            }
            let expected = if clicks % 2 == 0 {
                DEFAULT_SRC
            } else {
                "https://example.com/alt.png"
            };
            assert_eq!(controller.active_source(&sources), expected, "after {clicks} clicks");
        }
    }

    #[test]
    fn fresh_controller_starts_default_active() {
        for alternate in ["", "not a url", "https://example.com/cat.png"] {
            let notifier = CountingNotifier::default();
            let controller = ToggleController::new(&notifier);
            let sources = ImageSources::new(DEFAULT_SRC, alternate);

            assert!(controller.phase().is_default_active());
            assert!(!controller.state().using_alternate_source());
            assert_eq!(controller.active_source(&sources), DEFAULT_SRC);
        }
    }

    #[test]
    fn cat_url_round_trip() {
        let sources = ImageSources::new(DEFAULT_SRC, "https://example.com/cat.png");
        let notifier = CountingNotifier::default();
        let mut controller = ToggleController::new(&notifier);

        assert_eq!(controller.active_source(&sources), DEFAULT_SRC);
        assert_eq!(controller.on_activate(), TogglePhase::AlternateActive);
        assert_eq!(controller.active_source(&sources), "https://example.com/cat.png");
        assert_eq!(controller.on_activate(), TogglePhase::DefaultActive);
        assert_eq!(controller.active_source(&sources), DEFAULT_SRC);
    }

    #[test]
    fn empty_alternate_is_passed_through() {
        let sources = ImageSources::new(DEFAULT_SRC, "");
        let notifier = CountingNotifier::default();
        let mut controller = ToggleController::new(&notifier);

        controller.on_activate();
        assert_eq!(controller.active_source(&sources), "");
    }

    #[test]
    fn each_activation_notifies_once() {
        let notifier = CountingNotifier::default();
        let mut controller = ToggleController::new(&notifier);

        assert_eq!(notifier.calls.get(), 0);
        controller.on_activate();
        assert_eq!(notifier.calls.get(), 1);
        controller.on_activate();
        controller.on_activate();
        assert_eq!(notifier.calls.get(), 3);
    }

    #[test]
    fn controllers_do_not_share_state() {
        let first_notifier = CountingNotifier::default();
        let second_notifier = CountingNotifier::default();
        let mut first = ToggleController::new(&first_notifier);
        let second = ToggleController::new(&second_notifier);

        first.on_activate();
        assert!(first.phase().is_alternate_active());
        assert!(second.phase().is_default_active());
        assert_eq!(second_notifier.calls.get(), 0);
    }

    #[test]
    fn render_scheduler_invokes_its_handle() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let scheduler = RenderScheduler::new(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let mut controller = ToggleController::new(scheduler);

        controller.on_activate();
        controller.on_activate();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
