//! Leptos LazyReveal Utilities
//!
//! Sentinel-triggered incremental list reveal for Leptos.
//! A growing window over an already-loaded list is advanced whenever a
//! sentinel element scrolls into view, after a short simulated-load delay.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Items shown before any reveal has been triggered.
pub const INITIAL_WINDOW: usize = 8;
/// Items added per reveal.
pub const REVEAL_STEP: usize = 4;
/// Simulated-load delay between trigger and reveal.
pub const REVEAL_DELAY_MS: u32 = 1_000;

/// Observer margin / threshold, matching a "start loading slightly early" feel.
const SENTINEL_ROOT_MARGIN: &str = "20px";
const SENTINEL_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Loading,
    Terminal,
}

/// Pure reveal state machine over a list of known length.
///
/// Each reset bumps an epoch counter; tickets issued before the reset are
/// rejected on commit, so a delayed reveal can never clobber fresher state.
#[derive(Clone, Debug)]
pub struct RevealEngine {
    len: usize,
    window: usize,
    phase: Phase,
    epoch: u64,
}

/// Proof that a reveal was begun against the current epoch.
#[derive(Clone, Copy, Debug)]
pub struct RevealTicket {
    epoch: u64,
}

impl RevealEngine {
    pub fn new(len: usize) -> Self {
        let mut engine = Self {
            len: 0,
            window: 0,
            phase: Phase::Terminal,
            epoch: 0,
        };
        engine.reset(len);
        engine
    }

    /// Restart the window against a new list length.
    /// Invalidates any ticket issued before the reset.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.window = INITIAL_WINDOW.min(len);
        self.phase = if self.window >= len {
            Phase::Terminal
        } else {
            Phase::Idle
        };
        self.epoch += 1;
    }

    /// Start a reveal if one is neither in flight nor pointless.
    pub fn try_begin(&mut self) -> Option<RevealTicket> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.phase = Phase::Loading;
        Some(RevealTicket { epoch: self.epoch })
    }

    /// Apply a begun reveal. Stale tickets are dropped and return false.
    pub fn commit(&mut self, ticket: RevealTicket) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.window = (self.window + REVEAL_STEP).min(self.len);
        self.phase = if self.window >= self.len {
            Phase::Terminal
        } else {
            Phase::Idle
        };
        true
    }

    /// How many items are currently revealed.
    pub fn window(&self) -> usize {
        self.window
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }
}

/// Reactive handle returned by [`use_incremental_reveal`].
#[derive(Clone, Copy)]
pub struct RevealHandle {
    engine: RwSignal<RevealEngine>,
    /// Attach to the element that triggers reveals when scrolled into view.
    pub sentinel: NodeRef<Div>,
}

impl RevealHandle {
    pub fn window(&self) -> usize {
        self.engine.with(|e| e.window())
    }

    pub fn loading(&self) -> bool {
        self.engine.with(|e| e.is_loading())
    }

    pub fn all_loaded(&self) -> bool {
        self.engine.with(|e| e.is_terminal())
    }
}

type ObserverSlot = StoredValue<Option<SentinelObserver>, LocalStorage>;

struct SentinelObserver {
    observer: IntersectionObserver,
    target: web_sys::HtmlDivElement,
    // Kept alive for as long as the observer is registered
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SentinelObserver {
    fn attach(
        target: &web_sys::HtmlDivElement,
        engine: RwSignal<RevealEngine>,
        slot: ObserverSlot,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if !intersecting {
                    return;
                }
                // try_update so a trigger racing view disposal is a no-op
                let Some(ticket) = engine.try_update(|e| e.try_begin()).flatten() else {
                    return;
                };
                spawn_local(async move {
                    TimeoutFuture::new(REVEAL_DELAY_MS).await;
                    let committed = engine
                        .try_update(|e| e.commit(ticket))
                        .unwrap_or(false);
                    // Observers only report intersection transitions, so a
                    // sentinel that stayed in view would never fire again.
                    // Re-observing replays the current intersection state and
                    // chains the next reveal. Skipped when the commit was
                    // stale or the view is gone.
                    if committed {
                        rearm(slot);
                    }
                });
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(SENTINEL_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(SENTINEL_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target.as_ref());

        Ok(Self {
            observer,
            target: target.clone(),
            _callback: callback,
        })
    }

    fn reobserve(&self) {
        self.observer.unobserve(self.target.as_ref());
        self.observer.observe(self.target.as_ref());
    }

    fn detach(&self) {
        self.observer.disconnect();
    }
}

/// Replay the current intersection state of the observed sentinel.
fn rearm(slot: ObserverSlot) {
    slot.try_update_value(|slot| {
        if let Some(observer) = slot.as_ref() {
            observer.reobserve();
        }
    });
}

/// Incremental reveal over a reactive list length.
///
/// The window resets whenever `len` changes; the returned sentinel advances
/// it by [`REVEAL_STEP`] after [`REVEAL_DELAY_MS`] each time it becomes
/// visible. The observer is deregistered on cleanup and a pending reveal
/// never mutates state after the owning view is gone.
pub fn use_incremental_reveal(len: Signal<usize>) -> RevealHandle {
    let engine = RwSignal::new(RevealEngine::new(0));
    let sentinel = NodeRef::<Div>::new();
    let observer: ObserverSlot = StoredValue::new_local(None);

    Effect::new(move |_| {
        let len = len.get();
        engine.update(|e| e.reset(len));
        // a sentinel still inside the viewport must start the first reveal
        // of the fresh window without being scrolled out and back
        rearm(observer);
    });

    // Re-observe whenever the sentinel (re)mounts
    Effect::new(move |_| {
        let Some(element) = sentinel.get() else {
            return;
        };
        observer.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.detach();
            }
            match SentinelObserver::attach(&element, engine, observer) {
                Ok(attached) => *slot = Some(attached),
                Err(err) => web_sys::console::error_2(&"lazyreveal: observer attach failed".into(), &err),
            }
        });
    });

    on_cleanup(move || {
        observer.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.detach();
            }
        });
    });

    RevealHandle { engine, sentinel }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_window_is_min_of_eight_and_len() {
        assert_eq!(RevealEngine::new(3).window(), 3);
        assert_eq!(RevealEngine::new(8).window(), 8);
        assert_eq!(RevealEngine::new(20).window(), 8);
    }

    #[test]
    fn test_short_list_starts_terminal() {
        assert!(RevealEngine::new(0).is_terminal());
        assert!(RevealEngine::new(5).is_terminal());
        assert!(RevealEngine::new(8).is_terminal());
        assert!(!RevealEngine::new(9).is_terminal());
    }

    #[test]
    fn test_begin_denied_while_loading() {
        let mut engine = RevealEngine::new(20);
        assert!(engine.try_begin().is_some());
        assert!(engine.is_loading());
        assert!(engine.try_begin().is_none());
    }

    #[test]
    fn test_begin_denied_when_terminal() {
        let mut engine = RevealEngine::new(5);
        assert!(engine.try_begin().is_none());
    }

    #[test]
    fn test_commit_advances_by_step_capped_at_len() {
        let mut engine = RevealEngine::new(30);
        let ticket = engine.try_begin().unwrap();
        assert!(engine.commit(ticket));
        assert_eq!(engine.window(), 12);
        assert!(!engine.is_loading());

        let mut capped = RevealEngine::new(10);
        let ticket = capped.try_begin().unwrap();
        assert!(capped.commit(ticket));
        assert_eq!(capped.window(), 10);
    }

    #[test]
    fn test_reaches_terminal_in_expected_advances() {
        for len in [9usize, 12, 13, 21, 40] {
            let mut engine = RevealEngine::new(len);
            let expected = (len - INITIAL_WINDOW).div_ceil(REVEAL_STEP);
            let mut advances = 0;
            while !engine.is_terminal() {
                let ticket = engine.try_begin().expect("idle engine accepts begin");
                assert!(engine.commit(ticket));
                advances += 1;
                assert!(engine.window() <= len);
                assert!(advances <= expected);
            }
            assert_eq!(advances, expected);
            assert_eq!(engine.window(), len);
        }
    }

    #[test]
    fn test_begin_chains_immediately_after_commit_and_reset() {
        // a sentinel that never leaves the viewport retriggers right after
        // each commit; the engine must accept every chained begin
        let mut engine = RevealEngine::new(40);
        let ticket = engine.try_begin().unwrap();
        assert!(engine.commit(ticket));
        assert_eq!(engine.window(), 12);
        assert!(engine.try_begin().is_some());

        let mut engine = RevealEngine::new(40);
        engine.reset(40);
        assert!(engine.try_begin().is_some());
    }

    #[test]
    fn test_reset_invalidates_pending_ticket() {
        let mut engine = RevealEngine::new(20);
        let ticket = engine.try_begin().unwrap();
        engine.reset(20);
        assert!(!engine.commit(ticket));
        assert_eq!(engine.window(), 8);
        assert!(!engine.is_loading());
    }

    #[test]
    fn test_stale_commit_does_not_regress_reset_window() {
        let mut engine = RevealEngine::new(30);
        let first = engine.try_begin().unwrap();
        assert!(engine.commit(first));
        assert_eq!(engine.window(), 12);

        let pending = engine.try_begin().unwrap();
        engine.reset(9);
        assert!(!engine.commit(pending));
        assert_eq!(engine.window(), 8);
        assert!(!engine.is_terminal());
    }

    #[test]
    fn test_ten_item_scenario() {
        let mut engine = RevealEngine::new(10);
        assert_eq!(engine.window(), 8);
        assert!(!engine.is_terminal());

        let ticket = engine.try_begin().unwrap();
        assert!(engine.is_loading());
        assert!(engine.commit(ticket));
        assert_eq!(engine.window(), 10);
        assert!(engine.is_terminal());
    }
}
