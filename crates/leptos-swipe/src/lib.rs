//! Leptos Swipe Utilities
//!
//! Swipe-to-reveal for list cards using mouse and touch events.
//! Each card owns its own state; nothing is shared between cards.

mod state;

use leptos::ev;
use leptos::prelude::*;

pub use state::{SwipePhase, SwipeState, DEFAULT_MAX_OFFSET, DRAG_THRESHOLD_PX};

/// How long after a swipe the follow-up click is swallowed
const CLICK_SUPPRESS_MS: u32 = 100;

/// Swipe state signals for one card
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub state: RwSignal<SwipeState>,
    /// Set right after a drag that moved, so the trailing click is ignored
    pub just_swiped: RwSignal<bool>,
}

impl SwipeSignals {
    /// Current offset, tracked
    pub fn offset(&self) -> f64 {
        self.state.with(|s| s.offset())
    }

    pub fn phase(&self) -> SwipePhase {
        self.state.with(|s| s.phase())
    }

    /// Close the card without deleting
    pub fn reset(&self) {
        self.state.update(|s| s.reset());
    }

    /// Activate the delete trigger; true when the card was revealed
    pub fn confirm(&self) -> bool {
        let mut confirmed = false;
        self.state.update(|s| confirmed = s.confirm_delete());
        confirmed
    }
}

pub fn create_swipe_signals(max_offset: f64) -> SwipeSignals {
    SwipeSignals {
        state: RwSignal::new(SwipeState::new(max_offset)),
        just_swiped: RwSignal::new(false),
    }
}

fn begin(sw: SwipeSignals, x: f64) {
    sw.state.update(|s| s.begin(x));
}

fn move_to(sw: SwipeSignals, x: f64) {
    if sw.state.with_untracked(|s| s.is_dragging()) {
        sw.state.update(|s| {
            s.drag_to(x);
        });
    }
}

/// End the drag and briefly flag it so the click that follows is ignored
fn end(sw: SwipeSignals) {
    if !sw.state.with_untracked(|s| s.is_dragging()) {
        return;
    }
    let mut swiped = false;
    sw.state.update(|s| {
        s.release();
        swiped = s.was_swipe();
    });
    if swiped {
        sw.just_swiped.set(true);
        let clear = sw.just_swiped;
        gloo_timers::callback::Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
    }
}

/// Touch start handler for the card
pub fn make_on_touchstart(sw: SwipeSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            begin(sw, touch.client_x() as f64);
        }
    }
}

pub fn make_on_touchmove(sw: SwipeSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            move_to(sw, touch.client_x() as f64);
        }
    }
}

pub fn make_on_touchend(sw: SwipeSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| end(sw)
}

/// Mouse down handler for the card; left button only
pub fn make_on_mousedown(sw: SwipeSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            begin(sw, ev.client_x() as f64);
        }
    }
}

/// Track mouse drags that leave the card
///
/// The window listeners live as long as the calling component and are
/// removed when it is torn down.
pub fn bind_window_mouse(sw: SwipeSignals) {
    let on_move = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        move_to(sw, ev.client_x() as f64);
    });
    let on_up = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        end(sw);
    });
    on_cleanup(move || {
        on_move.remove();
        on_up.remove();
    });
}
