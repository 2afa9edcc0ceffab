use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use crate::shop::countdown::{OpenError, Opener, Scheduler, TimerHandle};

/// `setInterval` backed scheduler used by the shop page.
#[derive(Clone, Copy, Default)]
pub struct IntervalScheduler;

pub struct IntervalHandle(Interval);

impl TimerHandle for IntervalHandle {
    fn cancel(self) {
        // clearInterval runs now. The closure may be the one currently executing,
        // so freeing it waits until the callback has returned.
        let closure = self.0.cancel();
        spawn_local(async move {
            drop(closure);
        });
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn repeat(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> IntervalHandle {
        let mut callback = callback;
        IntervalHandle(Interval::new(period_ms, move || callback()))
    }
}

#[derive(Clone, Copy, Default)]
pub struct WindowOpener;

impl Opener for WindowOpener {
    fn open_detached(&self, url: &str) -> Result<(), OpenError> {
        let window = web_sys::window().ok_or(OpenError::NoWindow)?;
        // With noopener the call yields no window handle even on success, so a
        // popup blocker is indistinguishable from a successful open.
        window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
            .map_err(|e| OpenError::Rejected(format!("{:?}", e)))
    }
}
