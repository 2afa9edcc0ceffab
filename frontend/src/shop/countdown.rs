use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::config;
use crate::shop::catalog::PlatformEntry;

/// Where the shop page is in the "pick a platform, wait, get redirected" flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    CountingDown { index: usize, remaining: u32 },
}

impl SelectionState {
    pub fn active_index(&self) -> Option<usize> {
        match self {
            SelectionState::CountingDown { index, .. } => Some(*index),
            SelectionState::Idle => None,
        }
    }

    pub fn remaining(&self) -> Option<u32> {
        match self {
            SelectionState::CountingDown { remaining, .. } => Some(*remaining),
            SelectionState::Idle => None,
        }
    }

    fn activate(&mut self, index: usize, len: usize) -> Result<(), SelectionError> {
        if index >= len {
            return Err(SelectionError::InvalidIndex { index, len });
        }
        *self = SelectionState::CountingDown {
            index,
            remaining: config::COUNTDOWN_START_SECS,
        };
        Ok(())
    }

    /// Returns the index to navigate to when this tick ends the countdown.
    fn tick(&mut self) -> Option<usize> {
        match *self {
            SelectionState::Idle => None,
            SelectionState::CountingDown { index, remaining } if remaining > 1 => {
                *self = SelectionState::CountingDown {
                    index,
                    remaining: remaining - 1,
                };
                None
            }
            SelectionState::CountingDown { index, .. } => {
                *self = SelectionState::Idle;
                Some(index)
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("platform index {index} is out of range for a catalog of {len}")]
    InvalidIndex { index: usize, len: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpenError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window.open was rejected: {0}")]
    Rejected(String),
}

/// A live repeating timer. Cancelling must stop further callbacks before it returns.
pub trait TimerHandle {
    fn cancel(self);
}

pub trait Scheduler {
    type Handle: TimerHandle + 'static;

    fn repeat(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Opens a URL in a new browsing context that holds no reference back to this page.
pub trait Opener {
    fn open_detached(&self, url: &str) -> Result<(), OpenError>;
}

struct Timed<H: TimerHandle> {
    state: SelectionState,
    timer: Option<H>,
}

impl<H: TimerHandle> Timed<H> {
    fn release_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl<H: TimerHandle> Drop for Timed<H> {
    fn drop(&mut self) {
        self.release_timer();
    }
}

struct Shared<H: TimerHandle, O> {
    catalog: &'static [PlatformEntry],
    opener: O,
    timed: RefCell<Timed<H>>,
    on_change: Box<dyn Fn(SelectionState)>,
}

impl<H: TimerHandle, O: Opener> Shared<H, O> {
    fn tick(&self) {
        // The borrow ends before the opener and the view callback run.
        let (state, expired) = {
            let mut timed = self.timed.borrow_mut();
            let expired = timed.state.tick();
            if expired.is_some() {
                timed.release_timer();
            }
            (timed.state, expired)
        };
        if let Some(index) = expired {
            self.navigate(index);
        }
        (self.on_change)(state);
    }

    fn navigate(&self, index: usize) {
        let Some(entry) = self.catalog.get(index) else {
            return;
        };
        log::info!("Redirecting to {} at {}", entry.name, entry.url);
        if let Err(e) = self.opener.open_detached(entry.url) {
            log::warn!("Could not open {}: {}", entry.url, e);
        }
    }
}

/// Drives the shop page redirect: one countdown at a time, one navigation per
/// completed countdown, and no timer left running once it is cancelled or dropped.
pub struct RedirectController<S: Scheduler, O: Opener> {
    shared: Rc<Shared<S::Handle, O>>,
    scheduler: S,
}

impl<S, O> RedirectController<S, O>
where
    S: Scheduler,
    O: Opener + 'static,
{
    pub fn new(
        catalog: &'static [PlatformEntry],
        scheduler: S,
        opener: O,
        on_change: impl Fn(SelectionState) + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                catalog,
                opener,
                timed: RefCell::new(Timed {
                    state: SelectionState::Idle,
                    timer: None,
                }),
                on_change: Box::new(on_change),
            }),
            scheduler,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.shared.timed.borrow().state
    }

    /// Starts a fresh countdown for `index`, superseding any countdown in flight.
    /// An out-of-range index leaves the current countdown untouched.
    pub fn activate(&self, index: usize) -> Result<(), SelectionError> {
        let state = {
            let mut timed = self.shared.timed.borrow_mut();
            timed.state.activate(index, self.shared.catalog.len())?;
            timed.release_timer();
            let weak = Rc::downgrade(&self.shared);
            let timer = self.scheduler.repeat(
                config::TICK_PERIOD_MS,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.tick();
                    }
                }),
            );
            timed.timer = Some(timer);
            timed.state
        };
        if let Some(entry) = self.shared.catalog.get(index) {
            log::info!("Countdown started for {}", entry.name);
        }
        (self.shared.on_change)(state);
        Ok(())
    }

    pub fn cancel(&self) {
        let was_active = {
            let mut timed = self.shared.timed.borrow_mut();
            timed.release_timer();
            std::mem::take(&mut timed.state) != SelectionState::Idle
        };
        if was_active {
            log::debug!("Countdown cancelled");
            (self.shared.on_change)(SelectionState::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::catalog::PLATFORMS;
    use std::cell::Cell;

    struct Slot {
        callback: Option<Box<dyn FnMut()>>,
        live: bool,
    }

    /// Fires every live timer once per simulated second.
    #[derive(Clone, Default)]
    struct ManualClock {
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    struct ManualHandle {
        slots: Rc<RefCell<Vec<Slot>>>,
        id: usize,
    }

    impl TimerHandle for ManualHandle {
        fn cancel(self) {
            let mut slots = self.slots.borrow_mut();
            slots[self.id].live = false;
            slots[self.id].callback = None;
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualHandle;

        fn repeat(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
            assert_eq!(period_ms, 1_000);
            let mut slots = self.slots.borrow_mut();
            slots.push(Slot {
                callback: Some(callback),
                live: true,
            });
            ManualHandle {
                slots: self.slots.clone(),
                id: slots.len() - 1,
            }
        }
    }

    impl ManualClock {
        fn advance(&self, seconds: u32) {
            for _ in 0..seconds {
                let count = self.slots.borrow().len();
                for id in 0..count {
                    let callback = {
                        let mut slots = self.slots.borrow_mut();
                        if !slots[id].live {
                            continue;
                        }
                        slots[id].callback.take()
                    };
                    if let Some(mut callback) = callback {
                        callback();
                        let mut slots = self.slots.borrow_mut();
                        if slots[id].live {
                            slots[id].callback = Some(callback);
                        }
                    }
                }
            }
        }

        fn live_timers(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.live).count()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingOpener {
        opened: Rc<RefCell<Vec<String>>>,
        blocked: bool,
    }

    impl Opener for RecordingOpener {
        fn open_detached(&self, url: &str) -> Result<(), OpenError> {
            self.opened.borrow_mut().push(url.to_string());
            if self.blocked {
                return Err(OpenError::Rejected("popup blocked".to_string()));
            }
            Ok(())
        }
    }

    struct Harness {
        clock: ManualClock,
        opener: RecordingOpener,
        changes: Rc<Cell<usize>>,
        controller: RedirectController<ManualClock, RecordingOpener>,
    }

    fn harness_with(opener: RecordingOpener) -> Harness {
        let clock = ManualClock::default();
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let controller = RedirectController::new(
            &PLATFORMS,
            clock.clone(),
            opener.clone(),
            move |_| counter.set(counter.get() + 1),
        );
        Harness {
            clock,
            opener,
            changes,
            controller,
        }
    }

    fn harness() -> Harness {
        harness_with(RecordingOpener::default())
    }

    impl Harness {
        fn opened(&self) -> Vec<String> {
            self.opener.opened.borrow().clone()
        }
    }

    #[test]
    fn full_countdown_opens_destination_once() {
        for (index, entry) in PLATFORMS.iter().enumerate() {
            let h = harness();
            h.controller.activate(index).unwrap();
            h.clock.advance(5);
            assert_eq!(h.opened(), vec![entry.url.to_string()]);
            assert_eq!(h.controller.state(), SelectionState::Idle);
            assert_eq!(h.clock.live_timers(), 0);
        }
    }

    #[test]
    fn amazon_walkthrough() {
        let h = harness();
        h.controller.activate(1).unwrap();
        assert_eq!(
            h.controller.state(),
            SelectionState::CountingDown { index: 1, remaining: 5 }
        );

        h.clock.advance(4);
        assert_eq!(
            h.controller.state(),
            SelectionState::CountingDown { index: 1, remaining: 1 }
        );
        assert!(h.opened().is_empty());

        h.clock.advance(1);
        assert_eq!(h.opened(), vec!["https://www.amazon.in/".to_string()]);
        assert_eq!(h.controller.state(), SelectionState::Idle);
    }

    #[test]
    fn second_activation_supersedes_the_first() {
        let h = harness();
        h.controller.activate(0).unwrap();
        h.clock.advance(3);
        h.controller.activate(1).unwrap();
        assert_eq!(h.clock.live_timers(), 1);
        assert_eq!(
            h.controller.state(),
            SelectionState::CountingDown { index: 1, remaining: 5 }
        );

        h.clock.advance(4);
        assert!(h.opened().is_empty());
        h.clock.advance(1);
        assert_eq!(h.opened(), vec!["https://www.amazon.in/".to_string()]);

        h.clock.advance(10);
        assert_eq!(h.opened().len(), 1);
    }

    #[test]
    fn reactivating_the_same_platform_restarts_the_count() {
        let h = harness();
        h.controller.activate(0).unwrap();
        h.clock.advance(4);
        h.controller.activate(0).unwrap();
        h.clock.advance(4);
        assert!(h.opened().is_empty());
        assert_eq!(h.controller.state().remaining(), Some(1));
        h.clock.advance(1);
        assert_eq!(h.opened(), vec!["https://www.meesho.com/".to_string()]);
    }

    #[test]
    fn cancel_stops_the_countdown_for_good() {
        let h = harness();
        h.controller.activate(0).unwrap();
        h.clock.advance(2);
        h.controller.cancel();
        assert_eq!(h.controller.state(), SelectionState::Idle);
        assert_eq!(h.clock.live_timers(), 0);

        h.clock.advance(10);
        assert!(h.opened().is_empty());
        assert_eq!(h.controller.state(), SelectionState::Idle);
    }

    #[test]
    fn cancel_while_idle_is_a_no_op() {
        let h = harness();
        h.controller.cancel();
        h.controller.cancel();
        assert_eq!(h.controller.state(), SelectionState::Idle);
        assert_eq!(h.changes.get(), 0);
    }

    #[test]
    fn out_of_range_index_is_rejected_without_touching_state() {
        let h = harness();
        let len = PLATFORMS.len();
        assert_eq!(
            h.controller.activate(len),
            Err(SelectionError::InvalidIndex { index: len, len })
        );
        assert_eq!(h.controller.state(), SelectionState::Idle);
        assert_eq!(h.clock.live_timers(), 0);

        h.controller.activate(0).unwrap();
        h.clock.advance(2);
        assert!(h.controller.activate(usize::MAX).is_err());
        assert_eq!(
            h.controller.state(),
            SelectionState::CountingDown { index: 0, remaining: 3 }
        );
        assert_eq!(h.clock.live_timers(), 1);
    }

    #[test]
    fn can_activate_again_after_a_completed_redirect() {
        let h = harness();
        h.controller.activate(1).unwrap();
        h.clock.advance(5);
        h.controller.activate(1).unwrap();
        assert_eq!(
            h.controller.state(),
            SelectionState::CountingDown { index: 1, remaining: 5 }
        );
        h.clock.advance(5);
        assert_eq!(h.opened().len(), 2);
        assert_eq!(h.clock.live_timers(), 0);
    }

    #[test]
    fn dropping_the_controller_releases_its_timer() {
        let h = harness();
        h.controller.activate(0).unwrap();
        let Harness {
            clock,
            opener,
            controller,
            ..
        } = h;
        drop(controller);
        assert_eq!(clock.live_timers(), 0);
        clock.advance(10);
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn blocked_popup_still_returns_to_idle() {
        let h = harness_with(RecordingOpener {
            blocked: true,
            ..Default::default()
        });
        h.controller.activate(0).unwrap();
        h.clock.advance(5);
        assert_eq!(h.opened().len(), 1);
        assert_eq!(h.controller.state(), SelectionState::Idle);
        assert_eq!(h.clock.live_timers(), 0);

        h.clock.advance(5);
        assert_eq!(h.opened().len(), 1);
    }

    #[test]
    fn view_is_told_about_every_transition() {
        let h = harness();
        h.controller.activate(0).unwrap();
        h.clock.advance(5);
        // activation plus five ticks
        assert_eq!(h.changes.get(), 6);
    }
}
