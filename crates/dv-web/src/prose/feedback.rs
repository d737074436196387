//! Copy feedback state: `Idle -> Copied -> Idle`, with a single auto-reset timer.
//!
//! The timer goes through the [`Scheduler`] trait so the same state machine
//! runs in the browser (gloo-timers) and in native tests (a manual clock).

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

/// How long the "copied" confirmation stays up without further interaction.
pub const COPIED_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
}

impl CopyFeedback {
    pub fn is_copied(self) -> bool {
        self == CopyFeedback::Copied
    }
}

/// Runs a task once after a delay.
///
/// Dropping the returned handle must cancel the task if it has not run yet.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

type Listener = Box<dyn Fn(CopyFeedback)>;

struct Inner<H> {
    state: Cell<CopyFeedback>,
    // A fired handle stays here until the next restart or cancel; dropping it
    // from inside its own callback is not allowed for browser timers.
    pending: RefCell<Option<H>>,
    armed: Cell<bool>,
    listener: RefCell<Option<Listener>>,
}

impl<H> Inner<H> {
    fn set(&self, next: CopyFeedback) {
        if self.state.replace(next) != next
            && let Some(listener) = self.listener.borrow().as_ref()
        {
            listener(next);
        }
    }
}

/// Feedback state for one copy control. Cheap to clone; clones share state.
pub struct FeedbackMachine<S: Scheduler> {
    inner: Rc<Inner<S::Handle>>,
    scheduler: Rc<S>,
    copied_for: Duration,
}

impl<S: Scheduler> Clone for FeedbackMachine<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            scheduler: Rc::clone(&self.scheduler),
            copied_for: self.copied_for,
        }
    }
}

impl<S: Scheduler + 'static> FeedbackMachine<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_duration(scheduler, COPIED_DURATION)
    }

    pub fn with_duration(scheduler: S, copied_for: Duration) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: Cell::new(CopyFeedback::Idle),
                pending: RefCell::new(None),
                armed: Cell::new(false),
                listener: RefCell::new(None),
            }),
            scheduler: Rc::new(scheduler),
            copied_for,
        }
    }

    pub fn state(&self) -> CopyFeedback {
        self.inner.state.get()
    }

    /// Called with the new state on every transition (not on no-op sets).
    pub fn on_change(&self, listener: impl Fn(CopyFeedback) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Box::new(listener));
    }

    /// Enter `Copied` and (re)start the auto-reset timer.
    pub fn mark_copied(&self) {
        // Drop the old handle first so two timers never overlap.
        self.cancel();
        self.inner.set(CopyFeedback::Copied);

        let weak: Weak<Inner<S::Handle>> = Rc::downgrade(&self.inner);
        let handle = self.scheduler.schedule(
            self.copied_for,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.armed.set(false);
                    inner.set(CopyFeedback::Idle);
                }
            }),
        );
        *self.inner.pending.borrow_mut() = Some(handle);
        self.inner.armed.set(true);
    }

    /// Early reset from an outside interaction.
    pub fn reset(&self) {
        if self.state().is_copied() {
            self.cancel();
            self.inner.set(CopyFeedback::Idle);
        }
    }

    /// Cancel the pending timer without touching state. Used on unmount.
    pub fn cancel(&self) {
        self.inner.armed.set(false);
        let stale = self.inner.pending.borrow_mut().take();
        drop(stale);
    }

    pub fn has_pending_timer(&self) -> bool {
        self.inner.armed.get()
    }
}

/// Browser scheduler backed by `gloo_timers::callback::Timeout`, which clears
/// the underlying `setTimeout` when dropped.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task)
    }
}
