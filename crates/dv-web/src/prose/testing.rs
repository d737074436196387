//! In-memory stand-ins for the browser: a manually advanced clock and a
//! recording clipboard. Used by the unit and integration tests.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use futures::future::LocalBoxFuture;

use super::feedback::Scheduler;
use crate::clipboard::{ClipboardWriteFailure, ClipboardWriter, CopyPath};

struct Task {
    id: u64,
    due: Duration,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    tasks: Vec<Task>,
}

/// A scheduler whose time only moves when [`ManualClock::advance`] is called.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

/// Cancels its task when dropped.
pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<ClockState>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(state) = self.clock.upgrade()
            && let Ok(mut state) = state.try_borrow_mut()
        {
            state.tasks.retain(|t| t.id != self.id);
        }
    }
}

impl ManualClock {
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Tasks scheduled and neither run nor cancelled.
    pub fn live_tasks(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Move time forward, running every task that falls due, in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let task = state.tasks.remove(i);
                    state.now = task.due;
                    task.run
                })
            };
            match next {
                // Borrow released: the task may schedule or cancel timers.
                Some(run) => run(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualTimer;

    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>) -> ManualTimer {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + after;
        state.tasks.push(Task { id, due, run: task });
        ManualTimer {
            id,
            clock: Rc::downgrade(&self.state),
        }
    }
}

/// Clipboard that keeps the last written text in memory.
///
/// Clones share contents, so a test can keep one clone to read back what a
/// control wrote through another.
#[derive(Clone)]
pub struct MemoryClipboard {
    path: CopyPath,
    contents: Rc<RefCell<Option<String>>>,
    available: Rc<Cell<bool>>,
    rejecting: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryClipboard {
    pub fn new(path: CopyPath) -> Self {
        Self {
            path,
            contents: Rc::default(),
            available: Rc::new(Cell::new(true)),
            rejecting: Rc::default(),
            writes: Rc::default(),
        }
    }

    /// A clipboard sharing contents with `self` but reporting another path.
    pub fn sibling(&self, path: CopyPath) -> Self {
        Self {
            path,
            contents: Rc::clone(&self.contents),
            available: Rc::new(Cell::new(true)),
            rejecting: Rc::default(),
            writes: Rc::default(),
        }
    }

    pub fn read(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn reject_writes(&self, rejecting: bool) {
        self.rejecting.set(rejecting);
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn is_available(&self) -> bool {
        self.available.get()
    }

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardWriteFailure>> {
        Box::pin(async move {
            if self.rejecting.get() {
                return Err(ClipboardWriteFailure::new(self.path, "NotAllowedError: write permission denied"));
            }
            self.writes.set(self.writes.get() + 1);
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        })
    }
}
