use std::cell::Cell;
use std::rc::Rc;

use leptos::logging::warn;

use super::feedback::{CopyFeedback, FeedbackMachine, Scheduler};
use crate::clipboard::{ClipboardWriteFailure, ClipboardWriter};

/// The copy button's behavior for one code block: writes the block's payload
/// to the clipboard and drives the copied/idle feedback.
pub struct CopyControl<C, S: Scheduler> {
    payload: Rc<str>,
    clipboard: Rc<C>,
    feedback: FeedbackMachine<S>,
    mounted: Rc<Cell<bool>>,
}

impl<C, S: Scheduler> Clone for CopyControl<C, S> {
    fn clone(&self) -> Self {
        Self {
            payload: Rc::clone(&self.payload),
            clipboard: Rc::clone(&self.clipboard),
            feedback: self.feedback.clone(),
            mounted: Rc::clone(&self.mounted),
        }
    }
}

impl<C: ClipboardWriter, S: Scheduler + 'static> CopyControl<C, S> {
    pub fn new(payload: impl Into<String>, clipboard: C, scheduler: S) -> Self {
        Self {
            payload: Rc::from(payload.into()),
            clipboard: Rc::new(clipboard),
            feedback: FeedbackMachine::new(scheduler),
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn state(&self) -> CopyFeedback {
        self.feedback.state()
    }

    pub fn feedback(&self) -> &FeedbackMachine<S> {
        &self.feedback
    }

    /// Copy the payload. Failures are logged and leave the state untouched;
    /// the result is only returned for callers that want it.
    pub async fn activate(&self) -> Result<(), ClipboardWriteFailure> {
        match self.clipboard.write_text(&self.payload).await {
            // The write may settle after the block was unmounted.
            Ok(()) if !self.mounted.get() => Ok(()),
            Ok(()) => {
                self.feedback.mark_copied();
                Ok(())
            }
            Err(err) => {
                warn!("Couldn't copy to clipboard! {}", err);
                Err(err)
            }
        }
    }

    /// A pointer interaction landed outside the control.
    pub fn outside_interaction(&self) {
        self.feedback.reset();
    }

    /// Cancel the reset timer and ignore any copy still in flight.
    pub fn unmount(&self) {
        self.mounted.set(false);
        self.feedback.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}
