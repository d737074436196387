//! The copy affordance attached to rendered code blocks.
//!
//! Everything here is platform-independent except the pieces gated on the
//! `hydrate` feature, which bind the state machines to the browser.

mod control;
mod feedback;
mod hover;
mod outside;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use control::CopyControl;
pub use feedback::{COPIED_DURATION, CopyFeedback, FeedbackMachine, Scheduler};
pub use hover::HoverRegion;
pub use outside::{OutsideClickFilter, PointerTarget, claim_once, is_ios_user_agent};

#[cfg(feature = "hydrate")]
pub use feedback::BrowserScheduler;
#[cfg(feature = "hydrate")]
pub use outside::{ListenerGuard, OutsideClickOptions, on_click_outside};
