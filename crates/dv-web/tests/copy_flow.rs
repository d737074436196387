//! End-to-end behavior of a code block's copy control, driven with an
//! in-memory clipboard and a manual clock.

use std::time::Duration;

use dv_web::clipboard::{CopyPath, WithFallback};
use dv_web::prose::testing::{ManualClock, MemoryClipboard};
use dv_web::prose::{COPIED_DURATION, CopyControl, CopyFeedback, HoverRegion, OutsideClickFilter, PointerTarget};
use futures::executor::block_on;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn setup(payload: &str) -> (CopyControl<MemoryClipboard, ManualClock>, MemoryClipboard, ManualClock) {
    let clipboard = MemoryClipboard::new(CopyPath::AsyncApi);
    let clock = ManualClock::default();
    let control = CopyControl::new(payload, clipboard.clone(), clock.clone());
    (control, clipboard, clock)
}

#[test]
fn clipboard_receives_exact_payload() {
    let payloads = [
        "",
        "console.log('hi')",
        "fn main() {\n\tprintln!(\"héllo, wörld 🦀\");\n}\n",
        "line\r\nwith\u{0}nul and \u{1b}[31mescapes\u{1b}[0m",
        "   leading and trailing whitespace   ",
    ];
    for payload in payloads {
        let (control, clipboard, _) = setup(payload);
        block_on(control.activate()).unwrap();
        assert_eq!(clipboard.read().as_deref(), Some(payload));
        assert_eq!(control.state(), CopyFeedback::Copied);
    }
}

#[test]
fn copied_holds_until_timeout() {
    let (control, _, clock) = setup("x");
    block_on(control.activate()).unwrap();

    clock.advance(COPIED_DURATION - ms(1));
    assert_eq!(control.state(), CopyFeedback::Copied);
    clock.advance(ms(1));
    assert_eq!(control.state(), CopyFeedback::Idle);
}

#[test]
fn second_activation_restarts_the_timer() {
    let (control, _, clock) = setup("x");
    block_on(control.activate()).unwrap();
    clock.advance(ms(500));
    block_on(control.activate()).unwrap();
    assert_eq!(clock.live_tasks(), 1);

    // 1500ms after the first activation.
    clock.advance(ms(1000));
    assert_eq!(control.state(), CopyFeedback::Copied);

    // 1500ms after the second.
    clock.advance(ms(499));
    assert_eq!(control.state(), CopyFeedback::Copied);
    clock.advance(ms(1));
    assert_eq!(control.state(), CopyFeedback::Idle);
}

#[test]
fn outside_click_resets_but_descendant_click_does_not() {
    let (control, _, clock) = setup("x");
    let filter = OutsideClickFilter::default();
    block_on(control.activate()).unwrap();

    // Click on the icon inside the button.
    if filter.pointer_down(PointerTarget::INSIDE, true) {
        control.outside_interaction();
    }
    if filter.click(PointerTarget::INSIDE, 1) {
        control.outside_interaction();
    }
    assert_eq!(control.state(), CopyFeedback::Copied);

    // Synthetic click elsewhere on the page.
    if filter.click(PointerTarget::OUTSIDE, 0) {
        control.outside_interaction();
    }
    assert_eq!(control.state(), CopyFeedback::Copied);

    // Real click elsewhere.
    if filter.pointer_down(PointerTarget::OUTSIDE, true) {
        control.outside_interaction();
    }
    if filter.click(PointerTarget::OUTSIDE, 1) {
        control.outside_interaction();
    }
    assert_eq!(control.state(), CopyFeedback::Idle);
    assert_eq!(clock.live_tasks(), 0);
}

#[test]
fn outside_press_resets_before_any_click() {
    let (control, _, clock) = setup("x");
    let filter = OutsideClickFilter::default();
    block_on(control.activate()).unwrap();

    // Press elsewhere and hold; the click has not happened yet.
    if filter.pointer_down(PointerTarget::OUTSIDE, true) {
        control.outside_interaction();
    }
    assert_eq!(control.state(), CopyFeedback::Idle);
    assert_eq!(clock.live_tasks(), 0);

    // The click that completes the press keeps it idle.
    if filter.click(PointerTarget::OUTSIDE, 1) {
        control.outside_interaction();
    }
    assert_eq!(control.state(), CopyFeedback::Idle);
}

#[test]
fn press_on_ignored_element_keeps_copied() {
    let (control, _, clock) = setup("x");
    let filter = OutsideClickFilter::default();
    block_on(control.activate()).unwrap();

    if filter.pointer_down(PointerTarget::IGNORED, true) {
        control.outside_interaction();
    }
    if filter.click(PointerTarget::IGNORED, 1) {
        control.outside_interaction();
    }
    assert_eq!(control.state(), CopyFeedback::Copied);
    assert_eq!(clock.live_tasks(), 1);
}

#[test]
fn unmount_leaves_no_timer_behind() {
    let (control, _, clock) = setup("x");
    let transitions = std::rc::Rc::new(std::cell::Cell::new(0));
    let seen = std::rc::Rc::clone(&transitions);
    control.feedback().on_change(move |_| seen.set(seen.get() + 1));

    block_on(control.activate()).unwrap();
    assert_eq!(transitions.get(), 1);
    control.unmount();

    assert_eq!(clock.live_tasks(), 0);
    clock.advance(ms(5000));
    assert_eq!(transitions.get(), 1);
    assert!(!control.is_mounted());
}

#[test]
fn hover_then_copy_then_revert() {
    let (control, clipboard, clock) = setup("console.log('hi')");
    let mut hover = HoverRegion::default();

    assert!(!hover.control_visible(control.state()));
    hover.enter();
    assert!(hover.control_visible(control.state()));

    block_on(control.activate()).unwrap();
    assert_eq!(clipboard.read().as_deref(), Some("console.log('hi')"));
    assert_eq!(control.state(), CopyFeedback::Copied);

    // Pointer leaves, confirmation stays visible.
    hover.leave();
    assert!(hover.control_visible(control.state()));

    clock.advance(COPIED_DURATION);
    assert_eq!(control.state(), CopyFeedback::Idle);
    assert!(!hover.control_visible(control.state()));
}

#[test]
fn fallback_path_behaves_identically() {
    let async_api = MemoryClipboard::new(CopyPath::AsyncApi);
    async_api.set_available(false);
    let legacy = async_api.sibling(CopyPath::LegacyCommand);
    let clock = ManualClock::default();
    let control = CopyControl::new(
        "console.log('hi')",
        WithFallback::new(async_api.clone(), legacy.clone()),
        clock.clone(),
    );

    block_on(control.activate()).unwrap();
    assert_eq!(async_api.writes(), 0);
    assert_eq!(legacy.writes(), 1);
    assert_eq!(legacy.read().as_deref(), Some("console.log('hi')"));
    assert_eq!(control.state(), CopyFeedback::Copied);

    clock.advance(COPIED_DURATION);
    assert_eq!(control.state(), CopyFeedback::Idle);
}

#[test]
fn failed_copy_is_silent_and_stays_idle() {
    let (control, clipboard, clock) = setup("x");
    clipboard.reject_writes(true);

    let err = block_on(control.activate()).unwrap_err();
    assert!(err.to_string().contains("NotAllowedError"));
    assert_eq!(control.state(), CopyFeedback::Idle);
    assert_eq!(clock.live_tasks(), 0);

    // A later successful attempt still works normally.
    clipboard.reject_writes(false);
    block_on(control.activate()).unwrap();
    assert_eq!(control.state(), CopyFeedback::Copied);
}
