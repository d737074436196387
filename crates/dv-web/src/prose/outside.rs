//! Detects pointer interactions that land outside a control.
//!
//! [`OutsideClickFilter`] holds the decision logic and knows nothing about the
//! DOM. With the `hydrate` feature, [`on_click_outside`] wires it to window
//! listeners and returns a guard that removes them again.

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

/// Where a pointer event landed, relative to the watched control.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerTarget {
    /// The control itself or one of its descendants.
    pub inside: bool,
    /// Matched by the ignore list.
    pub ignored: bool,
}

impl PointerTarget {
    pub const OUTSIDE: Self = Self {
        inside: false,
        ignored: false,
    };
    pub const INSIDE: Self = Self {
        inside: true,
        ignored: false,
    };
    pub const IGNORED: Self = Self {
        inside: false,
        ignored: true,
    };
}

#[derive(Debug)]
pub struct OutsideClickFilter {
    // Cleared by a pointerdown inside the control (or on an ignored element)
    // so that a press which starts inside and is released outside is not
    // reported.
    should_listen: Cell<bool>,
}

impl Default for OutsideClickFilter {
    fn default() -> Self {
        Self {
            should_listen: Cell::new(true),
        }
    }
}

impl OutsideClickFilter {
    /// Returns `true` when a primary-button press outside the control should
    /// reset it right away. Also decides whether the following click counts.
    pub fn pointer_down(&self, target: PointerTarget, primary: bool) -> bool {
        let outside = !target.inside && !target.ignored;
        self.should_listen.set(outside);
        outside && primary
    }

    /// Returns `true` when this click counts as an outside interaction.
    ///
    /// `detail` is the DOM click count. Synthetic clicks (`detail == 0`, from
    /// `element.click()`, keyboard activation or assistive tech) pass through
    /// without triggering.
    pub fn click(&self, target: PointerTarget, detail: i32) -> bool {
        if target.inside || detail == 0 {
            return false;
        }
        let armed = self.should_listen.replace(true);
        armed && !target.ignored
    }
}

/// Focus moved into an iframe that is not part of the control.
#[cfg(any(test, feature = "hydrate"))]
pub fn focus_left_for_iframe(active_tag: Option<&str>, active_inside: bool) -> bool {
    active_tag.is_some_and(|tag| tag.eq_ignore_ascii_case("iframe")) && !active_inside
}

/// Mobile Safari does not dispatch clicks on non-interactive elements up to
/// `window` unless some ancestor has a click listener.
pub fn is_ios_user_agent(user_agent: &str) -> bool {
    ["iPad", "iPhone", "iPod"].iter().any(|device| user_agent.contains(device))
}

/// Sets `flag` and reports whether this call was the first to do so.
pub fn claim_once(flag: &AtomicBool) -> bool {
    !flag.swap(true, Ordering::AcqRel)
}

#[cfg(feature = "hydrate")]
mod browser {
    use super::*;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, Node, Window};

    static IOS_CLICK_PATCHED: AtomicBool = AtomicBool::new(false);

    #[derive(Debug, Clone)]
    pub struct OutsideClickOptions {
        /// CSS selectors whose matches never count as outside.
        pub ignore: Vec<String>,
        /// Listen for clicks in the capture phase.
        pub capture: bool,
        /// Treat focus moving into a foreign iframe as an outside interaction.
        pub detect_iframe: bool,
    }

    impl Default for OutsideClickOptions {
        fn default() -> Self {
            Self {
                ignore: Vec::new(),
                capture: true,
                detect_iframe: false,
            }
        }
    }

    struct Registered {
        target: EventTarget,
        kind: &'static str,
        capture: bool,
        callback: Closure<dyn FnMut(Event)>,
    }

    /// Window listeners for one control. Dropping the guard removes them.
    pub struct ListenerGuard {
        listeners: Vec<Registered>,
    }

    impl ListenerGuard {
        fn listen(&mut self, target: &EventTarget, kind: &'static str, capture: bool, callback: Closure<dyn FnMut(Event)>) {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            options.set_capture(capture);
            if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                leptos::logging::warn!("failed to register {} listener: {:?}", kind, err);
                return;
            }
            self.listeners.push(Registered {
                target: target.clone(),
                kind,
                capture,
                callback,
            });
        }
    }

    impl Drop for ListenerGuard {
        fn drop(&mut self) {
            for l in self.listeners.drain(..) {
                let _ = l.target.remove_event_listener_with_callback_and_bool(
                    l.kind,
                    l.callback.as_ref().unchecked_ref(),
                    l.capture,
                );
            }
        }
    }

    fn contains_event(element: &Element, event: &Event) -> bool {
        let element_value: &JsValue = element.as_ref();
        if event.composed_path().includes(element_value, 0) {
            return true;
        }
        event
            .target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .is_some_and(|node| element.contains(Some(&node)))
    }

    fn is_ignored(window: &Window, selectors: &[String], event: &Event) -> bool {
        let Some(document) = window.document() else {
            return false;
        };
        selectors.iter().any(|selector| {
            let Ok(matches) = document.query_selector_all(selector) else {
                return false;
            };
            (0..matches.length())
                .filter_map(|i| matches.get(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .any(|el| contains_event(&el, event))
        })
    }

    fn locate(window: &Window, element: &Element, selectors: &[String], event: &Event) -> PointerTarget {
        PointerTarget {
            inside: contains_event(element, event),
            ignored: is_ignored(window, selectors, event),
        }
    }

    fn patch_ios_click_delegation(window: &Window) {
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        if !is_ios_user_agent(&user_agent) || !claim_once(&IOS_CLICK_PATCHED) {
            return;
        }
        let Some(document) = window.document() else {
            return;
        };
        let noop = Closure::<dyn FnMut(Event)>::new(|_: Event| {});
        let mut targets: Vec<Element> = Vec::new();
        if let Some(body) = document.body() {
            let children = body.children();
            targets.extend((0..children.length()).filter_map(|i| children.item(i)));
        }
        targets.extend(document.document_element());
        for target in &targets {
            let _ = target.add_event_listener_with_callback("click", noop.as_ref().unchecked_ref());
        }
        // Lives as long as the page.
        noop.forget();
    }

    /// Calls `handler` whenever a click or primary press lands outside `element`.
    pub fn on_click_outside(
        element: Element,
        options: OutsideClickOptions,
        handler: impl Fn() + 'static,
    ) -> Option<ListenerGuard> {
        let window = web_sys::window()?;
        patch_ios_click_delegation(&window);

        let filter = Rc::new(OutsideClickFilter::default());
        let handler: Rc<dyn Fn()> = Rc::new(handler);
        let ignore = Rc::new(options.ignore);
        let mut guard = ListenerGuard { listeners: Vec::new() };
        let window_target: &EventTarget = window.as_ref();

        let on_click = {
            let (window, element, filter, handler, ignore) =
                (window.clone(), element.clone(), Rc::clone(&filter), Rc::clone(&handler), Rc::clone(&ignore));
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let detail = event.dyn_ref::<web_sys::UiEvent>().map_or(0, |e| e.detail());
                if filter.click(locate(&window, &element, &ignore, &event), detail) {
                    handler();
                }
            })
        };
        guard.listen(window_target, "click", options.capture, on_click);

        let on_pointer_down = {
            let (window, element, filter, handler, ignore) =
                (window.clone(), element.clone(), Rc::clone(&filter), Rc::clone(&handler), Rc::clone(&ignore));
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let primary = event.dyn_ref::<web_sys::MouseEvent>().is_none_or(|e| e.button() == 0);
                if filter.pointer_down(locate(&window, &element, &ignore, &event), primary) {
                    handler();
                }
            })
        };
        guard.listen(window_target, "pointerdown", false, on_pointer_down);

        if options.detect_iframe {
            let on_blur = {
                let (window, element, handler) = (window.clone(), element.clone(), Rc::clone(&handler));
                Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                    let (window, element, handler) = (window.clone(), element.clone(), Rc::clone(&handler));
                    // activeElement is only updated after the blur settles.
                    gloo_timers::callback::Timeout::new(0, move || {
                        let active = window.document().and_then(|d| d.active_element());
                        let tag = active.as_ref().map(|el| el.tag_name());
                        let inside = active.as_ref().is_some_and(|el| element.contains(Some(el.as_ref())));
                        if focus_left_for_iframe(tag.as_deref(), inside) {
                            handler();
                        }
                    })
                    .forget();
                })
            };
            guard.listen(window_target, "blur", false, on_blur);
        }

        Some(guard)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{ListenerGuard, OutsideClickOptions, on_click_outside};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_outside_click_triggers() {
        let filter = OutsideClickFilter::default();
        assert!(filter.pointer_down(PointerTarget::OUTSIDE, true));
        assert!(filter.click(PointerTarget::OUTSIDE, 1));
    }

    #[test]
    fn click_without_pointerdown_triggers() {
        let filter = OutsideClickFilter::default();
        assert!(filter.click(PointerTarget::OUTSIDE, 1));
    }

    #[test]
    fn inside_click_never_triggers() {
        let filter = OutsideClickFilter::default();
        assert!(!filter.pointer_down(PointerTarget::INSIDE, true));
        assert!(!filter.click(PointerTarget::INSIDE, 1));
        assert!(!filter.click(PointerTarget::INSIDE, 2));
    }

    #[test]
    fn drag_out_of_control_is_suppressed_once() {
        let filter = OutsideClickFilter::default();
        assert!(!filter.pointer_down(PointerTarget::INSIDE, true));
        assert!(!filter.click(PointerTarget::OUTSIDE, 1));
        // Re-armed for the next click.
        assert!(filter.click(PointerTarget::OUTSIDE, 1));
    }

    #[test]
    fn synthetic_click_passes_through() {
        let filter = OutsideClickFilter::default();
        assert!(!filter.click(PointerTarget::OUTSIDE, 0));
        // Does not disarm a later real click either.
        assert!(filter.click(PointerTarget::OUTSIDE, 1));
    }

    #[test]
    fn ignored_targets_do_not_trigger() {
        let filter = OutsideClickFilter::default();
        assert!(!filter.pointer_down(PointerTarget::IGNORED, true));
        assert!(!filter.click(PointerTarget::IGNORED, 1));
        assert!(!filter.click(PointerTarget::IGNORED, 1));
    }

    #[test]
    fn outside_press_resets_without_waiting_for_click() {
        let filter = OutsideClickFilter::default();
        assert!(filter.pointer_down(PointerTarget::OUTSIDE, true));
    }

    #[test]
    fn secondary_button_press_does_not_reset() {
        let filter = OutsideClickFilter::default();
        assert!(!filter.pointer_down(PointerTarget::OUTSIDE, false));
        // The click that may follow is still judged on its own.
        assert!(filter.click(PointerTarget::OUTSIDE, 1));
    }

    #[test]
    fn iframe_focus() {
        assert!(focus_left_for_iframe(Some("IFRAME"), false));
        assert!(!focus_left_for_iframe(Some("IFRAME"), true));
        assert!(!focus_left_for_iframe(Some("BUTTON"), false));
        assert!(!focus_left_for_iframe(None, false));
    }

    #[test]
    fn ios_detection() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        let ipad = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)";
        let desktop = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0";
        assert!(is_ios_user_agent(iphone));
        assert!(is_ios_user_agent(ipad));
        assert!(!is_ios_user_agent(desktop));
    }

    #[test]
    fn claim_once_only_first_wins() {
        let flag = AtomicBool::new(false);
        assert!(claim_once(&flag));
        assert!(!claim_once(&flag));
        assert!(!claim_once(&flag));
    }
}
