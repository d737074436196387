use leptos::prelude::*;

use crate::components::Icon;
use crate::config::CONFIG;
use crate::prose::{CopyFeedback, HoverRegion};

/// Browser half of the copy button: clipboard, reset timer and outside-click
/// listeners. Only compiled into the WASM bundle.
#[cfg(feature = "hydrate")]
mod client {
    use leptos::html::Button;
    use leptos::prelude::*;

    use crate::clipboard::{Capability, SystemClipboard, detect_async_clipboard, system_clipboard};
    use crate::prose::{BrowserScheduler, CopyControl, CopyFeedback, ListenerGuard, OutsideClickOptions, on_click_outside};

    /// Elements marked with this attribute do not clear the confirmation.
    const KEEP_COPIED: &str = "[data-keep-copied]";

    pub type BrowserControl = CopyControl<SystemClipboard, BrowserScheduler>;

    /// Build the control and tie its lifetime to the current reactive owner.
    pub fn mount(
        content: String,
        feedback: RwSignal<CopyFeedback>,
        button_ref: NodeRef<Button>,
    ) -> StoredValue<BrowserControl, LocalStorage> {
        let support = Capability::default();
        let control = CopyControl::new(content, system_clipboard(support.clone()), BrowserScheduler);
        control.feedback().on_change(move |state| {
            feedback.try_set(state);
        });

        let control = StoredValue::new_local(control);
        let listeners = StoredValue::new_local(None::<ListenerGuard>);

        // Effects only run once mounted in a live document, never during SSR.
        Effect::new(move |_| {
            support.set(detect_async_clipboard());
            if let Some(button) = button_ref.get() {
                let target = control.get_value();
                let options = OutsideClickOptions {
                    ignore: vec![KEEP_COPIED.to_string()],
                    detect_iframe: true,
                    ..OutsideClickOptions::default()
                };
                let guard = on_click_outside(button.into(), options, move || target.outside_interaction());
                listeners.set_value(guard);
            }
        });

        on_cleanup(move || {
            listeners.try_update_value(|guard| {
                guard.take();
            });
            control.try_with_value(|c| c.unmount());
        });

        control
    }

    pub fn activate(control: StoredValue<BrowserControl, LocalStorage>) {
        let Some(control) = control.try_get_value() else {
            return;
        };
        leptos::task::spawn_local(async move {
            // Failures are already logged by the control.
            let _ = control.activate().await;
        });
    }
}

/// Copy-to-clipboard button overlaid on a code block.
///
/// Visible while the block is hovered, and for as long as the "copied"
/// confirmation is showing.
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    content: String,
    /// Pointer state of the surrounding block
    #[prop(into)]
    hover: Signal<HoverRegion>,
) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::Idle);
    let button_ref = NodeRef::<leptos::html::Button>::new();
    let icons = &CONFIG.prose.copy_button;

    #[cfg(feature = "hydrate")]
    let control = client::mount(content, feedback, button_ref);
    #[cfg(not(feature = "hydrate"))]
    let _ = content;

    let on_click = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        client::activate(control);
    };

    let class = move || {
        if hover.get().control_visible(feedback.get()) {
            "copy-button show"
        } else {
            "copy-button"
        }
    };

    let icon_copy = icons.icon_copy.clone();
    let icon_copied = icons.icon_copied.clone();

    view! {
        <button type="button" node_ref=button_ref class=class on:click=on_click>
            <span class="sr-only">"Copy to clipboard"</span>
            <span class="icon-wrapper">
                {move || {
                    if feedback.get().is_copied() {
                        view! { <Icon name=icon_copied.clone() class="copied fade" fallback="\u{2713}" /> }.into_any()
                    } else {
                        view! { <Icon name=icon_copy.clone() class="fade" fallback="copy" /> }.into_any()
                    }
                }}
            </span>
        </button>
    }
}
