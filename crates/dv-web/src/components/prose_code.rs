use leptos::prelude::*;

use crate::components::CopyButton;
use crate::content::CodeSample;
use crate::prose::HoverRegion;

/// A fenced code block: optional filename label, the code itself, and a copy
/// button revealed on hover.
#[component]
pub fn ProseCode(
    /// Exact text placed on the clipboard
    #[prop(into)]
    code: String,
    #[prop(optional_no_strip)] language: Option<String>,
    /// Label shown above the block
    #[prop(optional_no_strip)]
    filename: Option<String>,
    /// Highlighted line numbers; only exposed to the stylesheet
    #[prop(optional)]
    highlights: Vec<u32>,
    /// Pre-rendered block. Defaults to a plain `<pre><code>`.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let hover = RwSignal::new(HoverRegion::default());
    let language_class = format!("highlight-{}", language.as_deref().unwrap_or("text"));
    let highlights = highlights.iter().map(u32::to_string).collect::<Vec<_>>().join(",");

    let body = match children {
        Some(children) => children(),
        None => {
            let code_class = format!("language-{}", language.as_deref().unwrap_or("text"));
            let text = code.clone();
            view! {
                <pre>
                    <code class=code_class>{text}</code>
                </pre>
            }
            .into_any()
        }
    };

    view! {
        <div
            class=format!("prose-code {}", language_class)
            data-highlights=highlights
            on:pointerenter=move |_| hover.update(HoverRegion::enter)
            on:pointerleave=move |_| hover.update(HoverRegion::leave)
        >
            {filename.map(|name| view! { <span class="filename">{name}</span> })}
            {body}
            <CopyButton content=code hover=hover />
        </div>
    }
}

/// Render a [`CodeSample`] from article content.
#[component]
pub fn CodeSampleBlock(sample: CodeSample) -> impl IntoView {
    view! {
        <ProseCode
            code=sample.code
            language=sample.language.map(str::to_string)
            filename=sample.filename.map(str::to_string)
            highlights=sample.highlights.to_vec()
        />
    }
}
