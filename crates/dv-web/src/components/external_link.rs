use leptos::prelude::*;

use crate::components::Icon;
use crate::config::SocialLink;

/// Link that opens in a new tab, with an optional leading icon
#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] icon: Option<String>,
) -> impl IntoView {
    match icon {
        Some(icon) => {
            let title = label.clone();
            view! {
                <a href=href target="_blank" rel="noopener noreferrer" class="external-link" title=title>
                    <Icon name=icon size=20 fallback=label.clone() />
                    <span class="sr-only">{label}</span>
                </a>
            }
            .into_any()
        }
        None => view! {
            <a href=href target="_blank" rel="noopener noreferrer" class="external-link">
                {label} " \u{2197}"
            </a>
        }
        .into_any(),
    }
}

#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <nav class="socials" aria-label="Social links">
            {links
                .into_iter()
                .map(|link| view! { <ExternalLink href=link.href label=link.label icon=link.icon /> })
                .collect_view()}
        </nav>
    }
}
