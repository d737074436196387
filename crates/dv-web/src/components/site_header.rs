use leptos::prelude::*;

use crate::config::{CONFIG, HeaderPosition};

fn position_class(position: HeaderPosition) -> &'static str {
    match position {
        HeaderPosition::Left => "site-header nav-left",
        HeaderPosition::Center => "site-header nav-center",
        HeaderPosition::Right => "site-header nav-right",
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let header = &CONFIG.header;

    let brand = match &header.logo {
        Some(logo) => view! {
            <a href="/" class="brand">
                <picture>
                    <source srcset=logo.dark_path().to_string() media="(prefers-color-scheme: dark)" />
                    <img src=logo.path.clone() alt=logo.alt.clone() height="32" />
                </picture>
            </a>
        }
        .into_any(),
        None => view! { <a href="/" class="brand">{CONFIG.title.clone()}</a> }.into_any(),
    };

    view! {
        <header class=position_class(header.position)>
            {brand}
            <nav class="site-nav">
                <a href="/">"Home"</a>
                <a href="/articles">"Articles"</a>
            </nav>
        </header>
    }
}
