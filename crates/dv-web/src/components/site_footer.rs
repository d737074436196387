use leptos::prelude::*;

use crate::components::SocialLinks;
use crate::config::{CONFIG, FooterAlignment};

fn alignment_class(alignment: FooterAlignment) -> &'static str {
    match alignment {
        FooterAlignment::None => "site-footer",
        FooterAlignment::Left => "site-footer align-left",
        FooterAlignment::Center => "site-footer align-center",
        FooterAlignment::Right => "site-footer align-right",
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let footer = &CONFIG.footer;
    let links = CONFIG.social_links();
    let message = CONFIG.footer_message().map(str::to_string);
    let credits = footer
        .credits
        .enabled
        .then(|| footer.credits.repository.clone())
        .flatten();

    view! {
        <footer class=alignment_class(footer.alignment)>
            {footer.navigation.then(|| view! {
                <nav class="footer-nav">
                    <a href="/">"Home"</a>
                    <a href="/articles">"Articles"</a>
                </nav>
            })}
            {(!links.is_empty()).then(|| view! {
                <div class="footer-socials">
                    {message.map(|m| view! { <span class="footer-message">{m}</span> })}
                    <SocialLinks links=links />
                </div>
            })}
            {credits.map(|repo| view! {
                <div class="credits">
                    "Theme inspired by " <a href=repo target="_blank" rel="noopener noreferrer">"Alpine"</a>
                </div>
            })}
        </footer>
    }
}
