use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::Section;
use crate::config::CONFIG;
use crate::content::{articles, format_published};

const RECENT_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let recent = articles().into_iter().take(RECENT_COUNT).collect::<Vec<_>>();

    view! {
        <Title text=CONFIG.title.clone() />
        <Meta name="description" content=CONFIG.description.clone() />
        <main class="page">
            <header class="hero">
                <h1>{CONFIG.title.clone()}</h1>
                <p class="tagline">{CONFIG.description.clone()}</p>
            </header>

            <Section id="about" title="About">
                <p>
                    "Software engineer writing about tooling, type systems and the small "
                    "details that make day-to-day development less painful."
                </p>
            </Section>

            <Section id="recent" title="Recent articles">
                <ul class="article-list">
                    {recent
                        .into_iter()
                        .map(|article| view! {
                            <li>
                                <a href=article.href()>{article.title}</a>
                                <time datetime=article.published>{format_published(article.published)}</time>
                            </li>
                        })
                        .collect_view()}
                </ul>
                <a href="/articles" class="more">"All articles \u{2192}"</a>
            </Section>
        </main>
    }
}
