use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::config::CONFIG;
use crate::content::{articles, format_published};

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let title = format!("Articles - {}", CONFIG.title);

    view! {
        <Title text=title />
        <Meta name="description" content=format!("Articles by {}", CONFIG.title) />
        <main class="page">
            <h1>"Articles"</h1>
            <ul class="article-list">
                {articles()
                    .into_iter()
                    .map(|article| view! {
                        <li>
                            <a href=article.href()>{article.title}</a>
                            <time datetime=article.published>{format_published(article.published)}</time>
                            <p class="summary">{article.description}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </main>
    }
}
