use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::components::CodeSampleBlock;
use crate::config::CONFIG;
use crate::content::{Article, Block, find_article, format_published};

#[component]
fn ArticleBody(article: &'static Article) -> impl IntoView {
    view! {
        <Title text=format!("{} - {}", article.title, CONFIG.title) />
        <Meta name="description" content=article.description />
        <article class="prose">
            <header>
                <h1>{article.title}</h1>
                <time datetime=article.published>{format_published(article.published)}</time>
            </header>
            {article
                .blocks
                .iter()
                .map(|block| match *block {
                    Block::Heading(text) => view! { <h2>{text}</h2> }.into_any(),
                    Block::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
                    Block::Code(sample) => view! { <CodeSampleBlock sample=sample /> }.into_any(),
                })
                .collect_view()}
            <footer>
                <a href="/articles">"\u{2190} all articles"</a>
            </footer>
        </article>
    }
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();
    let article = move || params.with(|p| p.get("slug").and_then(|slug| find_article(&slug)));

    view! {
        <main class="page">
            {move || match article() {
                Some(article) => view! { <ArticleBody article=article /> }.into_any(),
                None => view! {
                    <Title text="Not found" />
                    <p>"No article here. " <a href="/articles">"Browse all articles"</a></p>
                }
                .into_any(),
            }}
        </main>
    }
}
