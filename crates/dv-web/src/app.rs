use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{SiteFooter, SiteHeader};
use crate::config::CONFIG;
use crate::pages::{ArticlePage, ArticlesPage, HomePage};

/// Document shell rendered on the server around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/logo.svg" type="image/svg+xml" />
                <link rel="stylesheet" href="/pkg/dv-web.css" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let social_image = CONFIG.image.clone().map(|image| {
        view! {
            <Meta property="og:image" content=image.src />
            <Meta property="og:image:alt" content=image.alt />
            <Meta property="og:image:width" content=image.width.to_string() />
            <Meta property="og:image:height" content=image.height.to_string() />
        }
    });

    view! {
        {social_image}
        <SiteHeader />
        <Router>
            <Routes fallback=|| view! { <main class="page"><p>"404 - Page not found"</p></main> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/articles") view=ArticlesPage />
                <Route path=path!("/articles/:slug") view=ArticlePage />
            </Routes>
        </Router>
        <SiteFooter />
    }
}
