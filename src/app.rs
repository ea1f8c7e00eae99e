use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::MOTION_CONFIG_ELEMENT_ID;
use crate::ui::{CustomCursor, HomePage, NotFoundPage, PortfolioStyles, provide_motion_config};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Server: from context set in main.rs. Browser: read back from the page.
    let motion = provide_motion_config();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/qa-portfolio.css"/>
        <PortfolioStyles />

        // hands the server's motion settings to the hydrating client
        <script type="application/json" id=MOTION_CONFIG_ELEMENT_ID inner_html=motion.to_json()></script>

        <CustomCursor />

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
