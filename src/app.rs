mod contact;
mod footer;
mod hero;
mod homepage;
mod modal;
mod navbar;
mod navigator;
mod projects;
mod providers;
mod services;
mod skills;
mod timeline;
mod toast;
mod uploader;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SITE;

use footer::Footer;
use homepage::HomePage;
use navbar::Navbar;
use navigator::{provide_sections, ScrollToTop, SectionNavigator};
use providers::{provide_i18n, provide_theme};
use toast::{provide_toasts, ToastContainer};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let i18n = provide_i18n();
    let theme = provide_theme();
    provide_toasts(SITE.ui.toast_duration_ms);
    provide_sections();

    view! {
        <Html attr:lang=move || i18n.language().code() attr:class=move || theme.class() />
        <Title formatter=|title| format!("{} | {title}", SITE.owner) />
        <Meta name="description" content=SITE.description.as_str() />
        <Meta name="color-scheme" content=move || if theme.is_dark() { "dark" } else { "light" } />

        <Router>
            <Navbar />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <SectionNavigator />
            <ScrollToTop />
            <ToastContainer />
        </Router>
    }
}
