use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::config::SITE;

use super::{navigator::use_sections, providers::use_i18n};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    let sections = use_sections();
    let built = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.with_timezone(&Utc))
        .ok();
    let year = built.unwrap_or_else(Utc::now).year();
    let updated = built.map(|t| t.format("%Y-%m-%d").to_string());

    view! {
        <footer class="py-10 border-t">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-muted-foreground">
                    {format!("© {year} ")}
                    <span class="text-primary">{SITE.owner.as_str()}</span>
                    ". "
                    {move || i18n.t("footer.rights", "All rights reserved.")}
                </p>
                <nav class="flex flex-wrap gap-4 text-sm">
                    {SITE
                        .sections
                        .iter()
                        .map(|section| {
                            let id = section.id.clone();
                            let label = section.label.clone();
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="hover:text-primary"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        sections.scroll_to(&id);
                                    }
                                >
                                    {move || i18n.text(&label)}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                {updated
                    .map(|date| {
                        view! {
                            <p class="text-xs text-muted-foreground">
                                {move || i18n.t("footer.updated", "Last updated")}
                                ": "
                                {date}
                            </p>
                        }
                    })}
            </div>
        </footer>
    }
}
