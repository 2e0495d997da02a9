use leptos::prelude::*;

use crate::config::SITE;

use super::{
    navigator::{use_sections, PageSection, ScrollDown},
    providers::use_i18n,
};

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();
    let sections = use_sections();
    let contact = &SITE.contact;

    view! {
        <PageSection id="home" class="min-h-screen py-20 relative overflow-hidden flex items-center">
            <div class="container mx-auto px-4">
                <div class="flex flex-col lg:flex-row items-center justify-between gap-10">
                    <div class="w-full lg:w-1/2 space-y-6">
                        <div class="space-y-3">
                            <p class="text-lg text-primary font-medium">
                                {move || i18n.t("hero.greeting", "Hey there!")}
                            </p>
                            <h1 class="text-4xl md:text-5xl font-bold">
                                {move || i18n.t("hero.iam", "I'm")}
                                " "
                                <span class="bg-gradient-to-r from-primary to-purple-400 bg-clip-text text-transparent">
                                    {SITE.owner.as_str()}
                                </span>
                            </h1>
                            <h2 class="text-xl md:text-2xl font-semibold text-muted-foreground">
                                {move || i18n.t("hero.title", "DATA & ANALYTICS ENGINEER")}
                            </h2>
                        </div>
                        <p class="text-base md:text-lg leading-relaxed text-muted-foreground">
                            {move || i18n.t("hero.description", "")}
                        </p>
                        <div class="flex gap-4 text-2xl">
                            {SITE
                                .socials
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url.as_str()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="hover:text-primary transition-colors"
                                            aria-label=social.name.as_str()
                                        >
                                            <i class=social.icon.as_str()></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=format!("mailto:{}", contact.email)
                                class="hover:text-primary transition-colors"
                                aria-label="Email"
                            >
                                "✉"
                            </a>
                        </div>
                        <div class="flex flex-wrap gap-4">
                            <a
                                href="#contact"
                                class="px-5 py-2.5 rounded-md bg-primary text-primary-foreground font-medium"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    sections.scroll_to("contact");
                                }
                            >
                                {move || i18n.t("hero.getInTouch", "Get in Touch")}
                            </a>
                            <a
                                href=SITE.resume.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-5 py-2.5 rounded-md border font-medium hover:bg-muted"
                            >
                                {move || i18n.t("hero.download", "Download Resume")}
                            </a>
                        </div>
                    </div>
                    <div class="w-full lg:w-1/2 flex justify-center">
                        {(!SITE.avatar.is_empty())
                            .then(|| {
                                view! {
                                    <img
                                        src=SITE.avatar.as_str()
                                        alt=SITE.owner.as_str()
                                        class="w-64 h-64 md:w-80 md:h-80 rounded-full object-cover border-4 border-primary/30 shadow-xl"
                                    />
                                }
                            })}
                    </div>
                </div>
            </div>
            <ScrollDown target="services" />
        </PageSection>
    }
}
