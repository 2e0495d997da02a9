use leptos::{html, prelude::*};
use leptos_use::{on_click_outside, use_window_scroll};

use crate::{config::SITE, i18n::Language, sections::NavbarState, theme::Theme};

use super::{
    navigator::use_sections,
    providers::{use_i18n, use_theme},
};

#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();
    let sections = use_sections();
    let (_, y) = use_window_scroll();
    let state = RwSignal::new(NavbarState::default());
    let (menu_open, set_menu_open) = signal(false);

    Effect::new(move |_| {
        let y = y.get();
        state.update(|s| s.update(y, &SITE.ui));
    });

    let header_class = move || {
        let s = state.get();
        format!(
            "fixed top-0 left-0 w-full z-50 transition-all duration-300 {} {}",
            if s.scrolled {
                "bg-background/80 backdrop-blur shadow-sm"
            } else {
                "bg-transparent"
            },
            if s.hidden && !menu_open.get() {
                "-translate-y-full"
            } else {
                "translate-y-0"
            },
        )
    };

    let links = move |class: &'static str| {
        SITE.sections
            .iter()
            .map(|section| {
                let id = section.id.clone();
                let label = section.label.clone();
                view! {
                    <a
                        href=format!("#{id}")
                        class=class
                        on:click=move |ev| {
                            ev.prevent_default();
                            set_menu_open(false);
                            sections.scroll_to(&id);
                        }
                    >
                        {move || i18n.text(&label)}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto px-4 py-3">
                <nav class="flex justify-between items-center">
                    <a href="#home" class="text-xl md:text-2xl font-bold">
                        <span class="bg-gradient-to-r from-primary to-purple-400 bg-clip-text text-transparent">
                            {SITE.brand.as_str()}
                        </span>
                    </a>
                    <div class="hidden md:flex items-center space-x-1">
                        {links("px-3 py-2 rounded-md text-sm hover:text-primary transition-colors")}
                    </div>
                    <div class="flex items-center gap-2">
                        <a
                            href=SITE.resume.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hidden md:inline-flex mr-3 px-3 py-1.5 rounded-md border text-sm hover:bg-muted"
                        >
                            {move || i18n.t("hero.download", "Download Resume")}
                        </a>
                        <LanguageToggle />
                        <ThemeToggle />
                        <button
                            class="md:hidden p-2 rounded-full hover:bg-muted transition-colors"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-label=move || i18n.t("nav.menu", "Menu")
                            aria-expanded=move || menu_open.get().to_string()
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </nav>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden flex flex-col gap-1 pt-2 pb-4 border-t mt-3">
                        {links("px-3 py-2 rounded-md hover:bg-muted")}
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let i18n = use_i18n();
    let theme = use_theme();
    let (open, set_open) = signal(false);
    let menu = NodeRef::<html::Div>::new();
    let _ = on_click_outside(menu, move |_| set_open(false));

    view! {
        <div class="relative" node_ref=menu>
            <button
                class="p-2 rounded-full hover:bg-muted transition-colors"
                on:click=move |_| set_open.update(|o| *o = !*o)
                aria-label=move || i18n.t("theme.toggle", "Change theme")
            >
                {move || theme.theme().icon()}
            </button>
            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-36 rounded-md border bg-background shadow-lg py-1">
                    {Theme::ALL
                        .into_iter()
                        .map(|option| {
                            let key = format!("theme.{option}");
                            view! {
                                <button
                                    class=move || {
                                        if theme.theme() == option {
                                            "w-full flex items-center gap-2 px-3 py-1.5 text-sm text-primary"
                                        } else {
                                            "w-full flex items-center gap-2 px-3 py-1.5 text-sm hover:bg-muted"
                                        }
                                    }
                                    on:click=move |_| {
                                        theme.set_theme(option);
                                        set_open(false);
                                    }
                                >
                                    <span>{option.icon()}</span>
                                    {move || i18n.t(&key, option.as_str())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let i18n = use_i18n();
    let (open, set_open) = signal(false);
    let menu = NodeRef::<html::Div>::new();
    let _ = on_click_outside(menu, move |_| set_open(false));

    view! {
        <div class="relative" node_ref=menu>
            <button
                class="flex items-center gap-1 px-2 py-1.5 rounded-md hover:bg-muted text-sm uppercase"
                on:click=move |_| set_open.update(|o| *o = !*o)
                aria-label=move || i18n.t("language.toggle", "Change language")
            >
                "🌐 "
                {move || i18n.language().code()}
            </button>
            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-36 rounded-md border bg-background shadow-lg py-1">
                    {Language::ALL
                        .into_iter()
                        .map(|language| {
                            view! {
                                <button
                                    class="w-full flex justify-between px-3 py-1.5 text-sm hover:bg-muted"
                                    on:click=move |_| {
                                        i18n.set_language(language);
                                        set_open(false);
                                    }
                                >
                                    {language.label()}
                                    <Show when=move || i18n.language() == language>
                                        <span class="text-primary">"✓"</span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
