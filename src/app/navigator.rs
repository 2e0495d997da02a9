use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{
    config::SITE,
    sections::{scroll_target, show_scroll_hint, show_scroll_top, Reveal, SectionTracker},
};

use super::providers::use_i18n;

#[derive(Debug, Clone, Copy)]
pub struct Sections {
    tracker: RwSignal<SectionTracker>,
    threshold: f64,
    header_offset: f64,
}

impl Sections {
    pub fn is_active(&self, id: &str) -> bool {
        self.tracker.with(|t| t.is_active(id))
    }

    /// Smooth-scrolls so the section starts just below the fixed navbar.
    pub fn scroll_to(&self, id: &str) {
        let Some(el) = document().get_element_by_id(id) else {
            log::warn!("no section with id `{id}`");
            return;
        };
        let top = el.get_bounding_client_rect().top();
        let y = window().scroll_y().unwrap_or_default();
        smooth_scroll(scroll_target(top, y, self.header_offset));
    }
}

fn smooth_scroll(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

pub fn provide_sections() -> Sections {
    let ui = &SITE.ui;
    let sections = Sections {
        tracker: RwSignal::new(SectionTracker::new(
            SITE.sections.iter().map(|s| s.id.clone()),
            ui.section_threshold,
        )),
        threshold: ui.section_threshold,
        header_offset: ui.header_offset,
    };
    provide_context(sections);
    sections
}

pub fn use_sections() -> Sections {
    expect_context::<Sections>()
}

/// A page section whose visibility feeds the navigator.
#[component]
pub fn PageSection(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let sections = use_sections();
    let node = NodeRef::<html::Section>::new();

    let observed = id.clone();
    use_intersection_observer_with_options(
        node,
        move |entries, _| {
            for entry in entries {
                let (ratio, intersecting) = (entry.intersection_ratio(), entry.is_intersecting());
                sections
                    .tracker
                    .maybe_update(|t| t.observe(&observed, ratio, intersecting));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![sections.threshold, 0.6]),
    );

    view! {
        <section id=id node_ref=node class=class>
            {children()}
        </section>
    }
}

/// Fades its children up the first time they come into view.
#[component]
pub fn RevealOnScroll(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let reveal = RwSignal::new(Reveal::default());

    use_intersection_observer_with_options(
        node,
        move |entries, _| {
            for entry in entries {
                let intersecting = entry.is_intersecting();
                reveal.maybe_update(|r| r.observe(intersecting));
            }
        },
        UseIntersectionObserverOptions::default().root_margin("0px 0px -100px 0px".to_string()),
    );

    view! {
        <div
            node_ref=node
            class=move || format!("{} {class}", reveal.with(Reveal::class))
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SectionNavigator() -> impl IntoView {
    let sections = use_sections();
    let i18n = use_i18n();

    view! {
        <nav
            class="fixed z-40 right-4 top-1/2 -translate-y-1/2 hidden md:flex flex-col items-center gap-2"
            aria-label=move || i18n.t("nav.goTo", "Navigate to section")
        >
            {SITE
                .sections
                .iter()
                .map(|section| {
                    let id = section.id.clone();
                    let target = id.clone();
                    let label = section.label.clone();
                    let active = Memo::new(move |_| sections.is_active(&id));
                    view! {
                        <div class="relative group flex items-center">
                            <span class="absolute right-6 whitespace-nowrap rounded-md bg-background/90 px-2 py-1 text-xs opacity-0 group-hover:opacity-100 transition-opacity">
                                {move || i18n.text(&label)}
                            </span>
                            <button
                                class=move || {
                                    if active.get() {
                                        "w-3 h-3 rounded-full bg-primary scale-125 transition-all"
                                    } else {
                                        "w-3 h-3 rounded-full bg-muted-foreground/40 hover:bg-primary/70 transition-all"
                                    }
                                }
                                aria-current=move || active.get().then_some("true")
                                on:click=move |_| sections.scroll_to(&target)
                            ></button>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let i18n = use_i18n();
    let (_, y) = use_window_scroll();
    let show_at = SITE.ui.scroll_top_at;

    view! {
        <Show when=move || show_scroll_top(y.get(), show_at)>
            <button
                class="fixed bottom-5 right-5 z-40 flex w-12 h-12 items-center justify-center rounded-full bg-primary/90 text-primary-foreground shadow-lg"
                on:click=move |_| smooth_scroll(0.0)
                aria-label=move || i18n.t("nav.scrollTop", "Back to top")
            >
                "↑"
            </button>
        </Show>
    }
}

#[component]
pub fn ScrollDown(#[prop(into)] target: String) -> impl IntoView {
    let i18n = use_i18n();
    let sections = use_sections();
    let (_, y) = use_window_scroll();

    let visible = move || {
        let y = y.get();
        y <= 0.0 || {
            let height = window()
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();
            show_scroll_hint(y, height)
        }
    };

    view! {
        <Show when=visible>
            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center gap-1 text-primary animate-bounce"
                on:click={
                    let target = target.clone();
                    move |_| sections.scroll_to(&target)
                }
            >
                <span class="text-sm">{move || i18n.t("hero.scrollDown", "Scroll Down")}</span>
                <span>"⌄"</span>
            </button>
        </Show>
    }
}
