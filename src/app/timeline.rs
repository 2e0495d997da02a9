use leptos::prelude::*;

use crate::{
    content::{Certificate, EducationEntry, ExperienceEntry, CONTENT},
    timeline::{achievements_heading, more_projects, TimelineState},
};

use super::{
    modal::ImageModal,
    navigator::{PageSection, RevealOnScroll},
    providers::use_i18n,
};

const ACHIEVEMENTS_SHOWN: usize = 3;

fn side(index: usize) -> &'static str {
    if index % 2 == 0 {
        "md:mr-auto md:pr-10"
    } else {
        "md:ml-auto md:pl-10"
    }
}

fn chips(items: &[String]) -> impl IntoView {
    items
        .iter()
        .map(|item| {
            view! { <span class="px-2 py-0.5 rounded-full bg-primary/10 text-primary text-xs">{item.clone()}</span> }
        })
        .collect_view()
}

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let i18n = use_i18n();
    let state = RwSignal::new(TimelineState::default());

    view! {
        <PageSection id="experience-timeline" class="py-20 bg-muted/30">
            <div class="container mx-auto px-4">
                <RevealOnScroll>
                    <h2 class="section-title text-center">
                        {move || i18n.t("experience.title", "Professional Experience")}
                    </h2>
                </RevealOnScroll>
                <p class="text-center text-muted-foreground mb-4 max-w-3xl mx-auto">
                    {move || i18n.t("experience.subtitle", "")}
                </p>
                <p class="text-center text-sm text-primary mb-12">
                    {move || i18n.t("experience.clickPrompt", "")}
                </p>
                <div class="relative max-w-5xl mx-auto">
                    <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-0.5 bg-primary/20"></div>
                    {CONTENT
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <ExperienceItem index entry state /> })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}

#[component]
fn ExperienceItem(
    index: usize,
    entry: &'static ExperienceEntry,
    state: RwSignal<TimelineState>,
) -> impl IntoView {
    let i18n = use_i18n();
    let active = move || state.with(|s| s.is_active(index));

    view! {
        <div class=format!("relative mb-10 pl-12 md:pl-0 md:w-1/2 {}", side(index))>
            <div class="absolute left-2 md:left-auto top-6 w-5 h-5 rounded-full border-4 border-background bg-primary"></div>
            <div
                class=move || {
                    if active() {
                        "rounded-xl border border-primary p-6 bg-background shadow-lg cursor-pointer"
                    } else {
                        "rounded-xl border p-6 bg-background shadow-sm hover:shadow-md cursor-pointer"
                    }
                }
                on:click=move |_| state.update(|s| s.toggle(index))
            >
                <span class="text-sm text-primary font-medium">{entry.period.as_str()}</span>
                <h3 class="text-xl font-semibold mt-1">{move || i18n.text(&entry.title)}</h3>
                <p class="text-muted-foreground">
                    {entry.company.as_str()}
                    " · "
                    {entry.location.as_str()}
                </p>
                <p class="mt-3 text-sm">{move || i18n.text(&entry.description)}</p>
                <div class="flex flex-wrap gap-2 mt-3">{chips(&entry.skills)}</div>
                <Show when=active>
                    <ExperienceDetails entry state />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ExperienceDetails(entry: &'static ExperienceEntry, state: RwSignal<TimelineState>) -> impl IntoView {
    let i18n = use_i18n();
    let total = entry.projects.len();

    view! {
        <div class="mt-5 pt-5 border-t space-y-5" on:click=|ev| ev.stop_propagation()>
            {(!entry.achievements.is_empty())
                .then(|| {
                    view! {
                        <div>
                            <h4 class="font-semibold mb-2">
                                {move || i18n.t("common.keyAchievements", "Key Achievements")}
                            </h4>
                            <ul class="list-disc pl-5 space-y-1 text-sm text-muted-foreground">
                                {entry
                                    .achievements
                                    .iter()
                                    .take(ACHIEVEMENTS_SHOWN)
                                    .map(|a| view! { <li>{move || i18n.text(a)}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}
            {(total > 0)
                .then(|| {
                    view! {
                        <div>
                            <h4 class="font-semibold mb-2">
                                {move || i18n.t("common.keyProjects", "Key Projects")}
                            </h4>
                            {move || {
                                let shown = state.with(|s| s.visible_projects(total));
                                entry
                                    .projects
                                    .iter()
                                    .take(shown)
                                    .map(|project| {
                                        view! {
                                            <div class="mb-3 p-3 rounded-lg bg-muted/40">
                                                <p class="font-medium">{move || i18n.text(&project.name)}</p>
                                                <p class="text-sm text-muted-foreground">
                                                    {move || i18n.text(&project.description)}
                                                </p>
                                                <div class="flex flex-wrap gap-2 mt-2">
                                                    {chips(&project.technologies)}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                            {(total > 1)
                                .then(|| {
                                    view! {
                                        <button
                                            class="text-sm text-primary hover:underline"
                                            on:click=move |_| state.update(|s| s.toggle_projects())
                                        >
                                            {move || {
                                                let s = state.get();
                                                match more_projects(&s, total) {
                                                    Some((n, key, noun)) => {
                                                        format!(
                                                            "{} {n} {}",
                                                            i18n.t("common.showMore", "Show"),
                                                            i18n.t(key, noun),
                                                        )
                                                    }
                                                    None => i18n.t("common.showLess", "Show less"),
                                                }
                                            }}
                                        </button>
                                    }
                                })}
                        </div>
                    }
                })}
            <p class="text-sm">
                <span class="font-semibold">{move || i18n.t("common.team", "Team")} ": "</span>
                {move || i18n.text(&entry.team)}
            </p>
        </div>
    }
}

#[component]
pub fn EducationTimeline() -> impl IntoView {
    let i18n = use_i18n();
    let state = RwSignal::new(TimelineState::default());
    let modal_open = RwSignal::new(false);
    let selected = RwSignal::new(None::<&'static Certificate>);

    let open_certificate = Callback::new(move |certificate: &'static Certificate| {
        selected.set(Some(certificate));
        modal_open.set(true);
    });

    let src = Signal::derive(move || {
        selected
            .get()
            .map(|c| c.image.clone())
            .unwrap_or_default()
    });
    let alt = Signal::derive(move || {
        selected
            .get()
            .map(|c| i18n.text(&c.name))
            .unwrap_or_default()
    });
    let caption = Signal::derive(move || selected.get().and_then(|c| c.date.clone()));

    view! {
        <PageSection id="education-timeline" class="py-20">
            <div class="container mx-auto px-4">
                <RevealOnScroll>
                    <h2 class="section-title text-center">
                        {move || i18n.t("education.title", "Education")}
                    </h2>
                </RevealOnScroll>
                <p class="text-center text-muted-foreground mb-4 max-w-3xl mx-auto">
                    {move || i18n.t("education.subtitle", "")}
                </p>
                <p class="text-center text-sm text-primary mb-12">
                    {move || i18n.t("education.clickPrompt", "")}
                </p>
                <div class="relative max-w-5xl mx-auto">
                    <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-0.5 bg-primary/20"></div>
                    {CONTENT
                        .education
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! { <EducationItem index entry state open_certificate /> }
                        })
                        .collect_view()}
                </div>
            </div>
            <ImageModal open=modal_open src alt caption />
        </PageSection>
    }
}

#[component]
fn EducationItem(
    index: usize,
    entry: &'static EducationEntry,
    state: RwSignal<TimelineState>,
    open_certificate: Callback<&'static Certificate>,
) -> impl IntoView {
    let i18n = use_i18n();
    let active = move || state.with(|s| s.is_active(index));
    let (heading_key, heading) = achievements_heading(entry);

    view! {
        <div class=format!("relative mb-10 pl-12 md:pl-0 md:w-1/2 {}", side(index))>
            <div class="absolute left-2 md:left-auto top-6 w-5 h-5 rounded-full border-4 border-background bg-primary"></div>
            <div
                class=move || {
                    if active() {
                        "rounded-xl border border-primary p-6 bg-background shadow-lg cursor-pointer"
                    } else {
                        "rounded-xl border p-6 bg-background shadow-sm hover:shadow-md cursor-pointer"
                    }
                }
                on:click=move |_| state.update(|s| s.toggle(index))
            >
                <span class="text-sm text-primary font-medium">{entry.period.as_str()}</span>
                <h3 class="text-xl font-semibold mt-1">{move || i18n.text(&entry.degree)}</h3>
                <p class="text-muted-foreground">
                    {move || i18n.text(&entry.institution)}
                    " · "
                    {entry.location.as_str()}
                </p>
                <p class="mt-3 text-sm">{move || i18n.text(&entry.description)}</p>
                <Show when=active>
                    <div class="mt-5 pt-5 border-t space-y-5" on:click=|ev| ev.stop_propagation()>
                        <div>
                            <h4 class="font-semibold mb-2">{move || i18n.t(heading_key, heading)}</h4>
                            <ul class="list-disc pl-5 space-y-1 text-sm text-muted-foreground">
                                {entry
                                    .achievements
                                    .iter()
                                    .map(|a| view! { <li>{move || i18n.text(a)}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                        {(!entry.courses.is_empty())
                            .then(|| {
                                view! {
                                    <div>
                                        <h4 class="font-semibold mb-2">
                                            {move || i18n.t("common.keyCourses", "Key Courses")}
                                        </h4>
                                        <div class="flex flex-wrap gap-2">
                                            {entry
                                                .courses
                                                .iter()
                                                .map(|course| {
                                                    view! {
                                                        <span class="px-2 py-0.5 rounded-full bg-muted text-xs">
                                                            {move || i18n.text(course)}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })}
                        {(!entry.certificates.is_empty())
                            .then(|| {
                                view! {
                                    <div>
                                        <h4 class="font-semibold mb-2">
                                            {move || i18n.t("common.certificates", "Certificates")}
                                        </h4>
                                        <div class="grid grid-cols-2 gap-3">
                                            {entry
                                                .certificates
                                                .iter()
                                                .map(|certificate| {
                                                    view! {
                                                        <button
                                                            class="group rounded-lg overflow-hidden border hover:border-primary text-left"
                                                            on:click=move |_| open_certificate.run(certificate)
                                                        >
                                                            <img
                                                                src=certificate.image.as_str()
                                                                alt=move || i18n.text(&certificate.name)
                                                                class="w-full h-24 object-cover group-hover:scale-105 transition-transform"
                                                                loading="lazy"
                                                            />
                                                            <p class="p-2 text-xs">
                                                                {move || i18n.text(&certificate.name)}
                                                            </p>
                                                        </button>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })}
                    </div>
                </Show>
            </div>
        </div>
    }
}
