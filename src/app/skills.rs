use leptos::prelude::*;

use crate::{
    content::{Skill, SkillLevel, CONTENT},
    filter::{select_category, skill_tags, SkillFilter},
};

use super::{
    navigator::{PageSection, RevealOnScroll},
    providers::use_i18n,
};

fn chip_class(selected: bool) -> &'static str {
    if selected {
        "px-3 py-1 rounded-full text-xs border border-primary bg-primary text-primary-foreground"
    } else {
        "px-3 py-1 rounded-full text-xs border hover:border-primary"
    }
}

fn level_width(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Beginner => "w-1/4",
        SkillLevel::Intermediate => "w-1/2",
        SkillLevel::Advanced => "w-3/4",
        SkillLevel::Expert => "w-full",
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let i18n = use_i18n();
    let filter = RwSignal::new(SkillFilter::default());
    let selected = RwSignal::new(String::new());
    let tags = skill_tags(&CONTENT.skills);
    let total = CONTENT.skill_count();

    let filtered = Memo::new(move |_| filter.with(|f| f.apply(&CONTENT.skills)));
    let current = Memo::new(move |_| {
        let id = selected.with(|s| filtered.with(|f| select_category(f, s)));
        id.map(str::to_string)
    });
    let shown = Memo::new(move |_| filtered.with(|f| f.iter().map(|c| c.skills.len()).sum::<usize>()));
    let current_skills = Memo::new(move |_| {
        let id = current.get();
        filtered.with(|f| {
            f.iter()
                .find(|c| Some(c.id) == id.as_deref())
                .map(|c| c.skills.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <PageSection id="skills" class="py-20">
            <div class="container mx-auto px-4">
                <RevealOnScroll>
                    <h2 class="section-title text-center">
                        {move || i18n.t("skills.title", "Skills")}
                    </h2>
                </RevealOnScroll>
                <p class="text-center text-muted-foreground mb-10 max-w-3xl mx-auto">
                    {move || i18n.t("skills.subtitle", "")}
                </p>

                <div class="mb-8 space-y-4 rounded-xl border bg-background p-4">
                    <div class="flex flex-wrap items-center gap-3">
                        <input
                            type="search"
                            class="flex-1 min-w-[12rem] px-3 py-2 rounded-md border bg-background"
                            placeholder=move || i18n.t("common.search", "Search")
                            prop:value=move || filter.with(|f| f.search.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.search = value);
                            }
                        />
                        <span class="text-sm font-semibold">
                            {move || i18n.t("common.filter", "Filter")}
                            {move || {
                                let n = filter.with(SkillFilter::active_count);
                                (n > 0).then(|| format!(" ({n})"))
                            }}
                        </span>
                        <Show when=move || filter.with(|f| f.active_count() > 0)>
                            <button
                                class="text-sm text-primary hover:underline"
                                on:click=move |_| filter.update(SkillFilter::clear)
                            >
                                {move || i18n.t("common.clearAll", "Clear all")}
                            </button>
                        </Show>
                    </div>
                    <div>
                        <p class="text-sm text-muted-foreground mb-2">
                            {move || i18n.t("skills.level", "Skill Level")}
                        </p>
                        <div class="flex flex-wrap gap-2">
                            {SkillLevel::ALL
                                .into_iter()
                                .map(|level| {
                                    let label = level.label();
                                    view! {
                                        <button
                                            class=move || chip_class(filter.with(|f| f.levels.contains(&level)))
                                            on:click=move |_| filter.update(|f| f.toggle_level(level))
                                        >
                                            {move || i18n.text(&label)}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <p class="text-sm text-muted-foreground mb-2">
                            {move || i18n.t("skills.tags", "Tags")}
                        </p>
                        <div class="flex flex-wrap gap-2">
                            {tags
                                .into_iter()
                                .map(|tag| {
                                    let label = tag.clone();
                                    let selected = tag.clone();
                                    view! {
                                        <button
                                            class=move || chip_class(filter.with(|f| f.tags.contains(&selected)))
                                            on:click=move |_| filter.update(|f| f.toggle_tag(&tag))
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <Show
                    when=move || filtered.with(|f| !f.is_empty())
                    fallback=move || {
                        view! {
                            <p class="text-center text-muted-foreground py-10">
                                {move || i18n.t("skills.noMatch", "No skills match your current filters.")}
                            </p>
                        }
                    }
                >
                    <div class="flex flex-wrap justify-center gap-2 mb-6">
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|category| {
                                    let id = category.id;
                                    view! {
                                        <button
                                            class=move || {
                                                if current.get().as_deref() == Some(id) {
                                                    "px-4 py-2 rounded-md bg-primary text-primary-foreground text-sm"
                                                } else {
                                                    "px-4 py-2 rounded-md border text-sm hover:bg-muted"
                                                }
                                            }
                                            on:click=move |_| selected.set(id.to_string())
                                        >
                                            {category.label}
                                            {format!(" ({})", category.skills.len())}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <p class="text-center text-sm text-muted-foreground mb-6">
                        {move || {
                            format!(
                                "{} {} {} {total} {}",
                                i18n.t("skills.showing", "Showing"),
                                shown.get(),
                                i18n.t("skills.of", "of"),
                                i18n.t("skills.skills", "skills"),
                            )
                        }}
                    </p>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                        <For
                            each=move || current_skills.get()
                            key=|skill| skill.name.clone()
                            children=move |skill| view! { <SkillCard skill filter /> }
                        />
                    </div>
                </Show>
            </div>
        </PageSection>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, filter: RwSignal<SkillFilter>) -> impl IntoView {
    let i18n = use_i18n();
    let level = skill.level.label();

    view! {
        <div class="rounded-xl border bg-background p-5 shadow-sm hover:shadow-md transition-shadow">
            <div class="flex items-center gap-3 mb-2">
                <i class=format!("{} text-2xl text-primary", skill.icon)></i>
                <h3 class="font-semibold">{skill.name.as_str()}</h3>
            </div>
            <p class="text-sm text-muted-foreground mb-3">{skill.description.as_str()}</p>
            <div class="flex items-center justify-between text-xs mb-1">
                <span>{move || i18n.text(&level)}</span>
            </div>
            <div class="h-1.5 rounded-full bg-muted mb-3">
                <div class=format!("h-full rounded-full bg-primary {}", level_width(skill.level))></div>
            </div>
            <div class="flex flex-wrap gap-1">
                {skill
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <button
                                class="px-2 py-0.5 rounded bg-muted text-xs hover:text-primary"
                                on:click=move |_| filter.update(|f| f.toggle_tag(tag))
                            >
                                {format!("#{tag}")}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
