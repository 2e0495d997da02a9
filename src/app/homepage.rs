use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    contact::Contact,
    hero::Hero,
    projects::Projects,
    services::Services,
    skills::Skills,
    timeline::{EducationTimeline, ExperienceTimeline},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Services />
        <ExperienceTimeline />
        <EducationTimeline />
        <Projects />
        <Skills />
        <Contact />
    }
}
