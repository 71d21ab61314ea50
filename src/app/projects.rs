use leptos::prelude::*;

use crate::content::site_content;
use crate::navigation::Section;
use crate::projects::{gallery_entries, HoverState, ProjectDescriptor};

#[component]
pub fn Projects() -> impl IntoView {
    let projects = &site_content().projects;

    view! {
        <section id=Section::Projects.id()>
            <div class="container">
                <h2 class="section-title">"My Projects"</h2>
                <div class="projects-grid">
                    {gallery_entries(projects)
                        .into_iter()
                        .map(|(index, project)| view! { <ProjectCard index project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(index: String, project: &'static ProjectDescriptor) -> impl IntoView {
    let hover = RwSignal::new(HoverState::default());

    view! {
        <div
            class="project-card"
            on:mouseenter=move |_| hover.update(HoverState::enter)
            on:mouseleave=move |_| hover.update(HoverState::leave)
        >
            <div class="project-number">{index}</div>
            <div class="project-info">
                <h3 class="project-title">{project.title.as_str()}</h3>
                <p>{project.description.as_str()}</p>
                <div class="project-technologies">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="tech-tag">{tech.as_str()}</span> })
                        .collect_view()}
                </div>
                {move || {
                    hover
                        .get()
                        .is_hovered()
                        .then(|| {
                            view! {
                                <div class="project-links">
                                    <a
                                        href=project.github_url.as_str()
                                        class="project-link"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        <i class="fab fa-github"></i>
                                        " View on GitHub"
                                    </a>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
