use leptos::prelude::*;

use crate::content::site_content;
use crate::navigation::Section;

#[component]
pub fn About() -> impl IntoView {
    let about = &site_content().about;

    view! {
        <section id=Section::About.id()>
            <div class="container">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-content">
                    <div class="about-text">
                        <h3>{about.heading.as_str()}</h3>
                        {about
                            .paragraphs
                            .iter()
                            .map(|p| view! { <p>{p.as_str()}</p> })
                            .collect_view()}
                        <div class="skills">
                            {about
                                .skills
                                .iter()
                                .map(|s| view! { <span class="skill">{s.as_str()}</span> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
