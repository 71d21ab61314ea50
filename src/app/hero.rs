use leptos::prelude::*;

use crate::content::site_content;
use crate::navigation::Section;

#[component]
pub fn Hero(scroll_to: Callback<Section>) -> impl IntoView {
    let owner = &site_content().owner;

    view! {
        <section id=Section::Hero.id()>
            <div class="container hero-content">
                <h1 class="hero-title">{owner.name.as_str()}</h1>
                <p class="hero-subtitle">{owner.role.as_str()}</p>
                <div class="hero-divider"></div>
                <p>{owner.tagline.as_str()}</p>
                <button class="hero-cta" on:click=move |_| scroll_to.run(Section::Projects)>
                    "View My Work"
                </button>
            </div>
        </section>
    }
}
