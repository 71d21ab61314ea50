use leptos::prelude::*;

use crate::content::site_content;
use crate::navigation::{NavigationController, Section};

#[component]
pub fn Header(nav: RwSignal<NavigationController>, scroll_to: Callback<Section>) -> impl IntoView {
    let initials = site_content().owner.initials.as_str();
    let menu_open = move || nav.with(|n| n.is_menu_open());

    view! {
        <header>
            <div class="container nav-container">
                <button class="logo" on:click=move |_| scroll_to.run(Section::Hero)>
                    {initials}
                </button>
                <button
                    class="hamburger"
                    aria-label="Toggle menu"
                    on:click=move |_| nav.update(|n| n.toggle_menu())
                >
                    <i class=move || if menu_open() { "fas fa-times" } else { "fas fa-bars" }></i>
                </button>
                <ul class=move || if menu_open() { "nav-menu active" } else { "nav-menu" }>
                    {Section::MENU
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li class="nav-item">
                                    <button
                                        class="nav-link"
                                        on:click=move |_| scroll_to.run(section)
                                    >
                                        {section.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </header>
    }
}
