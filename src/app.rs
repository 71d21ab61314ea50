mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::site_content;
use crate::navigation::{NavigationController, Section, SectionScroller};

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <MetaTags />
            </head>
            <body class="bw-mode">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let owner = &site_content().owner;

    view! {
        <Title formatter=move |title| format!("{} - {title}", owner.name) />
        <Meta name="description" content=owner.tagline.as_str() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Scrolls the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentScroller;

impl SectionScroller for DocumentScroller {
    fn scroll_into_view(&self, section_id: &str) -> bool {
        let Some(el) = document().get_element_by_id(section_id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let nav = RwSignal::new(NavigationController::new());
    let scroll_to = Callback::new(move |section: Section| {
        nav.update(|n| {
            n.scroll_to_section(&DocumentScroller, section.id());
        });
    });

    view! {
        <Title text="Portfolio" />
        <div class="App">
            <div class="bw-background"></div>
            <Header nav scroll_to />
            <Hero scroll_to />
            <About />
            <Projects />
            <Contact />
            <Footer />
        </div>
    }
}
