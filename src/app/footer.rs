use leptos::prelude::*;

use crate::content::{build_year, site_content};

#[component]
pub fn Footer() -> impl IntoView {
    let content = site_content();

    view! {
        <footer>
            <div class="container">
                <div class="social-links">
                    {content
                        .social_links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.as_str()
                                    class="social-link"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label.as_str()
                                >
                                    <i class=link.icon.as_str()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p>
                    {format!("© {} {}. All rights reserved.", build_year(), content.owner.name)}
                </p>
            </div>
        </footer>
    }
}
