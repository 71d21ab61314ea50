use std::{future::Future, time::Duration};

use futures::channel::oneshot;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{
    ContactForm, ContactFormController, ContactTransport, FormField, TransportError,
};
use crate::content::{site_content, ContactDetail};
use crate::navigation::Section;

/// Stand-in for a round trip to a mail backend.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Accepts every message after [`SUBMIT_DELAY`] without sending it anywhere.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            delay: SUBMIT_DELAY,
        }
    }
}

impl ContactTransport for SimulatedTransport {
    fn send(&self, message: &ContactForm) -> impl Future<Output = Result<(), TransportError>> {
        let delay = self.delay;
        let payload = serde_json::to_string(message);
        async move {
            let (tx, rx) = oneshot::channel();
            set_timeout(
                move || {
                    let _ = tx.send(());
                },
                delay,
            );
            rx.await.map_err(|_| TransportError::Interrupted)?;
            match payload {
                Ok(json) => log::info!("contact form submitted: {json}"),
                Err(err) => log::warn!("couldn't serialize contact form: {err}"),
            }
            Ok(())
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactFormController::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(message) = form.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = SimulatedTransport::default().send(&message).await;
            form.update(|c| c.complete_submit(outcome));
        });
    };

    view! {
        <section id=Section::Contact.id()>
            <div class="container">
                <h2 class="section-title">"Get In Touch"</h2>
                <div class="contact-container">
                    <div class="contact-info">
                        {site_content()
                            .contact_details
                            .iter()
                            .map(|detail| view! { <ContactItem detail /> })
                            .collect_view()}
                    </div>
                    <form class="contact-form" on:submit=on_submit>
                        {FormField::ALL
                            .into_iter()
                            .map(|field| view! { <FormInput field form /> })
                            .collect_view()}
                        <button
                            type="submit"
                            class="submit-btn"
                            disabled=move || form.with(|c| c.is_submitting())
                        >
                            {move || form.with(|c| c.status().button_text())}
                        </button>
                        {move || {
                            form.with(|c| c.status().banner())
                                .map(|banner| view! { <p class=banner.class>{banner.text}</p> })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(detail: &'static ContactDetail) -> impl IntoView {
    let has_text = detail.title.is_some() || detail.detail.is_some();

    view! {
        <div class="contact-item">
            <i class=format!("{} contact-icon", detail.icon)></i>
            {has_text
                .then(|| {
                    view! {
                        <div>
                            {detail.title.as_deref().map(|t| view! { <h3>{t}</h3> })}
                            {detail.detail.as_deref().map(|d| view! { <p>{d}</p> })}
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn FormInput(field: FormField, form: RwSignal<ContactFormController>) -> impl IntoView {
    let on_input = move |field_id: String, value: String| {
        form.update(|c| {
            if let Err(err) = c.handle_input_change(&field_id, value) {
                log::warn!("{err}");
            }
        });
    };
    let value = move || form.with(|c| c.form().value(field).to_string());

    let control = match field.input_type() {
        Some(kind) => view! {
            <input
                type=kind
                id=field.id()
                class="form-input"
                placeholder=field.placeholder()
                prop:value=value
                on:input=move |ev| {
                    let (field_id, input) = read_input(&ev);
                    on_input(field_id, input);
                }
                required
            />
        }
        .into_any(),
        None => view! {
            <textarea
                id=field.id()
                class="form-input"
                placeholder=field.placeholder()
                prop:value=value
                on:input=move |ev| {
                    let (field_id, input) = read_input(&ev);
                    on_input(field_id, input);
                }
                required
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=field.id()>{field.label()}</label>
            {control}
        </div>
    }
}

/// The id of the element an input event came from, and its new value.
fn read_input(ev: &web_sys::Event) -> (String, String) {
    let field_id = event_target::<web_sys::HtmlElement>(ev).id();
    (field_id, event_target_value(ev))
}
