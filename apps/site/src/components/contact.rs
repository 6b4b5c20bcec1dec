use super::ui::{Button, ButtonSize, ButtonVariant, FormInput, FormTextarea};
use crate::context::AppContext;
use dioxus::prelude::*;
use foh_kernel::domain::constants::{
    CTA_LABEL, FORM_SUBMIT_LABEL, FORM_SUBTITLE, MESSAGE_PLACEHOLDER, SUCCESS_BODY, SUCCESS_TITLE,
};
use foh_kernel::domain::motion::{fade_in_place, pop_in, pop_out};
use foh_kernel::prelude::{ContactField, ContactInput, FormSession, UiState};
use tracing::debug;

/// "Get notified" modal.
///
/// Always mounted; renders nothing while closed so a pending close timer survives.
#[component]
pub fn ContactForm() -> Element {
    let mut ui = use_context::<Signal<UiState>>();
    let ctx = use_context::<AppContext>();

    let mut session = use_signal(FormSession::default);
    let mut closing = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let is_open = use_memo(move || ui.read().is_contact_form_open());

    // Every open or close starts a new session; each opening starts from a blank form.
    use_effect(move || {
        if is_open() {
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        }
        session.write().restart();
    });

    if !is_open() {
        return rsx! {};
    }

    // Plays the exit animation, then closes.
    let mut close = move || {
        if *closing.peek() {
            return;
        }
        debug!("Contact form closing");
        closing.set(true);
        spawn(async move {
            tokio::time::sleep(pop_out().total_duration()).await;
            closing.set(false);
            ui.write().toggle_contact_form(Some(false));
        });
    };

    let flow = ctx.contact.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(ticket) = session.write().begin() else {
            return;
        };

        let input = ContactInput::new(name(), email(), message());
        let flow = flow.clone();
        spawn(async move {
            let outcome = flow.submit(input).await;
            let applied = session.write().finish(ticket, outcome);
            if !applied || !session.peek().shows_success(ticket) {
                return;
            }

            flow.close_after_success(move || {
                if session.peek().shows_success(ticket) {
                    close();
                }
            })
            .await;
        });
    };

    let state = session.read().state().clone();
    let pending = state.is_pending();
    let field_error = |field: ContactField| state.field_error(field).unwrap_or_default().to_owned();

    rsx! {
        div {
            class: "modal-backdrop",
            style: fade_in_place().style(),
            tabindex: "-1",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "contact-title",
                style: if closing() { pop_out().style() } else { pop_in().style() },
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Sm,
                    class: "modal-close",
                    label: "Close",
                    onclick: move |_| close(),
                    "✕"
                }
                if state.is_success() {
                    div { class: "success", style: fade_in_place().style(),
                        div { class: "check", "✓" }
                        h2 { id: "contact-title", "{SUCCESS_TITLE}" }
                        p { "{SUCCESS_BODY}" }
                    }
                } else {
                    h2 { id: "contact-title", "{CTA_LABEL}" }
                    p { class: "subtitle", "{FORM_SUBTITLE}" }
                    if let Some(banner) = state.message() {
                        div { class: "form-banner", role: "alert", "{banner}" }
                    }
                    form { novalidate: true, onsubmit: onsubmit,
                        FormInput {
                            field: ContactField::Name,
                            value: name(),
                            placeholder: "Your name",
                            error: field_error(ContactField::Name),
                            disabled: pending,
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                        FormInput {
                            field: ContactField::Email,
                            input_type: "email",
                            value: email(),
                            placeholder: "your.email@example.com",
                            error: field_error(ContactField::Email),
                            helper_text: "We'll never share your email.",
                            disabled: pending,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        FormTextarea {
                            field: ContactField::Message,
                            value: message(),
                            placeholder: MESSAGE_PLACEHOLDER,
                            disabled: pending,
                            oninput: move |evt: FormEvent| message.set(evt.value()),
                        }
                        Button {
                            kind: "submit",
                            full_width: true,
                            is_loading: pending,
                            onclick: |_| {},
                            "{FORM_SUBMIT_LABEL}"
                        }
                    }
                }
            }
        }
    }
}
