//! Contact section
//!
//! Controlled form; validation, the `mailto:` hand-off and the delayed reset
//! all happen in the controller.

use dioxus::prelude::*;
use folio_core::{FormField, UiEvent};
use folio_ui::{Button, ButtonVariant};

use crate::components::reveal_class;
use crate::content::CONTACT_CONTENT_ID;
use crate::context::use_page;

#[component]
pub fn ContactSection() -> Element {
    let page = use_page();
    let state = page.state();
    let state = state.read();

    let form = state.form().clone();
    let revealed = state.is_revealed(CONTACT_CONTENT_ID);
    let email = state.config().contact_email.clone();

    let input = move |field: FormField| {
        move |evt: FormEvent| page.dispatch(UiEvent::FormInput(field, evt.value()))
    };

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { class: "section-title", "Get in Touch" }
            div {
                id: CONTACT_CONTENT_ID,
                class: reveal_class("contact-content", revealed),
                "data-watch": "true",

                div { class: "contact-info",
                    p { "Have a project in mind or just want to say hello? My inbox is open." }
                    a { class: "contact-email", href: "mailto:{email}",
                        i { class: "fas fa-envelope" }
                        " {email}"
                    }
                }

                form {
                    id: "contact-form",
                    class: "contact-form",
                    "novalidate": "true",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        page.dispatch(UiEvent::Submit);
                    },
                    div { class: "form-group",
                        input {
                            id: "name",
                            r#type: "text",
                            placeholder: "Your Name",
                            value: "{form.name}",
                            oninput: input(FormField::Name),
                        }
                    }
                    div { class: "form-group",
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "Your Email",
                            value: "{form.email}",
                            oninput: input(FormField::Email),
                        }
                    }
                    div { class: "form-group",
                        input {
                            id: "subject",
                            r#type: "text",
                            placeholder: "Subject",
                            value: "{form.subject}",
                            oninput: input(FormField::Subject),
                        }
                    }
                    div { class: "form-group",
                        textarea {
                            id: "message",
                            rows: "5",
                            placeholder: "Your Message",
                            value: "{form.message}",
                            oninput: input(FormField::Message),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        "Send Message"
                    }
                }
            }
        }
    }
}
