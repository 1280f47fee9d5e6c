use dioxus::prelude::*;

use crate::components::{ContentUnavailable, Icon, IconKind};
use crate::core::contact::{ContactDraft, FieldError};
use crate::core::content::{ContactChannel, ContentState};
use crate::core::motion;
use crate::i18n;

#[component]
pub fn Contact() -> Element {
    let content = ContentState::load();
    let Some(portfolio) = content.portfolio else {
        return rsx! { ContentUnavailable { message: content.error.unwrap_or_default() } };
    };

    rsx! {
        section { class: "page page-contact",
            header { class: "page__header reveal",
                h1 { class: "page__title page__title--gradient", {crate::t!("contact-title")} }
                p { class: "page__intro", {crate::t!("contact-intro")} }
            }

            div { class: "contact-layout",
                section { class: "contact-channels",
                    div { class: "section-heading",
                        span { class: "section-heading__icon",
                            Icon { kind: IconKind::MessageCircle, class: "icon icon--md" }
                        }
                        h2 { class: "section-heading__title", {crate::t!("contact-channels")} }
                        div { class: "section-heading__rule" }
                    }
                    div { class: "contact-channels__grid",
                        for (index, channel) in portfolio.contacts.iter().enumerate() {
                            {render_channel(channel, index)}
                        }
                    }
                }

                section { class: "contact-form-panel",
                    ContactForm { recipient: portfolio.site.email.clone() }
                    p { class: "contact-form-panel__location",
                        Icon { kind: IconKind::MapPin, class: "icon icon--xs" }
                        "{portfolio.site.location}"
                    }
                }
            }

            footer { class: "page__footer",
                p { {crate::t!("contact-footer")} }
            }
        }
    }
}

fn render_channel(channel: &ContactChannel, index: usize) -> Element {
    let aria = crate::t!("contact-via", channel = channel.title.clone());
    let rel = channel.external.then_some("noopener noreferrer");

    rsx! {
        a {
            key: "{channel.title}",
            class: "contact-card reveal",
            style: motion::stagger_style(index),
            href: "{channel.href}",
            target: channel.target(),
            rel,
            aria_label: "{aria}",
            span { class: "contact-card__icon",
                Icon { kind: channel.icon, class: "icon icon--md" }
            }
            h3 { class: "contact-card__title", "{channel.title}" }
            p { class: "contact-card__label", "{channel.label}" }
        }
    }
}

/// Message form. A valid draft opens the visitor's mail client with a
/// prefilled `mailto:` link; nothing is sent from here.
#[component]
fn ContactForm(recipient: String) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut mailto = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = ContactDraft {
            name: name(),
            email: email(),
            message: message(),
        };
        match draft.validate() {
            Ok(()) => {
                let subject = i18n::plain(&crate::t!("contact-mail-subject", name = draft.name.trim()));
                let url = draft.mailto(&recipient, &subject);
                errors.set(Vec::new());
                open_mail_client(&url);
                mailto.set(Some(url));
            }
            Err(problems) => {
                tracing::debug!(?problems, "contact form rejected");
                mailto.set(None);
                errors.set(problems);
            }
        }
    };

    let error_list = errors();
    let has_error = |field: FieldError| error_list.contains(&field);

    rsx! {
        div { class: "contact-form",
            div { class: "contact-form__header",
                Icon { kind: IconKind::Send, class: "icon icon--sm" }
                h2 { class: "contact-form__title", {crate::t!("contact-form-title")} }
            }

            form { class: "contact-form__fields", novalidate: true, onsubmit,
                input {
                    class: "contact-form__input",
                    r#type: "text",
                    name: "name",
                    placeholder: crate::t!("contact-name-placeholder"),
                    aria_invalid: "{has_error(FieldError::MissingName)}",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "contact-form__input",
                    r#type: "email",
                    name: "email",
                    placeholder: crate::t!("contact-email-placeholder"),
                    aria_invalid: "{has_error(FieldError::InvalidEmail)}",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                textarea {
                    class: "contact-form__input contact-form__input--message",
                    name: "message",
                    rows: "4",
                    placeholder: crate::t!("contact-message-placeholder"),
                    aria_invalid: "{has_error(FieldError::MissingMessage)}",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }

                if !error_list.is_empty() {
                    ul { class: "contact-form__errors", role: "alert",
                        for error in error_list.iter() {
                            li { key: "{error.message_key()}", {i18n::tr(error.message_key())} }
                        }
                    }
                }

                button { r#type: "submit", class: "button button--primary contact-form__submit",
                    span { {crate::t!("contact-submit")} }
                    Icon { kind: IconKind::Send, class: "icon icon--sm" }
                }
            }

            if let Some(url) = mailto() {
                p { class: "contact-form__ready",
                    {crate::t!("contact-ready")}
                    " "
                    a { href: "{url}", {crate::t!("contact-open-mail")} }
                }
            }
        }
    }
}

fn open_mail_client(url: &str) {
    let quoted = match serde_json::to_string(url) {
        Ok(quoted) => quoted,
        Err(err) => {
            tracing::warn!("could not quote mailto link: {err}");
            return;
        }
    };
    let eval = document::eval(&format!("window.location.href = {quoted}; return true;"));
    spawn(async move {
        if let Err(err) = eval.await {
            tracing::warn!("could not open mail client: {err}");
        }
    });
}
