use crate::assets;
use crate::components::CopyButton;
use crate::i18n::use_language;
use folio_content::mirror;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
const SEND_MS: i32 = 1500;
#[cfg(target_arch = "wasm32")]
const SENT_HOLD_MS: i32 = 3000;

/// Lifecycle of the simulated contact form. There is no backend; the send
/// path exists to exercise the localized button states.
#[derive(Clone, Copy, PartialEq, Eq)]
enum FormState {
    Idle,
    Sending,
    Sent,
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let snap = use_language().snapshot();
    let contact = &snap.catalogue.contact;

    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let form_state = use_state(|| FormState::Idle);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                message.set(area.value());
            }
        })
    };

    let on_submit = {
        let form_state = form_state.clone();
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *form_state != FormState::Idle {
                return;
            }
            #[cfg(target_arch = "wasm32")]
            {
                let form_state = form_state.clone();
                let name = name.clone();
                let email = email.clone();
                let message = message.clone();
                form_state.set(FormState::Sending);
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = crate::dom::sleep_ms(SEND_MS).await;
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    form_state.set(FormState::Sent);
                    let _ = crate::dom::sleep_ms(SENT_HOLD_MS).await;
                    form_state.set(FormState::Idle);
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                // No timer off-browser; the send resolves within the event.
                form_state.set(FormState::Sending);
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                form_state.set(FormState::Sent);
            }
        })
    };

    let send_label = match *form_state {
        FormState::Idle => &contact.form.send,
        FormState::Sending => &contact.form.sending,
        FormState::Sent => &contact.form.sent,
    };

    // Info rows nudge toward the trailing edge on hover; the magnitude is
    // fixed, the sign follows the document direction.
    let row_style = format!("--hover-shift:{}px", mirror::hover_shift(snap.dir, 10.0));

    struct InfoRow<'a> {
        label: &'a str,
        display: &'a str,
        href: String,
        /// Text the copy button puts on the clipboard.
        value: &'a str,
        sub: Option<&'a str>,
        external: bool,
    }

    let rows = [
        InfoRow {
            label: &contact.info.phone,
            display: assets::PHONE,
            href: assets::PHONE_HREF.to_string(),
            value: assets::PHONE,
            sub: Some(assets::PHONE_ALT),
            external: false,
        },
        InfoRow {
            label: &contact.info.email,
            display: assets::EMAIL,
            href: format!("mailto:{}", assets::EMAIL),
            value: assets::EMAIL,
            sub: None,
            external: false,
        },
        InfoRow {
            label: &contact.info.github,
            display: assets::GITHUB_URL,
            href: assets::GITHUB_URL.to_string(),
            value: assets::GITHUB_URL,
            sub: None,
            external: true,
        },
        InfoRow {
            label: "LinkedIn",
            display: assets::LINKEDIN_URL,
            href: assets::LINKEDIN_URL.to_string(),
            value: assets::LINKEDIN_URL,
            sub: None,
            external: true,
        },
        InfoRow {
            label: "Telegram",
            display: assets::TELEGRAM_HANDLE,
            href: assets::TELEGRAM_URL.to_string(),
            value: assets::TELEGRAM_HANDLE,
            sub: None,
            external: true,
        },
        InfoRow {
            label: "Rubika",
            display: assets::RUBIKA_HANDLE,
            href: assets::RUBIKA_URL.to_string(),
            value: assets::RUBIKA_HANDLE,
            sub: None,
            external: true,
        },
    ];

    let info_rows = rows
        .into_iter()
        .map(|row| {
            let sub = row
                .sub
                .map(|alt| html! { <span class="info-sub">{ alt }</span> });
            html! {
                <li class="info-row" style={row_style.clone()}>
                    <span class="info-label">{ row.label }</span>
                    <a
                        href={row.href}
                        target={row.external.then_some("_blank")}
                        rel={row.external.then_some("noreferrer")}
                    >
                        { row.display }
                    </a>
                    { sub }
                    <CopyButton value={row.value.to_string()} label={row.label.to_string()} />
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <section class="contact">
            <span class="contact-badge">{ &contact.badge }</span>
            <h2>{ &contact.title }</h2>
            <p class="section-subtitle">{ &contact.subtitle }</p>
            <div class="contact-grid">
                <div class="contact-info">
                    <h3>{ &contact.collaborate }</h3>
                    <p>{ &contact.description }</p>
                    <ul>{ info_rows }</ul>
                    <div class="contact-location">
                        <span class="info-label">{ &contact.location_label }</span>
                        <span>{ &contact.location_value }</span>
                    </div>
                </div>
                <form class="contact-form" onsubmit={on_submit}>
                    <label>
                        { &contact.form.name }
                        <input value={(*name).clone()} oninput={on_name} required=true />
                    </label>
                    <label>
                        { &contact.form.email }
                        <input type="email" value={(*email).clone()} oninput={on_email} required=true />
                    </label>
                    <label>
                        { &contact.form.message }
                        <textarea value={(*message).clone()} oninput={on_message} required=true></textarea>
                    </label>
                    <button
                        type="submit"
                        class="btn primary"
                        disabled={*form_state != FormState::Idle}
                    >
                        { send_label }
                    </button>
                </form>
            </div>
        </section>
    }
}
