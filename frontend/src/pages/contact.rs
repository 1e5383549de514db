use gloo::timers::future::TimeoutFuture;
use shared::contact::ContactForm;
use shared::content::SUPPORT_EMAIL;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_config::use_config;
use crate::services::logging::Logger;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let config = use_config();
    let form = use_state(ContactForm::default);
    let error_message = use_state(|| Option::<String>::None);
    let is_sending = use_state(|| false);
    let sent = use_state(|| false);

    let field_input = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_name = field_input(|f, v| f.name = v);
    let on_email = field_input(|f, v| f.email = v);
    let on_subject = field_input(|f, v| f.subject = v);

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let error_message = error_message.clone();
        let is_sending = is_sending.clone();
        let sent = sent.clone();
        let delay_ms = config.contact_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_sending {
                return;
            }
            if let Err(e) = form.validate() {
                error_message.set(Some(e.to_string()));
                return;
            }

            error_message.set(None);
            is_sending.set(true);

            let form = form.clone();
            let is_sending = is_sending.clone();
            let sent = sent.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                Logger::info_with_component("contact", &format!("Message queued: {}", form.subject));
                form.set(ContactForm::default());
                is_sending.set(false);
                sent.set(true);
            });
        })
    };

    let on_send_another = {
        let sent = sent.clone();
        Callback::from(move |_: MouseEvent| sent.set(false))
    };

    html! {
        <main class="contact-page">
            <div class="container narrow">
                <h1>{"Contact us"}</h1>
                <p class="content-subtitle">
                    {"Questions about NexClaw? Write to "}
                    <a href={format!("mailto:{}", SUPPORT_EMAIL)}>{SUPPORT_EMAIL}</a>
                    {" or use the form below."}
                </p>

                if *sent {
                    <div class="form-message success">
                        {"✅ Thanks! We'll get back to you within one business day."}
                        <button class="btn btn-link" onclick={on_send_another}>{"Send another message"}</button>
                    </div>
                } else {
                    <form class="contact-form" onsubmit={on_submit}>
                        if let Some(error) = (*error_message).clone() {
                            <div class="form-message error">{error}</div>
                        }
                        <div class="form-group">
                            <label for="contact-name">{"Name"}</label>
                            <input id="contact-name" type="text" value={form.name.clone()} oninput={on_name} disabled={*is_sending} />
                        </div>
                        <div class="form-group">
                            <label for="contact-email">{"Email"}</label>
                            <input id="contact-email" type="email" value={form.email.clone()} oninput={on_email} disabled={*is_sending} />
                        </div>
                        <div class="form-group">
                            <label for="contact-subject">{"Subject"}</label>
                            <input id="contact-subject" type="text" value={form.subject.clone()} oninput={on_subject} disabled={*is_sending} />
                        </div>
                        <div class="form-group">
                            <label for="contact-message">{"Message"}</label>
                            <textarea id="contact-message" rows="6" value={form.message.clone()} oninput={on_message} disabled={*is_sending} />
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={*is_sending}>
                            {if *is_sending { "Sending..." } else { "Send message" }}
                        </button>
                    </form>
                }
            </div>
        </main>
    }
}
