use yew::prelude::*;

use academy::forms::ContactMessage;
use crate::components::form_fields::{bind_input, bind_textarea, send, status_banner, FormStatus};

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let subject = subject.clone();
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: Some((*phone).clone()).filter(|p| !p.trim().is_empty()),
                subject: (*subject).clone(),
                message: (*message).clone(),
            };
            let cleared = {
                let subject = subject.clone();
                let message = message.clone();
                Callback::from(move |_| {
                    subject.set(String::new());
                    message.set(String::new());
                })
            };
            send(form, status.clone(), cleared);
        })
    };

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Get in touch"}</h1>
                <p>{"Questions about programs, fees or trial sessions? Send us a message."}</p>
            </section>

            <form class="contact-form" {onsubmit}>
                <label>{"Name"}
                    <input type="text" value={(*name).clone()} oninput={bind_input(&name)} />
                </label>
                <label>{"Email"}
                    <input type="email" value={(*email).clone()} oninput={bind_input(&email)} />
                </label>
                <label>{"Phone (optional)"}
                    <input type="tel" value={(*phone).clone()} oninput={bind_input(&phone)} />
                </label>
                <label>{"Subject"}
                    <input type="text" value={(*subject).clone()} oninput={bind_input(&subject)} />
                </label>
                <label>{"Message"}
                    <textarea rows="5" value={(*message).clone()} oninput={bind_textarea(&message)} />
                </label>
                <button type="submit" disabled={status.is_sending()}>{"Send message"}</button>
                { status_banner(&status) }
            </form>

            <section class="contact-details">
                <p>{"📍 Academy Grounds, Ring Road"}</p>
                <p>{"🕕 Mon–Sat, 6 AM – 9 PM"}</p>
            </section>
        </div>
    }
}
