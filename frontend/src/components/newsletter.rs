use yew::prelude::*;

use academy::forms::NewsletterSignup;
use super::form_fields::{bind_input, send, status_banner, FormStatus};

#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let email = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);

    let onsubmit = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = NewsletterSignup { email: (*email).clone() };
            let email = email.clone();
            send(form, status.clone(), Callback::from(move |_| email.set(String::new())));
        })
    };

    html! {
        <form class="newsletter-form" {onsubmit}>
            <h3>{"Stay in the loop"}</h3>
            <p>{"Camp dates, trial days and match reports. One email a month."}</p>
            <div class="newsletter-row">
                <input
                    type="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
                <button type="submit" disabled={status.is_sending()}>{"Subscribe"}</button>
            </div>
            { status_banner(&status) }
        </form>
    }
}
