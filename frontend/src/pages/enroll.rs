use yew::prelude::*;
use yew_router::prelude::*;
use serde::Deserialize;

use academy::catalog::academy_programs;
use academy::forms::EnrollmentRequest;
use crate::components::form_fields::{bind_input, bind_select, send, status_banner, FormStatus};

#[derive(Deserialize)]
struct EnrollQuery {
    program: Option<String>,
}

#[function_component(Enroll)]
pub fn enroll() -> Html {
    let preselected = use_location()
        .and_then(|location| location.query::<EnrollQuery>().ok())
        .and_then(|query| query.program)
        .unwrap_or_default();

    let student_name = use_state(String::new);
    let age = use_state(String::new);
    let guardian_email = use_state(String::new);
    let phone = use_state(String::new);
    let program_id = use_state(move || preselected);
    let status = use_state(|| FormStatus::Idle);

    let onsubmit = {
        let student_name = student_name.clone();
        let age = age.clone();
        let guardian_email = guardian_email.clone();
        let phone = phone.clone();
        let program_id = program_id.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = EnrollmentRequest {
                student_name: (*student_name).clone(),
                // Unparseable ages fail the range check
                age: age.trim().parse().unwrap_or(0),
                guardian_email: (*guardian_email).clone(),
                phone: (*phone).clone(),
                program_id: (*program_id).clone(),
            };
            send(form, status.clone(), Callback::noop());
        })
    };

    let programs = academy_programs();

    html! {
        <div class="enroll-page">
            <section class="enroll-hero">
                <h1>{"Enroll a player"}</h1>
                <p>{"Pick a program and we'll book a free trial session."}</p>
            </section>

            if let FormStatus::Sent(_) = *status {
                { status_banner(&status) }
            } else {
                <form class="enroll-form" {onsubmit}>
                    <label>{"Student name"}
                        <input type="text" value={(*student_name).clone()} oninput={bind_input(&student_name)} />
                    </label>
                    <label>{"Age"}
                        <input type="number" min="5" max="60" value={(*age).clone()} oninput={bind_input(&age)} />
                    </label>
                    <label>{"Parent / guardian email"}
                        <input type="email" value={(*guardian_email).clone()} oninput={bind_input(&guardian_email)} />
                    </label>
                    <label>{"Phone"}
                        <input type="tel" value={(*phone).clone()} oninput={bind_input(&phone)} />
                    </label>
                    <label>{"Program"}
                        <select onchange={bind_select(&program_id)}>
                            <option value="" selected={program_id.is_empty()}>{"Choose a program"}</option>
                            {
                                for programs.iter().map(|p| html! {
                                    <option value={p.id} selected={*program_id == p.id}>
                                        {format!("{} ({})", p.title, p.formatted_price())}
                                    </option>
                                })
                            }
                        </select>
                    </label>
                    <button type="submit" disabled={status.is_sending()}>{"Enroll"}</button>
                    { status_banner(&status) }
                </form>
            }
        </div>
    }
}
