use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;

use academy::forms::{submit, Submission};

#[derive(Clone, PartialEq)]
pub enum FormStatus {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

impl FormStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, FormStatus::Sending)
    }
}

pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_select(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        state.set(select.value());
    })
}

/// Runs the simulated submission and mirrors its progress into `status`.
/// `on_success` fires after the receipt arrives.
pub fn send<T>(form: T, status: UseStateHandle<FormStatus>, on_success: Callback<()>)
where
    T: Submission + 'static,
{
    // Validation errors show up without the fake delay.
    if let Err(err) = form.validate() {
        status.set(FormStatus::Failed(err.to_string()));
        return;
    }
    status.set(FormStatus::Sending);
    spawn_local(async move {
        match submit(form).await {
            Ok(receipt) => {
                gloo_console::log!(format!(
                    "{} confirmed at {}",
                    receipt.reference,
                    receipt.submitted_at.format("%H:%M:%S")
                ));
                status.set(FormStatus::Sent(receipt.message));
                on_success.emit(());
            }
            Err(err) => status.set(FormStatus::Failed(err.to_string())),
        }
    });
}

pub fn status_banner(status: &FormStatus) -> Html {
    match status {
        FormStatus::Idle => html! {},
        FormStatus::Sending => html! {
            <div class="form-status sending"><span class="loading-spinner"></span>{" Sending..."}</div>
        },
        FormStatus::Sent(message) => html! {
            <div class="form-status success">{message.clone()}</div>
        },
        FormStatus::Failed(message) => html! {
            <div class="form-status error">{message.clone()}</div>
        },
    }
}
