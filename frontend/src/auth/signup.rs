// Sign-up and login are simulated: the forms validate, wait, and redirect.
// No account is created and nothing is stored.

pub mod login {
    use yew::prelude::*;
    use yew_router::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use gloo_timers::future::TimeoutFuture;

    use academy::forms::LoginRequest;
    use crate::Route;
    use crate::components::form_fields::{bind_input, send, status_banner, FormStatus};

    #[function_component]
    pub fn Login() -> Html {
        let email = use_state(String::new);
        let password = use_state(String::new);
        let status = use_state(|| FormStatus::Idle);
        let navigator = use_navigator();

        let onsubmit = {
            let email = email.clone();
            let password = password.clone();
            let status = status.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                let form = LoginRequest {
                    email: (*email).clone(),
                    password: (*password).clone(),
                };
                let navigator = navigator.clone();
                send(form, status.clone(), Callback::from(move |_| {
                    let navigator = navigator.clone();
                    // Redirect after delay
                    spawn_local(async move {
                        TimeoutFuture::new(1_000).await;
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    });
                }));
            })
        };

        html! {
            <div class="auth-page">
                <div class="login-container">
                    <h1>{"Login"}</h1>
                    <form {onsubmit}>
                        <input type="email" placeholder="Email" value={(*email).clone()} oninput={bind_input(&email)} />
                        <input type="password" placeholder="Password" value={(*password).clone()} oninput={bind_input(&password)} />
                        <button type="submit" disabled={status.is_sending()}>{"Login"}</button>
                    </form>
                    { status_banner(&status) }
                    <p>
                        {"New here? "}
                        <Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>>
                    </p>
                </div>
            </div>
        }
    }
}

pub mod register {
    use yew::prelude::*;
    use yew_router::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use gloo_timers::future::TimeoutFuture;

    use academy::forms::SignUpRequest;
    use crate::Route;
    use crate::components::form_fields::{bind_input, send, status_banner, FormStatus};

    #[function_component]
    pub fn Register() -> Html {
        let name = use_state(String::new);
        let email = use_state(String::new);
        let password = use_state(String::new);
        let confirm_password = use_state(String::new);
        let status = use_state(|| FormStatus::Idle);
        let navigator = use_navigator();

        let onsubmit = {
            let name = name.clone();
            let email = email.clone();
            let password = password.clone();
            let confirm_password = confirm_password.clone();
            let status = status.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                let form = SignUpRequest {
                    name: (*name).clone(),
                    email: (*email).clone(),
                    password: (*password).clone(),
                    confirm_password: (*confirm_password).clone(),
                };
                let navigator = navigator.clone();
                send(form, status.clone(), Callback::from(move |_| {
                    let navigator = navigator.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(2_000).await;
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Programs);
                        }
                    });
                }));
            })
        };

        html! {
            <div class="auth-page">
                <div class="login-container">
                    <h1>{"Create your account"}</h1>
                    <form {onsubmit}>
                        <input type="text" placeholder="Full name" value={(*name).clone()} oninput={bind_input(&name)} />
                        <input type="email" placeholder="Email" value={(*email).clone()} oninput={bind_input(&email)} />
                        <input type="password" placeholder="Password (8+ characters)" value={(*password).clone()} oninput={bind_input(&password)} />
                        <input type="password" placeholder="Confirm password" value={(*confirm_password).clone()} oninput={bind_input(&confirm_password)} />
                        <button type="submit" disabled={status.is_sending()}>{"Sign up"}</button>
                    </form>
                    { status_banner(&status) }
                    <p>
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                    </p>
                </div>
            </div>
        }
    }
}
