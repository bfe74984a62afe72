use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Out of bounds"}</h1>
            <p>{"That page went over the rope. Let's get you back to the middle."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
