use yew::prelude::*;

use academy::content::COACHES;
use crate::components::testimonials::Testimonials;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="about-hero">
                <h1>{"Our coaches"}</h1>
                <p>{"Every session is run by certified coaches who have played the game at a high level."}</p>
            </section>

            <section class="coach-grid">
                {
                    for COACHES.iter().map(|coach| html! {
                        <div class="coach-card">
                            <h3>{coach.name}</h3>
                            <span class="coach-title">{coach.title}</span>
                            <p class="coach-speciality">
                                {format!("{} · {} years coaching", coach.speciality, coach.experience_years)}
                            </p>
                            <p>{coach.bio}</p>
                        </div>
                    })
                }
            </section>

            <section class="about-testimonials">
                <h2>{"What our players say"}</h2>
                <Testimonials />
            </section>
        </div>
    }
}
