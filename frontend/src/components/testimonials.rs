use yew::prelude::*;
use gloo_timers::callback::Timeout;

use academy::config::TESTIMONIAL_AUTOPLAY_MS;
use academy::content::{Carousel, TESTIMONIALS};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_state(|| Carousel::new(TESTIMONIALS.len()));

    // Re-armed on every slide change, so manual navigation restarts the clock.
    {
        let deps = *carousel;
        let carousel = carousel.clone();
        use_effect_with_deps(move |current: &Carousel| {
            let next = current.next();
            let timeout = Timeout::new(TESTIMONIAL_AUTOPLAY_MS, move || carousel.set(next));
            move || drop(timeout)
        }, deps);
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };

    let testimonial = TESTIMONIALS[carousel.index()];
    let stars = "★".repeat(testimonial.rating as usize) + &"☆".repeat(5 - testimonial.rating as usize);

    html! {
        <div class="testimonials">
            <button class="carousel-arrow" onclick={on_prev}>{"‹"}</button>
            <blockquote class="testimonial-card">
                <div class="testimonial-stars">{stars}</div>
                <p>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</p>
                <footer>
                    <strong>{testimonial.author}</strong>
                    <span>{testimonial.role}</span>
                </footer>
            </blockquote>
            <button class="carousel-arrow" onclick={on_next}>{"›"}</button>
            <div class="carousel-dots">
                {
                    for (0..carousel.len()).map(|i| {
                        let carousel = carousel.clone();
                        let active = carousel.index() == i;
                        html! {
                            <span
                                class={classes!("dot", active.then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| carousel.set(carousel.go_to(i)))}
                            ></span>
                        }
                    })
                }
            </div>
        </div>
    }
}
