use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use academy::catalog::academy_programs;
use academy::content::STATS;
use academy::scroll::SectionCatalog;
use crate::components::newsletter::Newsletter;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::testimonials::Testimonials;
use crate::Route;

const FEATURES: [(&str, &str, &str); 4] = [
    ("🎯", "Indoor & outdoor nets", "Six turf wickets and four all-weather indoor lanes."),
    ("🤖", "Bowling machines", "Pace and spin machines up to 140 km/h for every batch."),
    ("🎥", "Video analysis", "Frame-by-frame breakdowns of your technique after each session."),
    ("💪", "Fitness programs", "Cricket-specific strength, agility and injury prevention."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_state(|| Rc::new(SectionCatalog::academy()));

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let anchor = |name: &str| {
        catalog
            .by_name(name)
            .map(|s| s.anchor_id())
            .unwrap_or_else(|| name.to_lowercase())
    };

    html! {
        <div class="landing-page">
            <ScrollProgress catalog={(*catalog).clone()} />

            <header class="hero" id={anchor("Hero")}>
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1>{"Where champions learn the game"}</h1>
                    <p class="hero-subtitle">
                        {"Professional cricket coaching for juniors, youth, women and adults. Former first-class players, modern facilities, real match experience."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Enroll} classes="forward-link">
                            <button class="hero-cta">{"Book a Free Trial"}</button>
                        </Link<Route>>
                        <Link<Route> to={Route::Programs} classes="faq-link">
                            {"Explore programs"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section class="programs-preview" id={anchor("Programs")}>
                <h2>{"Programs for every cricketer"}</h2>
                <div class="program-grid">
                    {
                        for academy_programs().into_iter().take(3).map(|program| html! {
                            <div class="program-card">
                                <span class="program-age">{program.age_group}</span>
                                <h3>{program.title}</h3>
                                <p>{program.description}</p>
                                <span class="program-price">{program.formatted_price()}</span>
                            </div>
                        })
                    }
                </div>
                <Link<Route> to={Route::Programs} classes="forward-link">
                    {"See all programs →"}
                </Link<Route>>
            </section>

            <section class="features" id={anchor("Features")}>
                <h2>{"Built for serious training"}</h2>
                <div class="feature-grid">
                    {
                        for FEATURES.iter().map(|(icon, title, text)| html! {
                            <div class="feature-block">
                                <span class="feature-icon">{*icon}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="stats" id={anchor("Stats")}>
                <h2>{"The numbers"}</h2>
                <div class="stats-grid">
                    {
                        for STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <span class="stat-value">{stat.value}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        })
                    }
                </div>
                <Testimonials />
            </section>

            <section class="contact-cta" id={anchor("Contact")}>
                <h2>{"Ready to pad up?"}</h2>
                <p>{"Drop us a line or book a trial session. We reply within a day."}</p>
                <div class="hero-cta-group">
                    <Link<Route> to={Route::Contact} classes="forward-link">
                        <button class="hero-cta">{"Contact us"}</button>
                    </Link<Route>>
                </div>
                <Newsletter />
            </section>

            <footer class="footer">
                <p>{format!("© {} Cover Drive Academy", chrono::Utc::now().format("%Y"))}</p>
            </footer>
        </div>
    }
}
