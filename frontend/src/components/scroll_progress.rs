use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;
use web_sys::window;

use academy::config::{BACK_TO_TOP_THRESHOLD_PERCENT, ROLLING_VELOCITY_THRESHOLD};
use academy::scroll::{ScrollProgressTracker, ScrollState, Section, SectionCatalog};

const TOOLTIP_HIDE_DELAY_MS: u32 = 1_500;

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    pub catalog: Rc<SectionCatalog>,
}

struct PageGeometry {
    scroll_top: f64,
    document_height: f64,
    viewport_height: f64,
}

fn read_geometry() -> Option<PageGeometry> {
    let window = window()?;
    let root = window.document()?.document_element()?;
    Some(PageGeometry {
        scroll_top: window.scroll_y().ok()?,
        document_height: root.scroll_height() as f64,
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

fn sample(tracker: &RefCell<ScrollProgressTracker>) {
    if let Some(page) = read_geometry() {
        tracker.borrow_mut().on_scroll(
            page.scroll_top,
            page.document_height,
            page.viewport_height,
            web_sys::js_sys::Date::now(),
        );
    }
}

fn scroll_window_to(offset: Option<f64>) {
    if let (Some(window), Some(offset)) = (window(), offset) {
        window.scroll_to_with_x_and_y(0.0, offset);
    }
}

#[function_component(ScrollProgress)]
pub fn scroll_progress(props: &ScrollProgressProps) -> Html {
    let tracker = {
        let catalog = props.catalog.clone();
        use_mut_ref(move || ScrollProgressTracker::new(catalog))
    };
    // Render never borrows the tracker: observers fire while it is mutably borrowed.
    let snapshot = {
        let catalog = props.catalog.clone();
        use_state(move || ScrollState {
            current_section: catalog.section_at(0.0).copied(),
            ..ScrollState::default()
        })
    };
    let tooltip_visible = use_state(|| false);
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    {
        let tracker = tracker.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(move |_| {
            let subscription = tracker
                .borrow_mut()
                .subscribe(move |state: &ScrollState| snapshot.set(state.clone()));

            let on_change = {
                let tracker = tracker.clone();
                Closure::wrap(Box::new(move || sample(&tracker)) as Box<dyn FnMut()>)
            };

            let window = window();
            if let Some(window) = &window {
                for event in ["scroll", "resize"] {
                    let _ = window.add_event_listener_with_callback(event, on_change.as_ref().unchecked_ref());
                }
            }

            // Initial check
            sample(&tracker);

            move || {
                if let Some(window) = window {
                    for event in ["scroll", "resize"] {
                        let _ = window.remove_event_listener_with_callback(event, on_change.as_ref().unchecked_ref());
                    }
                }
                subscription.unsubscribe();
                tracker.borrow_mut().dispose();
            }
        }, ());
    }

    let show_tooltip = {
        let tooltip_visible = tooltip_visible.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |_: MouseEvent| {
            // Dropping a pending Timeout cancels it
            hide_timer.borrow_mut().take();
            tooltip_visible.set(true);
        })
    };

    let hide_tooltip = {
        let tooltip_visible = tooltip_visible.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let tooltip_visible = tooltip_visible.clone();
            *hide_timer.borrow_mut() = Some(Timeout::new(TOOLTIP_HIDE_DELAY_MS, move || {
                tooltip_visible.set(false);
            }));
        })
    };

    let on_jump = {
        let tracker = tracker.clone();
        Callback::from(move |section: Section| {
            let target = tracker.borrow().jump_to_section(&section);
            scroll_window_to(target);
        })
    };

    let on_top = {
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| {
            let target = tracker.borrow().jump_to_top();
            scroll_window_to(target);
        })
    };

    let state = (*snapshot).clone();
    let progress = state.progress_percent;
    let rolling = state.velocity > ROLLING_VELOCITY_THRESHOLD;
    let accent = state.current_section.map(|s| s.color).unwrap_or("#1e8449");

    let tooltip = match (*tooltip_visible, state.current_section) {
        (true, Some(section)) => html! {
            <div class="progress-tooltip" style={format!("left: {:.2}%; border-color: {};", progress, section.color)}>
                <span class="tooltip-icon">{section.icon}</span>
                <strong>{section.name}</strong>
                <span class="tooltip-percent">{format!("{:.0}%", progress)}</span>
                <p>{section.description}</p>
            </div>
        },
        _ => html! {},
    };

    let current_name = state.current_section.map(|s| s.name);

    html! {
        <div class={classes!("scroll-progress", state.direction.as_class())}>
            <style>
                {r#"
                .scroll-progress .progress-track {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 6px;
                    background: rgba(255, 255, 255, 0.1);
                    z-index: 1000;
                }
                .scroll-progress .progress-fill {
                    height: 100%;
                    transition: width 0.1s linear, background 0.4s ease;
                }
                .scroll-progress .progress-ball {
                    position: absolute;
                    top: -6px;
                    transform: translateX(-50%);
                    font-size: 14px;
                }
                .scroll-progress .progress-ball.rolling {
                    animation: roll 0.4s linear infinite;
                }
                .scroll-progress.scroll-up .progress-ball.rolling {
                    animation-direction: reverse;
                }
                @keyframes roll { to { transform: translateX(-50%) rotate(360deg); } }
                .scroll-progress .scrollbar-thumb {
                    position: fixed;
                    right: 4px;
                    width: 4px;
                    height: 40px;
                    border-radius: 2px;
                    z-index: 1000;
                }
                .scroll-progress .progress-tooltip {
                    position: fixed;
                    top: 14px;
                    transform: translateX(-50%);
                    background: rgba(20, 20, 20, 0.9);
                    border: 1px solid;
                    border-radius: 8px;
                    padding: 0.5rem 0.75rem;
                    color: #fff;
                    z-index: 1001;
                }
                .scroll-progress .section-jumps {
                    position: fixed;
                    right: 16px;
                    top: 50%;
                    transform: translateY(-50%);
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    z-index: 999;
                }
                .scroll-progress .section-jump.active {
                    transform: scale(1.2);
                }
                .scroll-progress .back-to-top {
                    position: fixed;
                    bottom: 24px;
                    right: 24px;
                    border-radius: 50%;
                    width: 44px;
                    height: 44px;
                }
                "#}
            </style>
            <div class="progress-track" onmouseenter={show_tooltip} onmouseleave={hide_tooltip}>
                <div class="progress-fill" style={format!("width: {:.2}%; background: {};", progress, accent)}></div>
                <span class={classes!("progress-ball", rolling.then(|| "rolling"))} style={format!("left: {:.2}%;", progress)}>
                    {"🏏"}
                </span>
            </div>
            <div class="scrollbar-thumb" style={format!("top: calc({:.2}% - {:.2}px); background: {};", progress, progress * 0.4, accent)}></div>
            { tooltip }
            <nav class="section-jumps">
                {
                    for props.catalog.sections().iter().map(|section| {
                        let section = *section;
                        let on_jump = on_jump.clone();
                        let active = current_name == Some(section.name);
                        html! {
                            <button
                                class={classes!("section-jump", active.then(|| "active"))}
                                title={section.name}
                                style={format!("color: {};", section.color)}
                                onclick={Callback::from(move |_: MouseEvent| on_jump.emit(section))}
                            >
                                {section.icon}
                            </button>
                        }
                    })
                }
            </nav>
            if progress > BACK_TO_TOP_THRESHOLD_PERCENT {
                <button class="back-to-top" onclick={on_top}>{"↑"}</button>
            }
        </div>
    }
}
