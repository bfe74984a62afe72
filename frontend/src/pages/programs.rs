use yew::prelude::*;
use web_sys::HtmlInputElement;

use academy::catalog::{academy_programs, ComparisonToggle, FilterTag, FilterableCatalog, OfferingRecord};
use academy::config::MAX_COMPARISON;

pub enum ProgramsMsg {
    SetTag(FilterTag),
    SetSearch(String),
    ToggleCompare(&'static str),
    ClearCompare,
    ResetFilters,
}

pub struct Programs {
    catalog: FilterableCatalog,
    search_input: String,
    notice: Option<String>,
}

impl Component for Programs {
    type Message = ProgramsMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            catalog: FilterableCatalog::new(academy_programs()),
            search_input: String::new(),
            notice: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ProgramsMsg::SetTag(tag) => {
                self.catalog.set_filter_tag(tag);
                true
            }
            ProgramsMsg::SetSearch(term) => {
                self.catalog.set_search_term(&term);
                self.search_input = term;
                true
            }
            ProgramsMsg::ToggleCompare(id) => {
                self.notice = match self.catalog.toggle_comparison(id) {
                    ComparisonToggle::Full => Some(format!(
                        "You can compare up to {} programs. Remove one to add another.",
                        MAX_COMPARISON
                    )),
                    _ => None,
                };
                true
            }
            ProgramsMsg::ClearCompare => {
                self.catalog.clear_comparison();
                self.notice = None;
                true
            }
            ProgramsMsg::ResetFilters => {
                self.catalog.reset_filters();
                self.search_input.clear();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let filter_buttons = FilterTag::ALL_TAGS.iter().map(|tag| {
            let tag = *tag;
            let active = self.catalog.active_tag() == tag;
            html! {
                <button
                    class={classes!("filter-button", active.then(|| "active"))}
                    onclick={link.callback(move |_| ProgramsMsg::SetTag(tag))}
                >
                    {tag.label()}
                </button>
            }
        });

        let on_search = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ProgramsMsg::SetSearch(input.value())
        });

        html! {
            <div class="programs-page">
                <section class="programs-hero">
                    <h1>{"Training programs"}</h1>
                    <p>{"Find the right program by age, level or schedule."}</p>
                </section>

                <div class="programs-controls">
                    <div class="filter-buttons">{ for filter_buttons }</div>
                    <input
                        class="program-search"
                        type="search"
                        placeholder="Search programs..."
                        value={self.search_input.clone()}
                        oninput={on_search}
                    />
                </div>

                if let Some(notice) = &self.notice {
                    <div class="compare-notice">{notice.clone()}</div>
                }

                {
                    if self.catalog.visible_count() == 0 {
                        html! {
                            <div class="no-results">
                                <p>{"No programs match your search."}</p>
                                <button onclick={link.callback(|_| ProgramsMsg::ResetFilters)}>
                                    {"Clear filters"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="program-grid">
                                { for self.catalog.visible_records().map(|record| self.program_card(ctx, record)) }
                            </div>
                        }
                    }
                }

                { self.comparison_table(ctx) }
            </div>
        }
    }
}

impl Programs {
    fn program_card(&self, ctx: &Context<Self>, record: &OfferingRecord) -> Html {
        let id = record.id;
        let selected = self.catalog.is_selected(id);
        html! {
            <div class={classes!("program-card", selected.then(|| "selected"))}>
                <span class="program-age">{record.age_group}</span>
                <h3>{record.title}</h3>
                <span class="program-level">{record.level}</span>
                <p>{record.description}</p>
                <ul class="program-highlights">
                    { for record.highlights.iter().map(|h| html! { <li>{*h}</li> }) }
                </ul>
                <div class="program-meta">
                    <span>{record.duration}</span>
                    <span>{record.schedule}</span>
                </div>
                <div class="program-footer">
                    <span class="program-price">{record.formatted_price()}</span>
                    <button
                        class={classes!("compare-button", selected.then(|| "active"))}
                        onclick={ctx.link().callback(move |_| ProgramsMsg::ToggleCompare(id))}
                    >
                        { if selected { "✓ Comparing" } else { "Compare" } }
                    </button>
                    <a class="enroll-link" href={format!("/enroll?program={}", id)}>{"Enroll"}</a>
                </div>
            </div>
        }
    }

    fn comparison_table(&self, ctx: &Context<Self>) -> Html {
        let selected = self.catalog.comparison_records();
        if selected.is_empty() {
            return html! {};
        }

        let row = |label: &'static str, value: &dyn Fn(&OfferingRecord) -> String| {
            html! {
                <tr>
                    <th>{label}</th>
                    { for selected.iter().map(|r| html! { <td>{value(r)}</td> }) }
                </tr>
            }
        };

        html! {
            <section class="comparison">
                <div class="comparison-header">
                    <h2>{format!("Comparing {} of {}", selected.len(), MAX_COMPARISON)}</h2>
                    <button onclick={ctx.link().callback(|_| ProgramsMsg::ClearCompare)}>{"Clear"}</button>
                </div>
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th></th>
                            { for selected.iter().map(|r| html! { <th>{r.title}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { row("Price", &|r| r.formatted_price()) }
                        { row("Level", &|r| r.level.to_string()) }
                        { row("Age group", &|r| r.age_group.to_string()) }
                        { row("Duration", &|r| r.duration.to_string()) }
                        { row("Schedule", &|r| r.schedule.to_string()) }
                    </tbody>
                </table>
            </section>
        }
    }
}
