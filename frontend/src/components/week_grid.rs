use chrono::NaiveDate;
use shared::WeekDay;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeekGridProps {
    pub title: String,
    pub days: Vec<WeekDay>,
    pub on_prev_week: Callback<MouseEvent>,
    pub on_next_week: Callback<MouseEvent>,
    pub on_select_day: Callback<NaiveDate>,
}

#[function_component(WeekGrid)]
pub fn week_grid(props: &WeekGridProps) -> Html {
    html! {
        <div class="weekly-calendar">
            <h2 class="week-title">{&props.title}</h2>

            <div class="week-navigation">
                <button class="btn week-nav-btn" onclick={props.on_prev_week.clone()} title="Previous Week">
                    {"prev"}
                </button>
                <button class="btn week-nav-btn" onclick={props.on_next_week.clone()} title="Next Week">
                    {"next"}
                </button>
            </div>

            <ul class="week-days">
                {for props.days.iter().map(|week_day| {
                    let day = week_day.day;
                    let on_select_day = props.on_select_day.clone();

                    html! {
                        <li key={day.to_string()}>
                            <button
                                class={classes!("week-day", week_day.selected.then_some("selected"))}
                                aria-pressed={week_day.selected.to_string()}
                                onclick={Callback::from(move |_: MouseEvent| on_select_day.emit(day))}
                            >
                                {week_day.label()}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
