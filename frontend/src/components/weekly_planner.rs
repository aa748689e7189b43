use shared::FormPhase;
use yew::prelude::*;

use super::availability_form::AvailabilityForm;
use super::availability_list::AvailabilityList;
use super::week_grid::WeekGrid;
use crate::config::AppConfig;
use crate::hooks::use_planner::use_planner;

#[derive(Properties, PartialEq)]
pub struct WeeklyPlannerProps {
    pub config: AppConfig,
}

#[function_component(WeeklyPlanner)]
pub fn weekly_planner(props: &WeeklyPlannerProps) -> Html {
    let planner = use_planner(&props.config);
    let state = &planner.state;
    let actions = &planner.actions;

    // Validation problems take precedence over the last server error
    let form_error = state
        .form_error()
        .map(ToString::to_string)
        .or_else(|| state.submit_error().map(str::to_string));

    let form = match (state.form_phase(), state.selected()) {
        (FormPhase::Closed, _) | (_, None) => html! {},
        (phase, Some(day)) => html! {
            <AvailabilityForm
                day={day}
                start_time={state.start_input().to_string()}
                end_time={state.end_input().to_string()}
                submitting={phase == FormPhase::Submitting}
                form_error={form_error}
                on_start_change={actions.on_start_change.clone()}
                on_end_change={actions.on_end_change.clone()}
                on_submit={actions.submit.clone()}
            />
        },
    };

    html! {
        <div class="weekly-planner">
            <WeekGrid
                title={state.week_title()}
                days={state.week_days().to_vec()}
                on_prev_week={actions.prev_week.clone()}
                on_next_week={actions.next_week.clone()}
                on_select_day={actions.select_day.clone()}
            />

            {form}

            {if planner.saved_notice {
                html! { <div class="form-message success">{"Availability saved."}</div> }
            } else { html! {} }}

            <AvailabilityList
                availabilities={state.sorted_availabilities()}
                loading={state.is_loading()}
                load_error={state.load_error().map(str::to_string)}
            />
        </div>
    }
}
