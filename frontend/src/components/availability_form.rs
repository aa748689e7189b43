use chrono::NaiveDate;
use yew::prelude::*;

use crate::services::date_utils::{format_long_date, weekday_name};

#[derive(Properties, PartialEq)]
pub struct AvailabilityFormProps {
    // Form state
    pub day: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub submitting: bool,
    pub form_error: Option<String>,

    // Event handlers
    pub on_start_change: Callback<Event>,
    pub on_end_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(AvailabilityForm)]
pub fn availability_form(props: &AvailabilityFormProps) -> Html {
    html! {
        <section class="availability-form-section">
            <h3>{format!("Add availability for {}, {}", weekday_name(props.day), format_long_date(props.day))}</h3>

            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form class="availability-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="start-time">{"Start"}</label>
                    <input
                        type="time"
                        id="start-time"
                        value={props.start_time.clone()}
                        onchange={props.on_start_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="end-time">{"End"}</label>
                    <input
                        type="time"
                        id="end-time"
                        value={props.end_time.clone()}
                        onchange={props.on_end_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={props.submitting}
                >
                    {if props.submitting { "Saving..." } else { "Add availability" }}
                </button>
            </form>
        </section>
    }
}
