use shared::Availability;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvailabilityListProps {
    pub availabilities: Vec<Availability>,
    pub loading: bool,
    pub load_error: Option<String>,
}

#[function_component(AvailabilityList)]
pub fn availability_list(props: &AvailabilityListProps) -> Html {
    let body = if props.loading {
        html! { <div class="loading">{"Loading availabilities..."}</div> }
    } else if props.availabilities.is_empty() {
        html! { <div class="empty">{"No availabilities yet."}</div> }
    } else {
        html! {
            <table class="availabilities-table">
                <thead>
                    <tr>
                        <th>{"Day"}</th>
                        <th>{"Time"}</th>
                        <th>{"Length"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.availabilities.iter().map(|availability| {
                        let minutes = availability.duration().num_minutes();
                        html! {
                            <tr key={availability.id.clone()} class={classes!(availability.added.then_some("just-added"))}>
                                <td class="day">{availability.day_label()}</td>
                                <td class="time">{availability.time_range_label()}</td>
                                <td class="length">{format!("{}h {:02}m", minutes / 60, minutes % 60)}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        }
    };

    html! {
        <section class="availabilities-section">
            <h2>{"Availabilities"}</h2>

            {if let Some(error) = props.load_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {body}
        </section>
    }
}
