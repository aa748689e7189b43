use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfilePanelProps {
    pub guide_id: String,
}

#[function_component(ProfilePanel)]
pub fn profile_panel(props: &ProfilePanelProps) -> Html {
    html! {
        <aside class="profile-panel">
            <h1>{"Profile"}</h1>
            <p class="profile-id">{format!("User ID: {}", props.guide_id)}</p>
        </aside>
    }
}
