use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::{ProfilePanel, WeeklyPlanner};
use config::AppConfig;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_build_env());

    use_effect_with((), {
        let config = config.clone();
        move |_| {
            Logger::info_with_component(
                "app",
                &format!("Weekly planner for {} against {}", config.guide_id, config.server_base),
            );
            || ()
        }
    });

    html! {
        <div class="container">
            <div class="layout">
                <div class="layout-side">
                    <ProfilePanel guide_id={config.guide_id.clone()} />
                </div>
                <main class="layout-main">
                    <h1>{"Weekly Planner"}</h1>
                    <WeeklyPlanner config={(*config).clone()} />
                </main>
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
