use std::rc::Rc;

use chrono::NaiveDate;
use shared::{Availability, PlannerState, SubmitError, WeekDirection};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_planner";
const SAVED_NOTICE_MS: u32 = 3000;

/// Events fed into the planner reducer
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerAction {
    Navigate(WeekDirection),
    SelectDay(NaiveDate),
    SetStartTime(String),
    SetEndTime(String),
    SubmissionRejected(SubmitError),
    SubmissionStarted,
    SubmissionSucceeded(Availability),
    SubmissionFailed(String),
    LoadStarted,
    LoadSucceeded(Vec<Availability>),
    LoadFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerStore(pub PlannerState);

impl Reducible for PlannerStore {
    type Action = PlannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            PlannerAction::Navigate(direction) => state.navigate(direction),
            PlannerAction::SelectDay(day) => state.select_day(day),
            PlannerAction::SetStartTime(value) => state.set_start_time(value),
            PlannerAction::SetEndTime(value) => state.set_end_time(value),
            PlannerAction::SubmissionRejected(error) => state.submission_rejected(error),
            PlannerAction::SubmissionStarted => state.submission_started(),
            PlannerAction::SubmissionSucceeded(created) => state.submission_succeeded(created),
            PlannerAction::SubmissionFailed(message) => state.submission_failed(message),
            PlannerAction::LoadStarted => state.load_started(),
            PlannerAction::LoadSucceeded(availabilities) => state.load_succeeded(availabilities),
            PlannerAction::LoadFailed(message) => state.load_failed(message),
        }
        Rc::new(Self(state))
    }
}

pub struct UsePlannerResult {
    pub state: PlannerState,
    /// True for a few seconds after an availability was saved
    pub saved_notice: bool,
    pub actions: UsePlannerActions,
}

#[derive(Clone, PartialEq)]
pub struct UsePlannerActions {
    pub prev_week: Callback<MouseEvent>,
    pub next_week: Callback<MouseEvent>,
    pub select_day: Callback<NaiveDate>,
    pub on_start_change: Callback<Event>,
    pub on_end_change: Callback<Event>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_planner(config: &AppConfig) -> UsePlannerResult {
    let planner = use_reducer(|| PlannerStore(PlannerState::new(today())));
    let saved_notice = use_state(|| false);
    let api_client = use_memo(config.server_base.clone(), |base| ApiClient::with_base_url(base.clone()));

    // Load availabilities once on mount
    {
        let planner = planner.clone();
        let api_client = api_client.clone();
        let guide_id = config.guide_id.clone();

        use_effect_with((), move |_| {
            planner.dispatch(PlannerAction::LoadStarted);

            spawn_local(async move {
                match api_client.get_availabilities(&guide_id).await {
                    Ok(availabilities) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Loaded {} availabilities for {}", availabilities.len(), guide_id),
                        );
                        planner.dispatch(PlannerAction::LoadSucceeded(availabilities));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to load availabilities: {}", e));
                        planner.dispatch(PlannerAction::LoadFailed(format!(
                            "Could not load availabilities. {}",
                            e
                        )));
                    }
                }
            });

            || ()
        });
    }

    // Navigation callbacks
    let prev_week = {
        let planner = planner.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            planner.dispatch(PlannerAction::Navigate(WeekDirection::Previous));
        })
    };

    let next_week = {
        let planner = planner.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            planner.dispatch(PlannerAction::Navigate(WeekDirection::Next));
        })
    };

    let select_day = {
        let planner = planner.clone();
        Callback::from(move |day: NaiveDate| {
            Logger::debug_with_component(COMPONENT, &format!("Selected {}", day));
            planner.dispatch(PlannerAction::SelectDay(day));
        })
    };

    // Form input handlers
    let on_start_change = {
        let planner = planner.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            planner.dispatch(PlannerAction::SetStartTime(input.value()));
        })
    };

    let on_end_change = {
        let planner = planner.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            planner.dispatch(PlannerAction::SetEndTime(input.value()));
        })
    };

    // Validate locally, then create on the server
    let submit = {
        let planner = planner.clone();
        let api_client = api_client.clone();
        let guide_id = config.guide_id.clone();
        let saved_notice = saved_notice.clone();

        Callback::from(move |_: ()| {
            let request = match planner.0.prepare_submission(&guide_id) {
                Ok(request) => request,
                Err(error) => {
                    Logger::warn_with_component(COMPONENT, &format!("Submission rejected: {}", error));
                    planner.dispatch(PlannerAction::SubmissionRejected(error));
                    return;
                }
            };

            planner.dispatch(PlannerAction::SubmissionStarted);

            let planner = planner.clone();
            let api_client = api_client.clone();
            let saved_notice = saved_notice.clone();

            spawn_local(async move {
                match api_client.create_availability(&request).await {
                    Ok(created) => {
                        Logger::info_with_component(COMPONENT, &format!("Created availability {}", created.id));
                        planner.dispatch(PlannerAction::SubmissionSucceeded(created));
                        saved_notice.set(true);

                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(SAVED_NOTICE_MS).await;
                            saved_notice.set(false);
                        });
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to create availability: {}", e));
                        planner.dispatch(PlannerAction::SubmissionFailed(format!(
                            "Could not save availability. {}",
                            e
                        )));
                    }
                }
            });
        })
    };

    let actions = UsePlannerActions {
        prev_week,
        next_week,
        select_day,
        on_start_change,
        on_end_change,
        submit,
    };

    UsePlannerResult {
        state: planner.0.clone(),
        saved_notice: *saved_notice,
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn store() -> Rc<PlannerStore> {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        Rc::new(PlannerStore(PlannerState::new(today)))
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_reducer_applies_form_events() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let state = store()
            .reduce(PlannerAction::SelectDay(day))
            .reduce(PlannerAction::SetStartTime("09:00".to_string()))
            .reduce(PlannerAction::SetEndTime("10:30".to_string()));

        assert_eq!(state.0.selected(), Some(day));
        assert!(state.0.prepare_submission("guide").is_ok());
    }

    #[wasm_bindgen_test]
    fn test_reducer_success_flow() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let created = Availability {
            id: "new".to_string(),
            start_at: at(9),
            end_at: at(10),
            added: false,
        };

        let state = store()
            .reduce(PlannerAction::LoadSucceeded(Vec::new()))
            .reduce(PlannerAction::SelectDay(day))
            .reduce(PlannerAction::SubmissionStarted)
            .reduce(PlannerAction::SubmissionSucceeded(created));

        let list = state.0.sorted_availabilities();
        assert_eq!(list.len(), 1);
        assert!(list[0].added);
        assert_eq!(state.0.selected(), None);
    }

    #[wasm_bindgen_test]
    fn test_reducer_navigation() {
        let state = store()
            .reduce(PlannerAction::Navigate(WeekDirection::Next))
            .reduce(PlannerAction::Navigate(WeekDirection::Previous));
        assert_eq!(state.0.anchor(), NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }
}
