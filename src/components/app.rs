use super::time_display::TimeDisplay;
use crate::config::TimerConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: TimerConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let cfg = &props.config;
    html! {
        <TimeDisplay element_id={cfg.element_id.clone()} period_ms={cfg.period_ms} />
    }
}
