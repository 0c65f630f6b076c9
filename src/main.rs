use page_timer::components::{App, AppProps};
use page_timer::{DisplayMode, TimerConfig, logging, page};

fn main() {
    let config = TimerConfig::load();
    logging::init(logging::parse_level(&config.log_level));
    log::info!("page timer starting in {:?} mode", config.mode);

    match config.mode {
        DisplayMode::Component => {
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
        DisplayMode::Element => {
            // failures are logged by attach_to_element
            if let Ok(keep_alive) = page::attach_to_element(&config) {
                // dropping the Timer clears its interval; it lives as long as the page
                std::mem::forget(keep_alive);
            }
        }
    }
}
