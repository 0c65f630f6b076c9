use crate::clock::DateClock;
use crate::scheduler::WindowScheduler;
use crate::sink::CallbackSink;
use crate::timer::Timer;
use crate::util::format_elapsed;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub element_id: AttrValue,
    pub period_ms: u32,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let text = use_state(|| format_elapsed(0));
    {
        let text = text.clone();
        use_effect_with(props.period_ms, move |&period_ms| {
            let timer = match WindowScheduler::new() {
                Some(scheduler) => {
                    let on_tick = Callback::from(move |s: String| text.set(s));
                    let mut timer = Timer::new(DateClock, scheduler)
                        .with_period(period_ms)
                        .with_sink(CallbackSink(on_tick));
                    // start() logs its own failures
                    timer.start().ok().map(|()| timer)
                }
                None => {
                    log::error!("no browser window; timer not started");
                    None
                }
            };
            // teardown on unmount or period change
            move || {
                if let Some(timer) = timer {
                    timer.destroy();
                }
            }
        });
    }
    html! {
        <div id={props.element_id.clone()} style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">
            { (*text).clone() }
        </div>
    }
}
