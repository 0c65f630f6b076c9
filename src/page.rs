use crate::clock::DateClock;
use crate::config::TimerConfig;
use crate::error::TimerError;
use crate::scheduler::WindowScheduler;
use crate::sink::ElementSink;
use crate::timer::Timer;

/// Starts a timer writing into the configured page element.
///
/// Failures are logged here or by [`Timer::start`]; callers only need to
/// handle the result.
pub fn attach_to_element(config: &TimerConfig) -> Result<Timer, TimerError> {
    let scheduler = WindowScheduler::new().ok_or_else(|| report("no browser window".into()))?;
    let sink = ElementSink::by_id(&config.element_id)
        .ok_or_else(|| report(format!("element #{} not found", config.element_id)))?;
    let mut timer = Timer::new(DateClock, scheduler)
        .with_period(config.period_ms)
        .with_sink(sink);
    timer.start()?;
    Ok(timer)
}

fn report(msg: String) -> TimerError {
    let err = TimerError::config(msg);
    log::error!("{}", err);
    err
}
